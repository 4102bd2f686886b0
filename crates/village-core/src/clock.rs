//! Day clock for the village simulation.
//!
//! The clock is a two-level counter: a 1-based day index and a 0-based
//! tick position within the day, plus a running total of ticks executed.
//! It carries no other state. All advances use checked arithmetic.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Day counter would overflow.
    #[error("day counter overflow: cannot advance beyond u32::MAX")]
    DayOverflow,

    /// A tick was requested before the first day started.
    #[error("no day has been started")]
    NotStarted,

    /// The current day already ran all of its ticks.
    #[error("day {day} is complete ({ticks_per_day} ticks); start the next day first")]
    DayComplete {
        /// The finished day.
        day: u32,
        /// Configured day length.
        ticks_per_day: u32,
    },

    /// Invalid time configuration (e.g. zero ticks per day).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Simulation clock tracking day and tick.
///
/// Before the first [`start_day`](Self::start_day) the day index is 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayClock {
    /// Current day (1-based once started).
    day: u32,

    /// Ticks already executed within the current day.
    tick_in_day: u32,

    /// Ticks executed since the start of the run.
    total_ticks: u64,

    /// Configured day length.
    ticks_per_day: u32,
}

impl DayClock {
    /// Create a clock for days of `ticks_per_day` ticks.
    pub fn new(ticks_per_day: u32) -> Result<Self, ClockError> {
        if ticks_per_day == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "ticks_per_day must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            day: 0,
            tick_in_day: 0,
            total_ticks: 0,
            ticks_per_day,
        })
    }

    /// Move to the next day and reset the in-day tick position. Returns the
    /// new 1-based day index.
    pub fn start_day(&mut self) -> Result<u32, ClockError> {
        self.day = self.day.checked_add(1).ok_or(ClockError::DayOverflow)?;
        self.tick_in_day = 0;
        Ok(self.day)
    }

    /// Advance by one tick. Returns the new total tick count.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        if self.day == 0 {
            return Err(ClockError::NotStarted);
        }
        if self.day_complete() {
            return Err(ClockError::DayComplete {
                day: self.day,
                ticks_per_day: self.ticks_per_day,
            });
        }
        self.total_ticks = self
            .total_ticks
            .checked_add(1)
            .ok_or(ClockError::TickOverflow)?;
        self.tick_in_day = self.tick_in_day.saturating_add(1);
        Ok(self.total_ticks)
    }

    /// Current 1-based day (0 before the first day starts).
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Ticks already executed in the current day.
    pub const fn tick_in_day(&self) -> u32 {
        self.tick_in_day
    }

    /// Ticks executed since the start of the run.
    pub const fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Configured day length.
    pub const fn ticks_per_day(&self) -> u32 {
        self.ticks_per_day
    }

    /// Whether the current day has run all of its ticks.
    pub const fn day_complete(&self) -> bool {
        self.tick_in_day >= self.ticks_per_day
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_day_is_rejected() {
        assert!(matches!(
            DayClock::new(0),
            Err(ClockError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn clock_starts_before_day_one() {
        let clock = DayClock::new(24).unwrap();
        assert_eq!(clock.day(), 0);
        assert_eq!(clock.total_ticks(), 0);
    }

    #[test]
    fn advance_counts_within_day_and_overall() {
        let mut clock = DayClock::new(3).unwrap();
        assert_eq!(clock.start_day().unwrap(), 1);
        assert_eq!(clock.advance().unwrap(), 1);
        assert_eq!(clock.advance().unwrap(), 2);
        assert_eq!(clock.tick_in_day(), 2);
        assert!(!clock.day_complete());
        clock.advance().unwrap();
        assert!(clock.day_complete());
    }

    #[test]
    fn advancing_before_first_day_fails() {
        let mut clock = DayClock::new(4).unwrap();
        assert!(matches!(clock.advance(), Err(ClockError::NotStarted)));
    }

    #[test]
    fn advancing_past_day_end_fails() {
        let mut clock = DayClock::new(1).unwrap();
        clock.start_day().unwrap();
        clock.advance().unwrap();
        assert!(matches!(
            clock.advance(),
            Err(ClockError::DayComplete { day: 1, ticks_per_day: 1 })
        ));
    }

    #[test]
    fn start_day_resets_position_but_keeps_total() {
        let mut clock = DayClock::new(2).unwrap();
        clock.start_day().unwrap();
        clock.advance().unwrap();
        clock.advance().unwrap();
        assert_eq!(clock.start_day().unwrap(), 2);
        assert_eq!(clock.tick_in_day(), 0);
        assert_eq!(clock.total_ticks(), 2);
    }
}

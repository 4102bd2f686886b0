//! Report structs for the Gatherers' Village simulation.
//!
//! Averages are carried as [`Tenths`], an exact fixed-point value with one
//! decimal place. Rounding to one decimal happens once, on the exact
//! rational mean, using round-half-to-even. No floating point is involved,
//! so the printed report is identical on every platform.

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Tenths
// ---------------------------------------------------------------------------

/// A non-negative quantity with one decimal place, stored as tenths.
///
/// `Tenths(123)` represents `12.3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tenths(pub u32);

impl Tenths {
    /// Compute `sum / count` rounded to one decimal place, half-to-even.
    ///
    /// Ties (an exact `x.x5`) round to the neighbour whose last digit is
    /// even, so `0.25` becomes `0.2` and `0.35` becomes `0.4`.
    ///
    /// Returns `None` when `count` is zero or the result does not fit.
    pub fn mean_half_even(sum: u64, count: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let scaled = sum.checked_mul(10)?;
        let quotient = scaled.checked_div(count)?;
        let remainder = scaled.checked_rem(count)?;
        let twice = remainder.checked_mul(2)?;

        let round_up = twice > count || (twice == count && quotient % 2 == 1);
        let rounded = if round_up {
            quotient.checked_add(1)?
        } else {
            quotient
        };
        u32::try_from(rounded).ok().map(Self)
    }

    /// Whole-number part.
    pub const fn whole(self) -> u32 {
        self.0 / 10
    }

    /// The single decimal digit.
    pub const fn fraction(self) -> u32 {
        self.0 % 10
    }

    /// Convert to `f64` for serialization.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl core::fmt::Display for Tenths {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.whole(), self.fraction())
    }
}

impl Serialize for Tenths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

// ---------------------------------------------------------------------------
// DayReport
// ---------------------------------------------------------------------------

/// Aggregate statistics emitted once at the end of each simulated day.
///
/// The [`Display`](core::fmt::Display) form is the canonical one-line
/// report:
///
/// ```text
/// Day 1: basket=4, avg_hunger=31.5, avg_energy=62.0, gathered=9, eaten=8, starvation_warnings=0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayReport {
    /// 1-based day index.
    pub day: u32,
    /// Basket contents after the last tick of the day (before regeneration).
    pub basket: u32,
    /// Mean hunger across all agents.
    pub avg_hunger: Tenths,
    /// Mean energy across all agents.
    pub avg_energy: Tenths,
    /// Units moved from the field to the basket during the day.
    pub gathered: u32,
    /// Units eaten from the basket during the day.
    pub eaten: u32,
    /// Agents whose hunger is at or above the starvation threshold.
    pub starvation_warnings: u32,
}

impl core::fmt::Display for DayReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Day {}: basket={}, avg_hunger={}, avg_energy={}, gathered={}, eaten={}, starvation_warnings={}",
            self.day,
            self.basket,
            self.avg_hunger,
            self.avg_energy,
            self.gathered,
            self.eaten,
            self.starvation_warnings,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_mean_has_zero_fraction() {
        assert_eq!(Tenths::mean_half_even(600, 6), Some(Tenths(1000)));
        assert_eq!(Tenths::mean_half_even(0, 6), Some(Tenths(0)));
    }

    #[test]
    fn rounds_below_half_down_and_above_half_up() {
        // 73 / 6 = 12.1666.. -> 12.2
        assert_eq!(Tenths::mean_half_even(73, 6), Some(Tenths(122)));
        // 71 / 6 = 11.8333.. -> 11.8
        assert_eq!(Tenths::mean_half_even(71, 6), Some(Tenths(118)));
    }

    #[test]
    fn ties_round_half_to_even() {
        // 1 / 4 = 0.25 -> 0.2 (2 is even)
        assert_eq!(Tenths::mean_half_even(1, 4), Some(Tenths(2)));
        // 3 / 4 = 0.75 -> 0.8 (8 is even)
        assert_eq!(Tenths::mean_half_even(3, 4), Some(Tenths(8)));
        // 49 / 4 = 12.25 -> 12.2
        assert_eq!(Tenths::mean_half_even(49, 4), Some(Tenths(122)));
        // 7 / 20 = 0.35 -> 0.4
        assert_eq!(Tenths::mean_half_even(7, 20), Some(Tenths(4)));
    }

    #[test]
    fn zero_count_is_none() {
        assert_eq!(Tenths::mean_half_even(10, 0), None);
    }

    #[test]
    fn display_always_has_one_decimal() {
        assert_eq!(Tenths(0).to_string(), "0.0");
        assert_eq!(Tenths(5).to_string(), "0.5");
        assert_eq!(Tenths(1000).to_string(), "100.0");
        assert_eq!(Tenths(315).to_string(), "31.5");
    }

    #[test]
    fn report_line_format() {
        let report = DayReport {
            day: 1,
            basket: 4,
            avg_hunger: Tenths(315),
            avg_energy: Tenths(620),
            gathered: 9,
            eaten: 8,
            starvation_warnings: 0,
        };
        assert_eq!(
            report.to_string(),
            "Day 1: basket=4, avg_hunger=31.5, avg_energy=62.0, gathered=9, eaten=8, starvation_warnings=0"
        );
    }

    #[test]
    fn report_serializes_averages_as_numbers() {
        let report = DayReport {
            day: 2,
            basket: 0,
            avg_hunger: Tenths(955),
            avg_energy: Tenths(100),
            gathered: 0,
            eaten: 0,
            starvation_warnings: 3,
        };
        let value = serde_json::to_value(report).unwrap_or_default();
        assert_eq!(value["day"], 2);
        assert_eq!(value["avg_hunger"].as_f64().map(|v| (v * 10.0).round()), Some(955.0));
        assert_eq!(value["starvation_warnings"], 3);
    }
}

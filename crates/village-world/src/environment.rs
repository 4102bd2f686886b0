//! The shared basket and field.
//!
//! Both counters are unsigned, so they can never go negative. Every
//! mutation is conditional on stock being present:
//!
//! - [`Environment::take_from_basket`] removes one unit only if the basket
//!   is not empty.
//! - [`Environment::harvest_one`] moves one unit from the field to the
//!   basket only if the field is not empty.
//! - [`Environment::regenerate`] adds the daily regrowth to the field with
//!   no upper bound (saturating at `u32::MAX`).

use tracing::debug;

/// The village's shared food stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Environment {
    basket: u32,
    field: u32,
}

impl Environment {
    /// Create an environment with the given starting stock.
    pub const fn new(basket: u32, field: u32) -> Self {
        Self { basket, field }
    }

    /// Harvested food ready to eat.
    pub const fn basket(&self) -> u32 {
        self.basket
    }

    /// Unharvested stock remaining in the field.
    pub const fn field(&self) -> u32 {
        self.field
    }

    /// Whether the field still has stock to forage.
    pub const fn field_has_stock(&self) -> bool {
        self.field > 0
    }

    /// Remove one unit from the basket.
    ///
    /// Returns `false` and changes nothing when the basket is empty.
    pub const fn take_from_basket(&mut self) -> bool {
        if self.basket == 0 {
            return false;
        }
        self.basket = self.basket.saturating_sub(1);
        true
    }

    /// Move one unit from the field into the basket.
    ///
    /// Returns `false` and changes nothing when the field is empty.
    pub const fn harvest_one(&mut self) -> bool {
        if self.field == 0 {
            return false;
        }
        self.field = self.field.saturating_sub(1);
        self.basket = self.basket.saturating_add(1);
        true
    }

    /// Apply the daily regrowth to the field. Returns the amount actually
    /// added (less than `amount` only at `u32::MAX`).
    pub fn regenerate(&mut self, amount: u32) -> u32 {
        let before = self.field;
        self.field = self.field.saturating_add(amount);
        let added = self.field.saturating_sub(before);
        debug!(before, added, field = self.field, "Field regenerated");
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_decrements_basket() {
        let mut env = Environment::new(2, 0);
        assert!(env.take_from_basket());
        assert_eq!(env.basket(), 1);
    }

    #[test]
    fn take_from_empty_basket_is_noop() {
        let mut env = Environment::new(0, 5);
        assert!(!env.take_from_basket());
        assert_eq!(env, Environment::new(0, 5));
    }

    #[test]
    fn harvest_moves_field_to_basket() {
        let mut env = Environment::new(1, 3);
        assert!(env.harvest_one());
        assert_eq!((env.basket(), env.field()), (2, 2));
    }

    #[test]
    fn harvest_from_empty_field_is_noop() {
        let mut env = Environment::new(4, 0);
        assert!(!env.harvest_one());
        assert_eq!((env.basket(), env.field()), (4, 0));
        assert!(!env.field_has_stock());
    }

    #[test]
    fn regenerate_has_no_cap() {
        let mut env = Environment::new(0, 1_000);
        assert_eq!(env.regenerate(20), 20);
        assert_eq!(env.field(), 1_020);
    }

    #[test]
    fn regenerate_from_empty() {
        let mut env = Environment::new(0, 0);
        env.regenerate(20);
        assert_eq!(env.field(), 20);
    }

    #[test]
    fn regenerate_saturates_at_max() {
        let mut env = Environment::new(0, u32::MAX - 5);
        assert_eq!(env.regenerate(20), 5);
        assert_eq!(env.field(), u32::MAX);
    }
}

//! Forage success odds and the per-forager roll.
//!
//! Foragers working the same tick help each other. With `foragers`
//! agents foraging, every one of them succeeds independently with
//!
//! ```text
//! p = min(p_base + synergy * (foragers - 1), p_cap)   if foragers > 0
//! p = 0                                               if foragers == 0
//! ```
//!
//! A lone forager therefore gets exactly `p_base`. The zero-forager case is
//! an explicit guard: the formula alone would go below `p_base` there.

use rand::Rng;
use serde::Deserialize;

/// Forage success parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ForageConfig {
    /// Success probability of a lone forager (default: 0.2).
    pub p_base: f64,

    /// Probability added per additional simultaneous forager (default: 0.15).
    pub synergy: f64,

    /// Upper bound on the success probability (default: 0.9).
    pub p_cap: f64,
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            p_base: 0.2,
            synergy: 0.15,
            p_cap: 0.9,
        }
    }
}

/// Success probability shared by every forager in a tick.
#[allow(clippy::suboptimal_flops)] // must stay unfused
pub fn success_probability(foragers: u32, config: &ForageConfig) -> f64 {
    let Some(helpers) = foragers.checked_sub(1) else {
        return 0.0;
    };
    let boosted = config.p_base + config.synergy * f64::from(helpers);
    boosted.min(config.p_cap)
}

/// Draw one uniform value in `[0, 1)` and compare it to `p`.
///
/// Consumes exactly one value from `rng`.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random::<f64>() < p
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn same(a: f64, b: f64) -> bool {
        a.to_bits() == b.to_bits()
    }

    #[test]
    fn no_foragers_means_zero() {
        let p = success_probability(0, &ForageConfig::default());
        assert!(same(p, 0.0));
    }

    #[test]
    fn lone_forager_gets_exactly_base() {
        let config = ForageConfig::default();
        assert!(same(success_probability(1, &config), config.p_base));
    }

    #[test]
    fn synergy_adds_per_extra_forager() {
        let p = success_probability(3, &ForageConfig::default());
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn cap_is_returned_exactly_when_exceeded() {
        let config = ForageConfig::default();
        // 0.2 + 0.15 * 5 = 0.95 > 0.9
        assert!(same(success_probability(6, &config), config.p_cap));
        assert!(same(success_probability(50, &config), config.p_cap));
    }

    #[test]
    fn zero_probability_never_succeeds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..1_000).all(|_| !roll(&mut rng, 0.0)));
    }

    #[test]
    fn certain_probability_always_succeeds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..1_000).all(|_| roll(&mut rng, 1.0)));
    }

    #[test]
    fn roll_is_reproducible_for_a_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let first: Vec<bool> = (0..64).map(|_| roll(&mut a, 0.5)).collect();
        let second: Vec<bool> = (0..64).map(|_| roll(&mut b, 0.5)).collect();
        assert_eq!(first, second);
    }
}

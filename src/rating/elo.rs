//! ELO expected score and rating change
//!
//! The logistic expectation comes from the skillratings crate; K-factor
//! tiering and rounding are applied here. Deltas are rounded half away
//! from zero.

use crate::config::RatingConfig;
use crate::types::Rating;
use skillratings::elo::{expected_score as elo_expected_score, EloRating};

/// Expected score of `player` against `opponent`:
/// `1 / (1 + 10^((opponent - player) / 400))`
pub fn expected_score(player: Rating, opponent: Rating) -> f64 {
    let (expected, _) = elo_expected_score(
        &EloRating {
            rating: player as f64,
        },
        &EloRating {
            rating: opponent as f64,
        },
    );
    expected
}

/// Rounded rating change for a single game with a fixed K-factor
pub fn rating_change(player: Rating, opponent: Rating, score: f64, k: f64) -> Rating {
    (k * (score - expected_score(player, opponent))).round() as Rating
}

/// ELO calculator with tiered K-factors
#[derive(Debug, Clone, Default)]
pub struct EloCalculator {
    config: RatingConfig,
}

impl EloCalculator {
    /// Create a new calculator, rejecting invalid tier settings
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// K-factor for a player currently rated `rating`
    pub fn k_factor(&self, rating: Option<Rating>) -> f64 {
        self.config.k_factor(rating)
    }

    /// Rating change for one game, or `None` when the player's rating or
    /// the score is missing
    pub fn calculate(
        &self,
        player: Option<Rating>,
        opponent: Rating,
        score: Option<f64>,
    ) -> Option<Rating> {
        let player = player?;
        let score = score?;
        let k = self.k_factor(Some(player));

        Some(rating_change(player, opponent, score, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score() {
        assert!((expected_score(1500, 1500) - 0.5).abs() < 1e-12);
        assert!((expected_score(1500, 1600) - 0.3599).abs() < 1e-3);
        assert!((expected_score(2300, 2000) - 0.8490).abs() < 1e-3);
        assert!((expected_score(1600, 1500) + expected_score(1500, 1600) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_win_against_stronger_opponent() {
        let calculator = EloCalculator::default();
        assert_eq!(calculator.calculate(Some(1500), 1600, Some(1.0)), Some(19));
    }

    #[test]
    fn test_master_draw_against_weaker_opponent() {
        let calculator = EloCalculator::default();
        assert_eq!(calculator.calculate(Some(2300), 2000, Some(0.5)), Some(-3));
    }

    #[test]
    fn test_boundary_ratings_use_standard_k() {
        // Equal ratings: delta = K * (1 - 0.5)
        let calculator = EloCalculator::default();
        assert_eq!(calculator.calculate(Some(1800), 1800, Some(1.0)), Some(10));
        assert_eq!(calculator.calculate(Some(2200), 2200, Some(1.0)), Some(10));
        assert_eq!(calculator.calculate(Some(1799), 1799, Some(1.0)), Some(15));
        assert_eq!(calculator.calculate(Some(2201), 2201, Some(1.0)), Some(5));
    }

    #[test]
    fn test_missing_inputs() {
        let calculator = EloCalculator::default();
        assert_eq!(calculator.calculate(None, 1600, Some(1.0)), None);
        assert_eq!(calculator.calculate(Some(1500), 1600, None), None);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // K = 5 at equal ratings gives exactly +/-2.5
        assert_eq!(rating_change(1500, 1500, 1.0, 5.0), 3);
        assert_eq!(rating_change(1500, 1500, 0.0, 5.0), -3);
    }

    #[test]
    fn test_override_k() {
        let calculator = EloCalculator::new(RatingConfig {
            k_factor_override: Some(40.0),
            ..RatingConfig::default()
        })
        .unwrap();
        assert_eq!(calculator.calculate(Some(2500), 2500, Some(0.0)), Some(-20));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RatingConfig {
            standard_k: -20.0,
            ..RatingConfig::default()
        };
        assert!(EloCalculator::new(config).is_err());
    }
}

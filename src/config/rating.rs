//! ELO rating configuration
//!
//! K-factor tiers: below `provisional_threshold` a player moves fastest,
//! between the two thresholds (inclusive) at the standard rate, and above
//! `master_threshold` slowest.

use crate::error::RatingsError;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub provisional_threshold: Rating,
    pub master_threshold: Rating,
    pub provisional_k: f64,
    pub standard_k: f64,
    pub master_k: f64,
    /// Used when the current rating is not available for tiering
    pub fallback_k: f64,
    /// Fixed K-factor that bypasses the tiers entirely
    pub k_factor_override: Option<f64>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            provisional_threshold: 1800,
            master_threshold: 2200,
            provisional_k: 30.0,
            standard_k: 20.0,
            master_k: 10.0,
            fallback_k: 32.0,
            k_factor_override: None,
        }
    }
}

impl RatingConfig {
    /// Pick the K-factor for a player currently rated `rating`
    pub fn k_factor(&self, rating: Option<Rating>) -> f64 {
        if let Some(k) = self.k_factor_override {
            return k;
        }

        match rating {
            None => self.fallback_k,
            Some(r) if r < self.provisional_threshold => self.provisional_k,
            Some(r) if r <= self.master_threshold => self.standard_k,
            Some(_) => self.master_k,
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.provisional_threshold > self.master_threshold {
            return Err(RatingsError::ConfigurationError {
                message: "Provisional threshold must not exceed master threshold".to_string(),
            }
            .into());
        }

        let tiers = [
            self.provisional_k,
            self.standard_k,
            self.master_k,
            self.fallback_k,
        ];
        if tiers.iter().any(|k| !k.is_finite() || *k <= 0.0) {
            return Err(RatingsError::ConfigurationError {
                message: "K-factors must be positive".to_string(),
            }
            .into());
        }

        if let Some(k) = self.k_factor_override {
            if !k.is_finite() || k <= 0.0 {
                return Err(RatingsError::ConfigurationError {
                    message: format!("Invalid K-factor override: {}", k),
                }
                .into());
            }
        }

        Ok(())
    }
}

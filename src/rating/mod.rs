//! ELO rating trajectories
//!
//! This module provides registry rating lookup, ELO rating changes with
//! tiered K-factors, and the live rating fold over a player's games.

pub mod elo;
pub mod resolver;
pub mod trajectory;

// Re-export commonly used types
pub use elo::EloCalculator;
pub use resolver::{RatingResolver, RegistryResolver};
pub use trajectory::{TrajectoryEngine, TrajectoryState};

//! Chess Ratings - live ELO rating trajectories for club players
//!
//! This crate looks up a player's games in a flat record set, walks them in
//! order computing ELO rating changes with tiered K-factors, and exposes the
//! resulting live rating trajectory as a table and chart series.

pub mod config;
pub mod data;
pub mod error;
pub mod rating;
pub mod report;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingsError, Result};
pub use types::*;

// Re-export key components
pub use data::{RecordStore, SearchResult};
pub use rating::{RatingResolver, RegistryResolver, TrajectoryEngine};
pub use report::Report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

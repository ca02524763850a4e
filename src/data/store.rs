//! Snapshot store for the loaded record set
//!
//! The store hands out `Arc<Dataset>` snapshots. Replacing the dataset swaps
//! the `Arc`, so any search already holding a snapshot finishes against the
//! data it started with.

use crate::error::{RatingsError, Result};
use crate::rating::{RatingResolver, RegistryResolver, TrajectoryEngine};
use crate::types::{Dataset, Rating, TrajectoryStep};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Result of searching one player against a captured snapshot
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub player_name: String,
    /// Registry rating used to seed the live rating
    pub registry_rating: Option<Rating>,
    pub steps: Vec<TrajectoryStep>,
    /// Snapshot the search ran against
    pub dataset: Arc<Dataset>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Warn once per load about registry names that resolve to their first row only
fn flag_duplicate_names(dataset: &Dataset) -> Vec<String> {
    let duplicates = RegistryResolver::new(&dataset.players).duplicates();
    if !duplicates.is_empty() {
        warn!(
            count = duplicates.len(),
            names = ?duplicates,
            "Registry contains duplicate player names; the first entry wins"
        );
    }
    duplicates
}

/// In-memory record store with copy-on-read snapshots
#[derive(Debug, Default)]
pub struct RecordStore {
    dataset: RwLock<Arc<Dataset>>,
}

impl RecordStore {
    /// Create a new store holding `dataset`
    pub fn new(dataset: Dataset) -> Self {
        flag_duplicate_names(&dataset);
        Self {
            dataset: RwLock::new(Arc::new(dataset)),
        }
    }

    /// Capture the current dataset
    pub fn snapshot(&self) -> Result<Arc<Dataset>> {
        let dataset = self
            .dataset
            .read()
            .map_err(|_| RatingsError::InternalError {
                message: "Failed to acquire dataset read lock".to_string(),
            })?;

        Ok(Arc::clone(&dataset))
    }

    /// Swap in a freshly loaded dataset, returning the previous one
    pub fn replace(&self, dataset: Dataset) -> Result<Arc<Dataset>> {
        let mut current = self
            .dataset
            .write()
            .map_err(|_| RatingsError::InternalError {
                message: "Failed to acquire dataset write lock".to_string(),
            })?;

        flag_duplicate_names(&dataset);
        debug!(
            players = dataset.players.len(),
            games = dataset.games.len(),
            "Replacing dataset snapshot"
        );

        Ok(std::mem::replace(&mut *current, Arc::new(dataset)))
    }

    /// Compute a player's trajectory against the current snapshot
    pub fn search(&self, player_name: &str, engine: &TrajectoryEngine) -> Result<SearchResult> {
        let dataset = self.snapshot()?;
        let resolver = RegistryResolver::new(&dataset.players);

        if resolver.is_ambiguous(player_name) {
            warn!(
                "Registry holds more than one '{}'; using the first entry",
                player_name.trim()
            );
        }

        let registry_rating = resolver.resolve(player_name);
        let steps = engine.compute_trajectory(player_name, &dataset.games, &resolver);

        Ok(SearchResult {
            player_name: player_name.trim().to_string(),
            registry_rating,
            steps,
            dataset: Arc::clone(&dataset),
        })
    }
}

//! Player rating lookup
//!
//! A resolver maps a display name to a known rating. Absence is an ordinary
//! answer, not an error: unknown players, blank names and registry rows
//! without a rating all resolve to `None`.

use crate::types::{PlayerRecord, Rating};
use crate::utils::normalize_name;
use std::collections::HashMap;

/// Trait for looking up a player's rating by name
pub trait RatingResolver {
    /// Resolve a player name to a rating, if one is known
    fn resolve(&self, name: &str) -> Option<Rating>;
}

impl<F> RatingResolver for F
where
    F: Fn(&str) -> Option<Rating>,
{
    fn resolve(&self, name: &str) -> Option<Rating> {
        self(name)
    }
}

/// Resolver backed by the player registry
///
/// Names are matched case-insensitively and exactly against
/// `first_name + " " + last_name`. When the registry holds the same name
/// twice the first row wins; use [`RegistryResolver::duplicates`] to detect
/// that situation.
#[derive(Debug, Clone, Copy)]
pub struct RegistryResolver<'a> {
    players: &'a [PlayerRecord],
}

impl<'a> RegistryResolver<'a> {
    pub fn new(players: &'a [PlayerRecord]) -> Self {
        Self { players }
    }

    /// First registry row whose full name matches `name`
    pub fn find(&self, name: &str) -> Option<&'a PlayerRecord> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }

        self.players
            .iter()
            .find(|player| normalize_name(&player.full_name()) == wanted)
    }

    /// Whether more than one registry row carries this name
    pub fn is_ambiguous(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        !wanted.is_empty()
            && self
                .players
                .iter()
                .filter(|player| normalize_name(&player.full_name()) == wanted)
                .nth(1)
                .is_some()
    }

    /// Normalized names that occur more than once, in first-seen order
    pub fn duplicates(&self) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order = Vec::new();

        for player in self.players {
            let name = normalize_name(&player.full_name());
            let count = counts.entry(name.clone()).or_insert(0);
            if *count == 0 {
                order.push(name);
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter(|name| counts.get(name).copied().unwrap_or(0) > 1)
            .collect()
    }
}

impl RatingResolver for RegistryResolver<'_> {
    fn resolve(&self, name: &str) -> Option<Rating> {
        self.find(name).and_then(|player| player.rating)
    }
}

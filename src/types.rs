//! Common types used throughout the rating service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Integer rating as stored in the registry and reported per game
pub type Rating = i64;

/// A player entry in the rating registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first_name: String,
    pub last_name: String,
    pub rating: Option<Rating>,
}

impl PlayerRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        rating: Option<Rating>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            rating,
        }
    }

    /// Display name as `first last`, each part trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// A single recorded game, as supplied by the data file
///
/// `result` and `embedded_opponent_rating` keep the raw text so that the
/// trajectory engine decides what counts as parseable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub date: String,
    pub player1: String,
    pub player2: String,
    /// Score of player 1 ("1", "0.5", "0")
    pub result: Option<String>,
    /// Fallback rating for whichever side is the opponent
    pub embedded_opponent_rating: Option<String>,
}

impl GameRecord {
    pub fn new(
        date: impl Into<String>,
        player1: impl Into<String>,
        player2: impl Into<String>,
        result: Option<&str>,
        embedded_opponent_rating: Option<&str>,
    ) -> Self {
        Self {
            date: date.into(),
            player1: player1.into(),
            player2: player2.into(),
            result: result.map(str::to_string),
            embedded_opponent_rating: embedded_opponent_rating.map(str::to_string),
        }
    }
}

/// Which side of a game record the searched player sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

/// Game outcome from the searched player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    Unknown,
}

impl Outcome {
    /// Swap Win and Loss; Draw and Unknown stay put
    pub fn inverted(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            other => other,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Loss => write!(f, "Loss"),
            Outcome::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Where an opponent rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingSource {
    /// Trusted player registry
    Registry,
    /// Rating embedded in the game record
    Embedded,
    Unknown,
}

impl std::fmt::Display for RatingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingSource::Registry => write!(f, "Registry"),
            RatingSource::Embedded => write!(f, "Embedded"),
            RatingSource::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One computed row of a player's rating trajectory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryStep {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Opponent")]
    pub opponent_name: String,
    #[serde(rename = "Rating")]
    pub opponent_rating: Option<Rating>,
    #[serde(rename = "Rating Source")]
    pub rating_source: RatingSource,
    #[serde(rename = "Result")]
    pub outcome: Outcome,
    #[serde(rename = "Rating Change")]
    pub rating_change: Option<Rating>,
    #[serde(rename = "Live Rating")]
    pub live_rating: Option<Rating>,
}

/// Immutable snapshot of the registry and the game list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub players: Vec<PlayerRecord>,
    pub games: Vec<GameRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(players: Vec<PlayerRecord>, games: Vec<GameRecord>) -> Self {
        Self {
            players,
            games,
            loaded_at: Utc::now(),
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_parts() {
        let record = PlayerRecord::new("  Magnus ", " Carlsen", Some(2830));
        assert_eq!(record.full_name(), "Magnus Carlsen");
    }

    #[test]
    fn test_outcome_inversion() {
        assert_eq!(Outcome::Win.inverted(), Outcome::Loss);
        assert_eq!(Outcome::Loss.inverted(), Outcome::Win);
        assert_eq!(Outcome::Draw.inverted(), Outcome::Draw);
        assert_eq!(Outcome::Unknown.inverted(), Outcome::Unknown);
    }

    #[test]
    fn test_step_serializes_with_column_names() {
        let step = TrajectoryStep {
            date: "2024-01-10".to_string(),
            opponent_name: "Jane Doe".to_string(),
            opponent_rating: Some(1600),
            rating_source: RatingSource::Embedded,
            outcome: Outcome::Win,
            rating_change: Some(19),
            live_rating: Some(1519),
        };

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["Opponent"], "Jane Doe");
        assert_eq!(json["Rating Change"], 19);
        assert_eq!(json["Live Rating"], 1519);
        assert_eq!(json["Rating Source"], "Embedded");
    }
}

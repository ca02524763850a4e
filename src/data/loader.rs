//! CSV loading for the player registry and the game list
//!
//! Optional fields are kept lenient: a blank or malformed rating becomes
//! `None` rather than an error. Rows that cannot be read at all (wrong
//! column count, invalid UTF-8) are skipped with a warning.

use crate::error::{RatingsError, Result};
use crate::types::{Dataset, GameRecord, PlayerRecord};
use crate::utils::parse_registry_rating;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct PlayerRow {
    #[serde(default)]
    firstname: String,
    #[serde(default)]
    lastname: String,
    #[serde(default)]
    rating: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GameRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Player 1", default)]
    player1: String,
    #[serde(rename = "Player 2", default)]
    player2: String,
    #[serde(rename = "Result", default)]
    result: Option<String>,
    #[serde(rename = "Rating", default)]
    rating: Option<String>,
}

impl From<PlayerRow> for PlayerRecord {
    fn from(row: PlayerRow) -> Self {
        PlayerRecord {
            first_name: row.firstname.trim().to_string(),
            last_name: row.lastname.trim().to_string(),
            rating: parse_registry_rating(row.rating.as_deref()),
        }
    }
}

impl From<GameRow> for GameRecord {
    fn from(row: GameRow) -> Self {
        GameRecord {
            date: row.date,
            player1: row.player1,
            player2: row.player2,
            result: row.result.filter(|r| !r.trim().is_empty()),
            embedded_opponent_rating: row.rating.filter(|r| !r.trim().is_empty()),
        }
    }
}

fn read_rows<T, R>(reader: R, source: &str) -> Result<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    csv_reader
        .headers()
        .map_err(|e| RatingsError::DataLoadFailed {
            path: source.to_string(),
            message: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<T>() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let error = RatingsError::InvalidRecord {
                    line,
                    reason: e.to_string(),
                };
                warn!("Skipping row in {}: {}", source, error);
            }
        }
    }

    Ok(rows)
}

/// Read registry rows from any CSV source with `firstname,lastname,rating`
pub fn read_players<R: Read>(reader: R) -> Result<Vec<PlayerRecord>> {
    let rows: Vec<PlayerRow> = read_rows(reader, "players")?;
    Ok(rows.into_iter().map(PlayerRecord::from).collect())
}

/// Read game rows from any CSV source with `Date,Player 1,Player 2,Result,Rating`
pub fn read_games<R: Read>(reader: R) -> Result<Vec<GameRecord>> {
    let rows: Vec<GameRow> = read_rows(reader, "games")?;
    Ok(rows.into_iter().map(GameRecord::from).collect())
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).map_err(|e| {
        RatingsError::DataLoadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Load the player registry from a file
pub fn load_players(path: &Path) -> Result<Vec<PlayerRecord>> {
    let players = read_players(open(path)?)?;
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Load the game list from a file
pub fn load_games(path: &Path) -> Result<Vec<GameRecord>> {
    let games = read_games(open(path)?)?;
    info!("Loaded {} games from {}", games.len(), path.display());
    Ok(games)
}

/// Load both files into a fresh dataset snapshot
pub fn load_dataset(players_path: &Path, games_path: &Path) -> Result<Dataset> {
    let players = load_players(players_path)?;
    let games = load_games(games_path)?;
    Ok(Dataset::new(players, games))
}

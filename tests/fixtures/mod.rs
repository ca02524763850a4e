//! Shared club data for integration testing

#![allow(dead_code)]

use chess_ratings::data::{read_games, read_players};
use chess_ratings::types::{Dataset, GameRecord, PlayerRecord};
use std::cell::RefCell;

pub const PLAYERS_CSV: &str = "\
firstname,lastname,rating
Alice,Smith,1500
Bob,Jones,1600
Grace,Hopper,2300
Ken,Thompson,2000
Nora,Unrated,
Edsger,Dijkstra,1800
";

pub const GAMES_CSV: &str = "\
Date,Player 1,Player 2,Result,Rating
2024-01-10,Alice Smith,Bob Jones,1,
2024-01-17,Bob Jones,Alice Smith,1,
2024-01-24,Alice Smith,Visiting Player,0.5,1550
2024-01-31,Ken Thompson,Grace Hopper,0.5,
2024-02-07,alice smith,Mystery Guest,1,
2024-02-14,Alice Smith,Bob Jones,abc,
2024-02-21,Edsger Dijkstra,Alice Smith,0,
";

/// Registry and games parsed from the fixture CSV text
pub fn club_dataset() -> Dataset {
    let players = read_players(PLAYERS_CSV.as_bytes()).expect("fixture players parse");
    let games = read_games(GAMES_CSV.as_bytes()).expect("fixture games parse");
    Dataset::new(players, games)
}

pub fn game(p1: &str, p2: &str, result: Option<&str>, rating: Option<&str>) -> GameRecord {
    GameRecord::new("2024-03-01", p1, p2, result, rating)
}

pub fn registry() -> Vec<PlayerRecord> {
    club_dataset().players
}

/// Resolver that records every name it is asked about
#[derive(Debug, Default)]
pub struct RecordingResolver {
    ratings: Vec<(String, i64)>,
    lookups: RefCell<Vec<String>>,
}

impl RecordingResolver {
    pub fn new(ratings: &[(&str, i64)]) -> Self {
        Self {
            ratings: ratings
                .iter()
                .map(|(name, rating)| (name.to_string(), *rating))
                .collect(),
            lookups: RefCell::new(Vec::new()),
        }
    }

    /// Names looked up so far, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }
}

impl chess_ratings::RatingResolver for RecordingResolver {
    fn resolve(&self, name: &str) -> Option<i64> {
        self.lookups.borrow_mut().push(name.to_string());
        self.ratings
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, rating)| *rating)
    }
}

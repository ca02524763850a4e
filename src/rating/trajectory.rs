//! Live rating trajectory across a player's games
//!
//! The trajectory is a fold over the game list. The only state carried from
//! one game to the next is the live rating; each [`TrajectoryState::advance`]
//! call takes the state left by the previous game and yields the next state
//! together with the row for the current game.
//!
//! Malformed records never abort the walk. An unreadable result becomes
//! [`Outcome::Unknown`] and a missing opponent rating leaves the row without
//! a delta or live rating.

use crate::config::RatingConfig;
use crate::rating::elo::EloCalculator;
use crate::rating::resolver::RatingResolver;
use crate::types::{GameRecord, Outcome, Rating, RatingSource, Side, TrajectoryStep};
use crate::utils::{names_match, normalize_name, parse_rating, parse_score};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Running state threaded through the game list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrajectoryState {
    pub live_rating: Option<Rating>,
}

impl TrajectoryState {
    pub fn seeded(live_rating: Option<Rating>) -> Self {
        Self { live_rating }
    }

    /// Apply one game to the state
    ///
    /// Returns `None` when `searched_name` did not play in `game`; the state
    /// is then unchanged.
    pub fn advance<R>(
        &self,
        searched_name: &str,
        game: &GameRecord,
        resolver: &R,
        calculator: &EloCalculator,
    ) -> Option<(TrajectoryState, TrajectoryStep)>
    where
        R: RatingResolver + ?Sized,
    {
        let side = side_of(searched_name, game)?;
        let (score, outcome) = score_for(side, game.result.as_deref());

        let opponent_name = match side {
            Side::Player1 => game.player2.trim(),
            Side::Player2 => game.player1.trim(),
        };
        let (opponent_rating, rating_source) = opponent_rating(opponent_name, game, resolver);

        let (next, rating_change) = match opponent_rating {
            Some(opponent) => {
                let change = calculator.calculate(self.live_rating, opponent, score);
                let live_rating = match (self.live_rating, change) {
                    (Some(live), Some(delta)) => Some(live.saturating_add(delta)),
                    (live, _) => live,
                };
                (Self { live_rating }, change)
            }
            None => (*self, None),
        };

        // A row without an opponent rating is a gap in the chart
        let reported_live = opponent_rating.and(next.live_rating);

        if rating_change.is_none() {
            debug!(
                date = %game.date,
                opponent = opponent_name,
                %outcome,
                %rating_source,
                "No rating change computed for game"
            );
        }

        let step = TrajectoryStep {
            date: game.date.clone(),
            opponent_name: opponent_name.to_string(),
            opponent_rating,
            rating_source,
            outcome,
            rating_change,
            live_rating: reported_live,
        };

        Some((next, step))
    }
}

/// Which side of `game` the searched player is on; player 1 is checked first
pub fn side_of(searched_name: &str, game: &GameRecord) -> Option<Side> {
    if normalize_name(searched_name).is_empty() {
        return None;
    }

    if names_match(searched_name, &game.player1) {
        Some(Side::Player1)
    } else if names_match(searched_name, &game.player2) {
        Some(Side::Player2)
    } else {
        None
    }
}

/// Score and outcome from the perspective of `side`
pub fn score_for(side: Side, raw_result: Option<&str>) -> (Option<f64>, Outcome) {
    let Some(score) = parse_score(raw_result) else {
        return (None, Outcome::Unknown);
    };

    let outcome = if score == 1.0 {
        Outcome::Win
    } else if score == 0.5 {
        Outcome::Draw
    } else {
        Outcome::Loss
    };

    match side {
        Side::Player1 => (Some(score), outcome),
        Side::Player2 => (Some(1.0 - score), outcome.inverted()),
    }
}

/// Opponent rating from the registry, falling back to the embedded field
pub fn opponent_rating<R>(
    opponent_name: &str,
    game: &GameRecord,
    resolver: &R,
) -> (Option<Rating>, RatingSource)
where
    R: RatingResolver + ?Sized,
{
    if let Some(rating) = resolver.resolve(opponent_name) {
        return (Some(rating), RatingSource::Registry);
    }

    match parse_rating(game.embedded_opponent_rating.as_deref()) {
        Some(rating) => (Some(rating), RatingSource::Embedded),
        None => (None, RatingSource::Unknown),
    }
}

/// Walks a player's games and produces their rating trajectory
#[derive(Debug, Clone, Default)]
pub struct TrajectoryEngine {
    calculator: EloCalculator,
}

impl TrajectoryEngine {
    /// Create a new engine with the given K-factor settings
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        Ok(Self {
            calculator: EloCalculator::new(config)?,
        })
    }

    pub fn calculator(&self) -> &EloCalculator {
        &self.calculator
    }

    /// Every intermediate state, paired with the row emitted for that game
    ///
    /// The seed is the searched player's own rating from `resolver`.
    pub fn trajectory_states<R>(
        &self,
        searched_name: &str,
        games: &[GameRecord],
        resolver: &R,
    ) -> Vec<(TrajectoryState, TrajectoryStep)>
    where
        R: RatingResolver + ?Sized,
    {
        let seed = TrajectoryState::seeded(resolver.resolve(searched_name));

        let (_, states) = games.iter().fold(
            (seed, Vec::new()),
            |(state, mut acc), game| match state.advance(
                searched_name,
                game,
                resolver,
                &self.calculator,
            ) {
                Some((next, step)) => {
                    acc.push((next, step));
                    (next, acc)
                }
                None => (state, acc),
            },
        );

        debug!(
            player = searched_name,
            seed = ?seed.live_rating,
            games = states.len(),
            "Computed rating trajectory"
        );

        states
    }

    /// Rows of the rating trajectory in game order
    pub fn compute_trajectory<R>(
        &self,
        searched_name: &str,
        games: &[GameRecord],
        resolver: &R,
    ) -> Vec<TrajectoryStep>
    where
        R: RatingResolver + ?Sized,
    {
        self.trajectory_states(searched_name, games, resolver)
            .into_iter()
            .map(|(_, step)| step)
            .collect()
    }
}

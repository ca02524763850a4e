//! Presentation data for a player's trajectory
//!
//! Builds the match table, the live-rating chart series and a plain text
//! rendering. How rows are styled (for example highlighting embedded
//! ratings) is left to the caller via [`TrajectoryStep::rating_source`].

use crate::data::SearchResult;
use crate::types::{Rating, RatingSource, TrajectoryStep};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the rating span added above and below the chart line
pub const CHART_PADDING_RATIO: f64 = 0.1;

/// One point on the live rating chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// 1-based position of the game in the player's match list
    pub game_number: usize,
    pub live_rating: Rating,
}

/// Live rating series with a padded y-axis domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub y_domain: Option<(f64, f64)>,
}

impl ChartSeries {
    /// Games without a live rating are left out; numbering still counts them
    pub fn from_steps(steps: &[TrajectoryStep]) -> Self {
        let points: Vec<ChartPoint> = steps
            .iter()
            .enumerate()
            .filter_map(|(i, step)| {
                step.live_rating.map(|live_rating| ChartPoint {
                    game_number: i + 1,
                    live_rating,
                })
            })
            .collect();

        let min = points.iter().map(|p| p.live_rating).min();
        let max = points.iter().map(|p| p.live_rating).max();
        let y_domain = min.zip(max).map(|(min, max)| {
            let padding = (max as f64 - min as f64) * CHART_PADDING_RATIO;
            (min as f64 - padding, max as f64 + padding)
        });

        Self { points, y_domain }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Full report for one searched player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub player: String,
    pub registry_rating: Option<Rating>,
    pub match_count: usize,
    pub chart: ChartSeries,
    pub matches: Vec<TrajectoryStep>,
}

impl Report {
    pub fn new(
        player: impl Into<String>,
        registry_rating: Option<Rating>,
        steps: Vec<TrajectoryStep>,
    ) -> Self {
        Self {
            player: player.into(),
            registry_rating,
            match_count: steps.len(),
            chart: ChartSeries::from_steps(&steps),
            matches: steps,
        }
    }

    /// Final live rating, if the trajectory ended on a rated game
    pub fn final_rating(&self) -> Option<Rating> {
        self.chart.points.last().map(|p| p.live_rating)
    }

    /// Net change over all games with a computed delta
    pub fn net_change(&self) -> Rating {
        self.matches.iter().filter_map(|s| s.rating_change).sum()
    }
}

impl From<&SearchResult> for Report {
    fn from(result: &SearchResult) -> Self {
        Report::new(
            result.player_name.clone(),
            result.registry_rating,
            result.steps.clone(),
        )
    }
}

fn cell(value: Option<Rating>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn signed_cell(value: Option<Rating>) -> String {
    match value {
        Some(v) if v > 0 => format!("+{}", v),
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Write the report as a plain text table
///
/// Embedded opponent ratings are marked with `*`.
pub fn write_table<W: fmt::Write>(out: &mut W, report: &Report) -> fmt::Result {
    if report.matches.is_empty() {
        return writeln!(out, "No records found for '{}'", report.player);
    }

    if let Some(rating) = report.registry_rating {
        writeln!(out, "Rating for {}: {}", report.player, rating)?;
    }
    writeln!(
        out,
        "Found {} match(es) for '{}':",
        report.match_count, report.player
    )?;
    writeln!(out)?;

    let opponent_width = report
        .matches
        .iter()
        .map(|s| s.opponent_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Opponent".len());
    let date_width = report
        .matches
        .iter()
        .map(|s| s.date.chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());

    writeln!(
        out,
        "{:<date_width$}  {:<opponent_width$}  {:>7}  {:<7}  {:>6}  {:>11}",
        "Date", "Opponent", "Rating", "Result", "Change", "Live Rating",
    )?;

    for step in &report.matches {
        let rating = match step.rating_source {
            RatingSource::Embedded => format!("{}*", cell(step.opponent_rating)),
            _ => cell(step.opponent_rating),
        };
        writeln!(
            out,
            "{:<date_width$}  {:<opponent_width$}  {:>7}  {:<7}  {:>6}  {:>11}",
            step.date,
            step.opponent_name,
            rating,
            step.outcome.to_string(),
            signed_cell(step.rating_change),
            cell(step.live_rating),
        )?;
    }

    if report
        .matches
        .iter()
        .any(|s| s.rating_source == RatingSource::Embedded)
    {
        writeln!(out)?;
        writeln!(out, "* rating taken from the game record")?;
    }

    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self)
    }
}

/// Render the report as a plain text table
pub fn render_table(report: &Report) -> String {
    report.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn step(live_rating: Option<Rating>, change: Option<Rating>) -> TrajectoryStep {
        TrajectoryStep {
            date: "2024-01-10".to_string(),
            opponent_name: "Bob Jones".to_string(),
            opponent_rating: live_rating.map(|_| 1600),
            rating_source: RatingSource::Registry,
            outcome: Outcome::Win,
            rating_change: change,
            live_rating,
        }
    }

    #[test]
    fn test_chart_skips_gaps_and_keeps_numbering() {
        let steps = vec![
            step(Some(1519), Some(19)),
            step(None, None),
            step(Some(1536), Some(17)),
        ];

        let chart = ChartSeries::from_steps(&steps);

        assert_eq!(chart.points.len(), 2);
        assert_eq!(chart.points[0].game_number, 1);
        assert_eq!(chart.points[1].game_number, 3);

        let (low, high) = chart.y_domain.unwrap();
        assert!((low - 1517.3).abs() < 1e-9);
        assert!((high - 1537.7).abs() < 1e-9);
    }

    #[test]
    fn test_chart_empty_without_ratings() {
        let chart = ChartSeries::from_steps(&[step(None, None)]);
        assert!(chart.is_empty());
        assert_eq!(chart.y_domain, None);
    }

    #[test]
    fn test_extreme_ratings_domain() {
        let chart = ChartSeries::from_steps(&[
            step(Some(Rating::MIN), None),
            step(Some(Rating::MAX), None),
        ]);

        let (low, high) = chart.y_domain.unwrap();
        assert!(low.is_finite() && high.is_finite());
        assert!(low < Rating::MIN as f64);
        assert!(high > Rating::MAX as f64);
    }

    #[test]
    fn test_single_point_domain_has_no_padding() {
        let chart = ChartSeries::from_steps(&[step(Some(1519), Some(19))]);
        assert_eq!(chart.y_domain, Some((1519.0, 1519.0)));
    }

    #[test]
    fn test_report_summary() {
        let report = Report::new(
            "Alice Smith",
            Some(1500),
            vec![
                step(Some(1519), Some(19)),
                step(None, None),
                step(Some(1509), Some(-10)),
            ],
        );

        assert_eq!(report.match_count, 3);
        assert_eq!(report.final_rating(), Some(1509));
        assert_eq!(report.net_change(), 9);
    }

    #[test]
    fn test_render_table() {
        let mut embedded = step(Some(1519), Some(19));
        embedded.rating_source = RatingSource::Embedded;
        let report = Report::new(
            "Alice Smith",
            Some(1500),
            vec![embedded, step(None, None)],
        );

        let table = render_table(&report);

        assert!(table.contains("Rating for Alice Smith: 1500"));
        assert!(table.contains("Found 2 match(es) for 'Alice Smith':"));
        assert!(table.contains("1600*"));
        assert!(table.contains("+19"));
        assert!(table.contains("* rating taken from the game record"));
    }

    #[test]
    fn test_write_table_matches_display() {
        let report = Report::new("Alice Smith", Some(1500), vec![step(Some(1519), Some(19))]);

        let mut out = String::new();
        assert!(write_table(&mut out, &report).is_ok());
        assert_eq!(out, report.to_string());
        assert_eq!(out, render_table(&report));
    }

    #[test]
    fn test_render_empty_table() {
        let report = Report::new("Nobody", None, Vec::new());
        assert_eq!(render_table(&report), "No records found for 'Nobody'\n");
    }
}

//! Utility functions for parsing loosely formatted record fields

use crate::types::Rating;

/// Normalize a player name for comparison: trimmed and lowercased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check whether two names refer to the same player
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}

/// Parse a declared game score; only 0, 0.5 and 1 are accepted
pub fn parse_score(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    if value == 0.0 || value == 0.5 || value == 1.0 {
        Some(value)
    } else {
        None
    }
}

/// Parse an integer rating field; blank or fractional text yields `None`
pub fn parse_rating(raw: Option<&str>) -> Option<Rating> {
    raw?.trim().parse::<Rating>().ok()
}

/// Parse a registry rating, which may have been exported as a float ("1500.0")
///
/// Registry ratings are non-negative; anything else is treated as missing.
pub fn parse_registry_rating(raw: Option<&str>) -> Option<Rating> {
    let raw = raw?.trim();
    if let Some(rating) = parse_rating(Some(raw)) {
        return (rating >= 0).then_some(rating);
    }

    let value: f64 = raw.parse().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Some(value as Rating)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Jane DOE "), "jane doe");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_names_match() {
        assert!(names_match("Jane Doe", " jane doe  "));
        assert!(!names_match("Jane Doe", "Jane  Doe"));
        assert!(!names_match("Jane Doe", "Jane"));
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(Some("1")), Some(1.0));
        assert_eq!(parse_score(Some("0.5")), Some(0.5));
        assert_eq!(parse_score(Some(" 0 ")), Some(0.0));
        assert_eq!(parse_score(Some("1.0")), Some(1.0));
        assert_eq!(parse_score(Some("0.25")), None);
        assert_eq!(parse_score(Some("2")), None);
        assert_eq!(parse_score(Some("abc")), None);
        assert_eq!(parse_score(Some("")), None);
        assert_eq!(parse_score(None), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating(Some("1600")), Some(1600));
        assert_eq!(parse_rating(Some(" 1600 ")), Some(1600));
        assert_eq!(parse_rating(Some("1600.0")), None);
        assert_eq!(parse_rating(Some("-5")), Some(-5));
        assert_eq!(parse_rating(Some("")), None);
        assert_eq!(parse_rating(None), None);
    }

    #[test]
    fn test_parse_registry_rating() {
        assert_eq!(parse_registry_rating(Some("1820")), Some(1820));
        assert_eq!(parse_registry_rating(Some("1820.0")), Some(1820));
        assert_eq!(parse_registry_rating(Some("1820.5")), None);
        assert_eq!(parse_registry_rating(Some("nan")), None);
        assert_eq!(parse_registry_rating(Some("-5")), None);
        assert_eq!(parse_registry_rating(Some("-5.0")), None);
        assert_eq!(parse_registry_rating(Some("")), None);
    }
}

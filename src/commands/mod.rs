pub mod scores;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse optional date string, `None` meaning the current week
///
/// Accepts dates in YYYY-MM-DD format.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<Option<NaiveDate>> {
    date.map(|date_str| {
        NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_date_none() {
        assert_eq!(parse_game_date(None).unwrap(), None);
    }

    #[test]
    fn test_parse_game_date_valid() {
        assert_eq!(
            parse_game_date(Some("2026-10-19".to_string())).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 19)
        );
    }

    #[test]
    fn test_parse_game_date_invalid() {
        let err = parse_game_date(Some("10/19/2026".to_string())).unwrap_err();
        assert!(err.to_string().contains("Invalid date format '10/19/2026'"));
    }

    #[test]
    fn test_parse_game_date_impossible_day() {
        assert!(parse_game_date(Some("2026-02-30".to_string())).is_err());
    }
}

//! Month-year helpers
//!
//! Months are plain "YYYY-MM" strings. Transactions are bucketed by the first
//! seven characters of their date with no calendar validation; only the CLI
//! checks user-typed months before handing them to the store.

use chrono::{Datelike, NaiveDate};

use crate::error::{TrackerError, TrackerResult};

/// Number of characters in a "YYYY-MM" prefix
pub const MONTH_PREFIX_LEN: usize = 7;

/// The first seven characters of a date string, or the whole string if shorter
pub fn month_prefix(date: &str) -> &str {
    match date.char_indices().nth(MONTH_PREFIX_LEN) {
        Some((end, _)) => &date[..end],
        None => date,
    }
}

/// The current local month as "YYYY-MM"
pub fn current_month() -> String {
    let today = chrono::Local::now().date_naive();
    format!("{:04}-{:02}", today.year(), today.month())
}

/// Check that a user-supplied month looks like "YYYY-MM"
pub fn validate_month_year(month_year: &str) -> TrackerResult<()> {
    let candidate = format!("{}-01", month_year.trim());
    if month_year.trim().len() != MONTH_PREFIX_LEN
        || NaiveDate::parse_from_str(&candidate, "%Y-%m-%d").is_err()
    {
        return Err(TrackerError::Validation(format!(
            "Invalid month '{}': expected YYYY-MM",
            month_year
        )));
    }
    Ok(())
}

/// Check that a user-supplied date looks like "YYYY-MM-DD"
pub fn validate_date(date: &str) -> TrackerResult<()> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            TrackerError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", date))
        })
}

/// Today's local date as "YYYY-MM-DD"
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_prefix() {
        assert_eq!(month_prefix("2025-05-08"), "2025-05");
        assert_eq!(month_prefix("2025-05"), "2025-05");
        assert_eq!(month_prefix("2025"), "2025");
        assert_eq!(month_prefix(""), "");
        assert_eq!(month_prefix("not-a-date"), "not-a-d");
    }

    #[test]
    fn test_month_prefix_multibyte() {
        assert_eq!(month_prefix("ééééééééé"), "ééééééé");
    }

    #[test]
    fn test_validate_month_year() {
        assert!(validate_month_year("2025-05").is_ok());
        assert!(validate_month_year("2025-13").is_err());
        assert!(validate_month_year("2025-5").is_err());
        assert!(validate_month_year("May").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-05-08").is_ok());
        assert!(validate_date("2025-02-30").is_err());
    }

    #[test]
    fn test_current_month_shape() {
        let month = current_month();
        assert_eq!(month.len(), 7);
        assert!(validate_month_year(&month).is_ok());
    }
}

//! Calendar helpers for entry dates.
//!
//! Entry dates are plain `YYYY-MM-DD` strings so that lexicographic order is
//! chronological order.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, Result};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Utc::now().date_naive().format(ISO_FORMAT).to_string()
}

/// Accepts only a real calendar date written as zero-padded `YYYY-MM-DD`.
pub fn parse_iso_date(raw: &str) -> Result<String> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, ISO_FORMAT)
        .map_err(|_| CoreError::Date(raw.to_string()))?;

    // chrono accepts unpadded fields like `2024-5-1`; those break string order.
    let canonical = date.format(ISO_FORMAT).to_string();
    if canonical != raw {
        return Err(CoreError::Date(raw.to_string()));
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
        assert_eq!(parse_iso_date(&today), Ok(today.clone()));
    }

    #[test]
    fn iso_dates_parse() {
        assert_eq!(parse_iso_date("2024-05-01"), Ok("2024-05-01".to_string()));
        assert_eq!(parse_iso_date(" 2024-12-31 "), Ok("2024-12-31".to_string()));
    }

    #[test]
    fn unpadded_and_invalid_dates_are_rejected() {
        for raw in ["2024-5-1", "2024-05-1", "24-05-01", "2024/05/01", "2024-02-30", "", "내일"] {
            assert_eq!(
                parse_iso_date(raw),
                Err(CoreError::Date(raw.trim().to_string())),
                "{raw:?} should be rejected"
            );
        }
    }
}

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a strict YYYY-MM-DD date (used for `--as-of`).
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Format a date with a chrono pattern, falling back to ISO when the
/// pattern is not valid.
pub fn format_date(d: NaiveDate, pattern: &str) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    if write!(out, "{}", d.format(pattern)).is_err() {
        return d.format("%Y-%m-%d").to_string();
    }
    out
}

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Words that mean "still ongoing" when used as a date.
const PRESENT_ALIASES: [&str; 3] = ["present", "current", "now"];

/// A date exactly as it appears in a resume file.
///
/// Resumes carry dates as strings ("2015-03", "present", "Jan 2019") and,
/// now and then, as a bare numeric year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Year(i64),
}

impl DateValue {
    /// Empty strings count as a missing date.
    pub fn is_blank(&self) -> bool {
        matches!(self, DateValue::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

/// A parsed date, before it is pinned to a calendar day.
///
/// Partial dates carry the first day of the period they name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLike {
    FullDate(NaiveDate),
    YearMonth(NaiveDate),
    Year(NaiveDate),
    Present,
}

impl DateLike {
    /// Parse a textual date.
    ///
    /// Supported shapes:
    /// - YYYY-MM-DD (or a full RFC 3339 timestamp)
    /// - YYYY-MM
    /// - Month YYYY / Mon YYYY
    /// - YYYY
    /// - present / current / now (any case)
    pub fn parse(raw: &str) -> AppResult<Self> {
        let s = raw.trim();

        if PRESENT_ALIASES.iter().any(|p| s.eq_ignore_ascii_case(p)) {
            return Ok(DateLike::Present);
        }

        // YYYY-MM-DD
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(DateLike::FullDate(d));
        }

        // 2015-03-01T09:00:00+01:00
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(DateLike::FullDate(dt.date_naive()));
        }

        // YYYY-MM
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Ok(DateLike::YearMonth(d));
        }

        // Jan 2015 / January 2015
        if let Ok(d) = NaiveDate::parse_from_str(&format!("1 {s}"), "%d %B %Y") {
            return Ok(DateLike::YearMonth(d));
        }

        // YYYY
        if s.len() == 4
            && let Ok(year) = s.parse::<i64>()
        {
            return Self::from_year(year, raw);
        }

        Err(AppError::InvalidDate(raw.to_string()))
    }

    pub fn from_value(value: &DateValue) -> AppResult<Self> {
        match value {
            DateValue::Text(s) => Self::parse(s),
            DateValue::Year(y) => Self::from_year(*y, &y.to_string()),
        }
    }

    fn from_year(year: i64, raw: &str) -> AppResult<Self> {
        i32::try_from(year)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .map(DateLike::Year)
            .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
    }

    /// Pin the date to a calendar day; `Present` becomes `now`.
    pub fn resolve(&self, now: NaiveDate) -> NaiveDate {
        match self {
            DateLike::FullDate(d) | DateLike::YearMonth(d) | DateLike::Year(d) => *d,
            DateLike::Present => now,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, DateLike::Present)
    }
}

use super::date_like::DateValue;
use crate::core::calculator::normalize;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One job in the employment history.
///
/// Only `start` and `end` matter to the analyzer; the other fields are kept
/// for display. Unknown fields in the resume file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    #[serde(default, alias = "company", alias = "name")]
    pub employer: Option<String>,
    #[serde(default, alias = "title")]
    pub position: Option<String>,
    #[serde(default, alias = "startDate", skip_serializing_if = "Option::is_none")]
    pub start: Option<DateValue>,
    #[serde(default, alias = "endDate", skip_serializing_if = "Option::is_none")]
    pub end: Option<DateValue>,
}

impl EmploymentRecord {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(DateValue::from),
            end: end.map(DateValue::from),
            ..Self::default()
        }
    }

    /// Start date, ignoring blank values.
    pub fn start_value(&self) -> Option<&DateValue> {
        self.start.as_ref().filter(|d| !d.is_blank())
    }

    /// End date, ignoring blank values.
    pub fn end_value(&self) -> Option<&DateValue> {
        self.end.as_ref().filter(|d| !d.is_blank())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    #[serde(default)]
    pub history: Option<Vec<EmploymentRecord>>,
}

/// Unit for [`ResumeLike::duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    /// Whole units elapsed from `from` to `to`, truncated toward zero.
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        match self {
            DurationUnit::Days => (to - from).num_days(),
            DurationUnit::Weeks => (to - from).num_weeks(),
            DurationUnit::Months => months_between(from, to),
            DurationUnit::Years => months_between(from, to) / 12,
        }
    }
}

fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let (early, late, sign) = if from <= to {
        (from, to, 1)
    } else {
        (to, from, -1)
    };

    let mut months = (late.year() - early.year()) as i64 * 12
        + late.month() as i64
        - early.month() as i64;
    if late.day() < early.day() {
        months -= 1;
    }

    sign * months
}

/// What the coverage analyzer needs from a resume.
pub trait ResumeLike {
    /// The `employment.history` list, if the resume has one.
    fn employment_history(&self) -> Option<&[EmploymentRecord]>;

    /// Tracked lifetime of the candidate in `unit`, with open dates pinned
    /// to `now`.
    fn duration(&self, unit: DurationUnit, now: NaiveDate) -> AppResult<i64>;
}

/// A FRESH-style resume, reduced to what the analyzer looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub employment: Option<Employment>,
}

impl Resume {
    pub fn with_history(history: Vec<EmploymentRecord>) -> Self {
        Self {
            name: None,
            employment: Some(Employment {
                history: Some(history),
            }),
        }
    }

    /// Load a resume from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Self::from_json_str(&fs::read_to_string(path)?),
            "yaml" | "yml" => Self::from_yaml_str(&fs::read_to_string(path)?),
            _ => Err(AppError::UnsupportedResumeFormat(path.display().to_string())),
        }
    }

    pub fn from_json_str(content: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl ResumeLike for Resume {
    fn employment_history(&self) -> Option<&[EmploymentRecord]> {
        self.employment
            .as_ref()
            .and_then(|e| e.history.as_deref())
    }

    /// Span from the earliest recorded employment date to the latest one.
    /// A job without an end date counts as running through `now`.
    fn duration(&self, unit: DurationUnit, now: NaiveDate) -> AppResult<i64> {
        let Some(history) = self.employment_history() else {
            return Ok(0);
        };

        let mut dates = Vec::new();
        for job in history {
            if job.start_value().is_none() && job.end_value().is_none() {
                continue;
            }
            if let Some(start) = job.start_value() {
                dates.push(normalize::normalize(start, now)?);
            }
            let (end, _open) = normalize::normalize_end(job.end_value(), now)?;
            dates.push(end);
        }

        match (dates.iter().min(), dates.iter().max()) {
            (Some(first), Some(last)) => Ok(unit.between(*first, *last)),
            _ => Ok(0),
        }
    }
}

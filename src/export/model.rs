// src/export/model.rs

use crate::models::coverage::{CoverageReport, Interval};
use serde::Serialize;

/// Flat row for CSV output: one gap or overlap per line.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IntervalRow {
    pub kind: &'static str,
    pub start: String,
    pub end: String,
    pub duration_days: i64,
}

impl IntervalRow {
    fn from_interval(kind: &'static str, iv: &Interval) -> Self {
        Self {
            kind,
            start: iv.start.format("%Y-%m-%d").to_string(),
            end: iv.end.format("%Y-%m-%d").to_string(),
            duration_days: iv.duration,
        }
    }
}

/// Gaps first, then overlaps, each in timeline order.
pub(crate) fn report_to_rows(report: &CoverageReport) -> Vec<IntervalRow> {
    report
        .gaps()
        .iter()
        .map(|g| IntervalRow::from_interval("gap", g))
        .chain(
            report
                .overlaps()
                .iter()
                .map(|o| IntervalRow::from_interval("overlap", o)),
        )
        .collect()
}

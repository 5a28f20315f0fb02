//! Pulls (start, end) pairs out of the employment history.

use crate::models::date_like::DateValue;
use crate::models::resume::EmploymentRecord;

/// Raw dates of one job, still unparsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInterval<'a> {
    pub source_index: usize,
    pub start: Option<&'a DateValue>,
    /// `None` for a job that is still running.
    pub end: Option<&'a DateValue>,
}

/// Keep every job that has at least one date, in history order.
pub fn extract(history: &[EmploymentRecord]) -> Vec<RawInterval<'_>> {
    history
        .iter()
        .enumerate()
        .filter_map(|(source_index, job)| {
            let start = job.start_value();
            let end = job.end_value();

            if start.is_none() && end.is_none() {
                tracing::debug!(source_index, "skipping job without dates");
                return None;
            }

            Some(RawInterval {
                source_index,
                start,
                end,
            })
        })
        .collect()
}

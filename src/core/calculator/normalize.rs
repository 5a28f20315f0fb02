//! Turns resume dates into calendar days.

use crate::errors::AppResult;
use crate::models::date_like::{DateLike, DateValue};
use chrono::NaiveDate;

/// Resolve a recorded date to a day. "present" and its aliases become `now`.
pub fn normalize(value: &DateValue, now: NaiveDate) -> AppResult<NaiveDate> {
    Ok(DateLike::from_value(value)?.resolve(now))
}

/// Resolve the end of a job. A missing end means the job is ongoing.
///
/// Returns the day and whether it stands for "ongoing as of `now`".
pub fn normalize_end(value: Option<&DateValue>, now: NaiveDate) -> AppResult<(NaiveDate, bool)> {
    match value {
        None => Ok((now, true)),
        Some(v) => {
            let date = DateLike::from_value(v)?;
            Ok((date.resolve(now), date.is_present()))
        }
    }
}

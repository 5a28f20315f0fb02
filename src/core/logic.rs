use crate::core::calculator::{coverage, extract, sweep};
use crate::errors::AppResult;
use crate::models::coverage::CoverageReport;
use crate::models::resume::{DurationUnit, ResumeLike};
use crate::utils::date;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Analyze a resume as of today.
    ///
    /// Today is read once and used for every open-ended job, so two ongoing
    /// jobs always end on the same day.
    pub fn analyze_employment_coverage<R>(resume: &R) -> AppResult<CoverageReport>
    where
        R: ResumeLike + ?Sized,
    {
        Self::analyze_employment_coverage_at(resume, date::today())
    }

    /// Analyze a resume with "now" pinned to `now`.
    ///
    /// Fails with `InvalidDate` if any job date cannot be read; no partial
    /// report is produced.
    pub fn analyze_employment_coverage_at<R>(resume: &R, now: NaiveDate) -> AppResult<CoverageReport>
    where
        R: ResumeLike + ?Sized,
    {
        let Some(history) = resume.employment_history() else {
            return Ok(CoverageReport::empty());
        };

        let intervals = extract::extract(history);
        if intervals.is_empty() {
            return Ok(CoverageReport::empty());
        }

        let endpoints = sweep::build_endpoints(&intervals, now)?;
        let result = sweep::sweep(&endpoints, now);

        let total = resume.duration(DurationUnit::Days, now)?;

        tracing::debug!(
            jobs = intervals.len(),
            gaps = result.gaps.len(),
            overlaps = result.overlaps.len(),
            total_days = total,
            "coverage computed"
        );

        Ok(coverage::aggregate(
            result.gaps,
            result.overlaps,
            result.gap_days,
            result.overlap_days,
            total,
        ))
    }
}

/// Shorthand for [`Core::analyze_employment_coverage`].
pub fn analyze_employment_coverage<R>(resume: &R) -> AppResult<CoverageReport>
where
    R: ResumeLike + ?Sized,
{
    Core::analyze_employment_coverage(resume)
}

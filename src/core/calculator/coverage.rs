//! Folds sweep results and the tracked lifetime into a coverage report.

use crate::models::coverage::{CoverageDuration, CoverageReport, Interval};

/// Build the final report.
///
/// `total_lifetime_days` comes from the resume itself; the other figures
/// come from the sweep.
pub fn aggregate(
    gaps: Vec<Interval>,
    overlaps: Vec<Interval>,
    total_gap_days: i64,
    total_work_days: i64,
    total_lifetime_days: i64,
) -> CoverageReport {
    let duration = CoverageDuration {
        total: total_lifetime_days,
        work: total_work_days,
        gaps: total_gap_days,
    };

    let pct = coverage_pct(&duration);
    CoverageReport::new(gaps, overlaps, duration, pct)
}

/// Share of the lifetime not spent in gaps, e.g. "87.5%".
///
/// Without a positive lifetime and some overlap days the figure means
/// nothing, and "???" is returned instead.
pub fn coverage_pct(duration: &CoverageDuration) -> String {
    if duration.total > 0 && duration.work > 0 {
        let covered = (duration.total - duration.gaps) as f64 / duration.total as f64;
        format!("{:.1}%", covered * 100.0)
    } else {
        CoverageReport::UNKNOWN_PCT.to_string()
    }
}

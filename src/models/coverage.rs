use chrono::NaiveDate;
use serde::Serialize;

/// A gap or an overlap on the employment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Whole days between `start` and `end`.
    pub duration: i64,
    /// Closed at the analysis instant rather than at a recorded date.
    #[serde(skip)]
    pub ongoing: bool,
}

impl Interval {
    pub fn new(start: NaiveDate, end: NaiveDate, ongoing: bool) -> Self {
        Self {
            start,
            end,
            duration: (end - start).num_days(),
            ongoing,
        }
    }
}

/// Day totals of a coverage report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageDuration {
    /// Tracked lifetime of the candidate.
    pub total: i64,
    /// Days spent in overlapping jobs.
    pub work: i64,
    /// Days spent between jobs.
    pub gaps: i64,
}

/// Result of an employment coverage analysis.
///
/// Built once by the analyzer and read-only afterwards: consumers that want
/// to annotate it clone the parts they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    gaps: Vec<Interval>,
    overlaps: Vec<Interval>,
    duration: CoverageDuration,
    pct: String,
}

impl CoverageReport {
    /// Percentage shown when the history cannot support one.
    pub const UNKNOWN_PCT: &'static str = "???";

    pub(crate) fn new(
        gaps: Vec<Interval>,
        overlaps: Vec<Interval>,
        duration: CoverageDuration,
        pct: String,
    ) -> Self {
        Self {
            gaps,
            overlaps,
            duration,
            pct,
        }
    }

    /// Report for a resume with no usable employment history.
    pub fn empty() -> Self {
        Self::new(
            Vec::new(),
            Vec::new(),
            CoverageDuration::default(),
            "0%".to_string(),
        )
    }

    pub fn gaps(&self) -> &[Interval] {
        &self.gaps
    }

    pub fn overlaps(&self) -> &[Interval] {
        &self.overlaps
    }

    pub fn duration(&self) -> CoverageDuration {
        self.duration
    }

    pub fn pct(&self) -> &str {
        &self.pct
    }

    /// Numeric coverage, `None` for the "???" sentinel.
    pub fn pct_value(&self) -> Option<f64> {
        self.pct.strip_suffix('%').and_then(|v| v.parse().ok())
    }
}

//! Sweep-line pass over job endpoints.
//!
//! Every job contributes a start and an end. Walking them in date order
//! while counting active jobs tells where the candidate had no job (count
//! drops to 0) and where jobs overlapped (count reaches 2).

use super::extract::RawInterval;
use super::normalize::{normalize, normalize_end};
use crate::errors::AppResult;
use crate::models::coverage::Interval;
use crate::models::endpoint::{Endpoint, EndpointKind};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Outcome of a sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sweep {
    pub gaps: Vec<Interval>,
    pub overlaps: Vec<Interval>,
    pub gap_days: i64,
    pub overlap_days: i64,
}

/// Turn the extracted jobs into endpoints sorted by day.
///
/// Jobs without a start are dropped. Open ends stand at `now`. Ties keep
/// history order, start before end within the same job.
pub fn build_endpoints(intervals: &[RawInterval<'_>], now: NaiveDate) -> AppResult<Vec<Endpoint>> {
    let mut endpoints = Vec::with_capacity(intervals.len() * 2);

    for iv in intervals {
        let start = iv.start.map(|s| normalize(s, now)).transpose()?;
        let (end, open) = normalize_end(iv.end, now)?;

        let Some(start) = start else {
            debug!(source_index = iv.source_index, "skipping job without start date");
            continue;
        };

        if end < start {
            warn!(
                source_index = iv.source_index,
                %start,
                %end,
                "job ends before it starts"
            );
        }

        endpoints.push(Endpoint::start(start, iv.source_index));
        endpoints.push(Endpoint::end(end, iv.source_index, open));
    }

    endpoints.sort_by_key(|e| e.instant);
    Ok(endpoints)
}

/// Running state carried across the endpoints.
#[derive(Debug, Default)]
struct SweepState {
    ref_count: i32,
    open_gap: Option<NaiveDate>,
    open_overlap: Option<NaiveDate>,
    out: Sweep,
}

impl SweepState {
    fn step(mut self, ep: &Endpoint) -> Self {
        let before = self.ref_count;
        self.ref_count += ep.kind.delta();

        debug!(
            kind = ep.kind.as_str(),
            instant = %ep.instant,
            source_index = ep.source_index,
            ref_count = self.ref_count,
            "endpoint"
        );

        match (before, self.ref_count, ep.kind) {
            // Last active job ended. If nothing starts later the gap stays
            // open and is dropped in `finish`.
            (1, 0, EndpointKind::End) => {
                self.open_gap = Some(ep.instant);
            }
            (0, 1, EndpointKind::Start) => {
                if let Some(start) = self.open_gap.take() {
                    let gap = Interval::new(start, ep.instant, false);
                    self.out.gap_days += gap.duration;
                    self.out.gaps.push(gap);
                }
            }
            (1, 2, EndpointKind::Start) => {
                self.open_overlap = Some(ep.instant);
            }
            (2, 1, EndpointKind::End) => {
                if let Some(start) = self.open_overlap.take() {
                    self.close_overlap(start, ep.instant, ep.open);
                }
            }
            _ => {}
        }

        self
    }

    fn close_overlap(&mut self, start: NaiveDate, end: NaiveDate, ongoing: bool) {
        let overlap = Interval::new(start, end, ongoing);

        // Jobs touching on a single day are not concurrent.
        if overlap.duration == 0 {
            debug!(%start, "dropping zero-length overlap");
            return;
        }

        self.out.overlap_days += overlap.duration;
        self.out.overlaps.push(overlap);
    }

    fn finish(mut self, now: NaiveDate) -> Sweep {
        if let Some(start) = self.open_overlap.take() {
            self.close_overlap(start, now, true);
        }

        // Out of work since the last job ended. The gap has no end yet, so
        // it is neither reported nor counted.
        if let Some(start) = self.open_gap.take() {
            debug!(%start, "leaving trailing gap open");
        }

        self.out
    }
}

/// Sweep sorted endpoints, collecting gaps and overlaps.
pub fn sweep(endpoints: &[Endpoint], now: NaiveDate) -> Sweep {
    endpoints
        .iter()
        .fold(SweepState::default(), SweepState::step)
        .finish(now)
}

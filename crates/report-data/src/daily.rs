//! Per-day maximum concurrency via a sweep line.
//!
//! A session is bucketed under every calendar date its interval touches, with
//! the full `(start, end)` pair replicated into each bucket rather than
//! clipped to midnight. Within a bucket, sorted start/end events are swept
//! with a running counter whose peak is the day's concurrency figure.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use report_core::session::Session;

/// Maximum number of sessions simultaneously open on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyMax {
    pub date: NaiveDate,
    pub max_concurrent: usize,
}

/// Compute the per-day maximum concurrent session count.
///
/// Returns one [`DailyMax`] per date touched by any session, sorted by date
/// ascending.
pub fn max_concurrent_by_day(sessions: &[Session]) -> Vec<DailyMax> {
    bucket_by_day(sessions)
        .into_iter()
        .map(|(date, intervals)| DailyMax {
            date,
            max_concurrent: max_concurrent(&intervals),
        })
        .collect()
}

/// Group session intervals under every date their span touches.
///
/// A session covering N consecutive dates appears whole in N buckets. A
/// session whose end precedes its start touches no date.
fn bucket_by_day(
    sessions: &[Session],
) -> BTreeMap<NaiveDate, Vec<(NaiveDateTime, NaiveDateTime)>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<(NaiveDateTime, NaiveDateTime)>> = BTreeMap::new();

    for session in sessions {
        let mut current = session.start.date();
        while current <= session.end.date() {
            buckets
                .entry(current)
                .or_default()
                .push((session.start, session.end));
            match current.succ_opt() {
                Some(next) => current = next,
                None => break,
            }
        }
    }

    buckets
}

/// Sweep one day's intervals and return the peak overlap count.
///
/// Each interval contributes a `+1` event at its start and a `-1` event at
/// its end. At equal timestamps starts order before ends, so sessions that
/// merely touch at a boundary instant count as concurrent, and a zero-length
/// session still reaches 1.
fn max_concurrent(intervals: &[(NaiveDateTime, NaiveDateTime)]) -> usize {
    let mut events: Vec<(NaiveDateTime, i32)> = Vec::with_capacity(intervals.len() * 2);
    for &(start, end) in intervals {
        events.push((start, 1));
        events.push((end, -1));
    }

    // -delta keys starts (+1) ahead of ends (-1) at the same instant.
    events.sort_by_key(|&(timestamp, delta)| (timestamp, -delta));

    let mut current = 0i32;
    let mut max = 0i32;
    for (_, delta) in events {
        current += delta;
        if current > max {
            max = current;
        }
    }

    max as usize
}

// ── Tests ─────────────────────────────────────────────────────────────────────

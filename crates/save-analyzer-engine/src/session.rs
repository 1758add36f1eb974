use serde::Serialize;

/// A run of saves whose consecutive gaps all stay below the threshold,
/// before the minimum-size filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub start: i64,
    pub end: i64,
    /// Sum of in-run gaps, in seconds, saturating at `i64::MAX`
    pub duration: i64,
    pub saves: usize,
}

impl Run {
    pub(crate) fn open(ts: i64) -> Self {
        Self {
            start: ts,
            end: ts,
            duration: 0,
            saves: 1,
        }
    }

    /// Seconds from the last save of this run to `ts`.
    pub(crate) fn gap_to(&self, ts: i64) -> i64 {
        ts.saturating_sub(self.end)
    }

    pub(crate) fn push(self, ts: i64) -> Self {
        Self {
            start: self.start,
            end: ts,
            duration: self.duration.saturating_add(self.gap_to(ts)),
            saves: self.saves + 1,
        }
    }
}

/// A qualifying play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    /// 1-based rank among qualifying sessions
    pub ordinal: usize,
    pub start: i64,
    pub end: i64,
    pub duration: i64,
    pub saves: usize,
}

impl Session {
    pub(crate) fn from_run(ordinal: usize, run: Run) -> Self {
        Self {
            ordinal,
            start: run.start,
            end: run.end,
            duration: run.duration,
            saves: run.saves,
        }
    }

    /// Average seconds per save, truncated.
    pub fn save_rate(&self) -> i64 {
        self.duration / self.saves as i64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Every input timestamp, including saves of filtered-out runs
    pub total_saves: usize,
    pub session_count: usize,
    pub total_duration: i64,
    /// Zero when no session qualifies
    pub longest_duration: i64,
}

/// Output of [`crate::segment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentReport {
    pub sessions: Vec<Session>,
    pub summary: SessionSummary,
    /// Runs found before filtering
    pub total_runs: usize,
}

impl SegmentReport {
    /// Runs dropped by the minimum-size filter.
    pub fn filtered_runs(&self) -> usize {
        self.total_runs - self.summary.session_count
    }
}

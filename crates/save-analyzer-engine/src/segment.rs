use crate::config::SegmentConfig;
use crate::session::{Run, SegmentReport, Session, SessionSummary};
use crate::{Error, Result};

/// Partition timestamps into runs, without applying any size filter.
///
/// Timestamps are sorted first. A gap equal to `gap_threshold` starts a new run.
pub fn split_runs(timestamps: &[i64], gap_threshold: i64) -> Vec<Run> {
    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let (mut runs, last) = iter.fold(
        (Vec::new(), Run::open(first)),
        |(mut runs, current), ts| {
            if current.gap_to(ts) < gap_threshold {
                (runs, current.push(ts))
            } else {
                runs.push(current);
                (runs, Run::open(ts))
            }
        },
    );
    runs.push(last);
    runs
}

/// Running totals over qualifying runs.
#[derive(Default)]
struct Tally {
    sessions: Vec<Session>,
    total_duration: i64,
    longest_duration: i64,
}

impl Tally {
    fn record(mut self, run: Run) -> Self {
        let ordinal = self.sessions.len() + 1;
        self.total_duration = self.total_duration.saturating_add(run.duration);
        self.longest_duration = self.longest_duration.max(run.duration);
        self.sessions.push(Session::from_run(ordinal, run));
        self
    }
}

/// Segment save timestamps into play sessions and aggregate totals.
///
/// Runs with fewer than `config.min_saves` saves are dropped and do not take
/// an ordinal, but their saves still count towards `summary.total_saves`.
pub fn segment(timestamps: &[i64], config: &SegmentConfig) -> Result<SegmentReport> {
    if timestamps.is_empty() {
        return Err(Error::EmptyInput);
    }

    let runs = split_runs(timestamps, config.gap_threshold);
    let total_runs = runs.len();

    let tally = runs
        .into_iter()
        .filter(|run| run.saves >= config.min_saves)
        .fold(Tally::default(), Tally::record);

    let summary = SessionSummary {
        total_saves: timestamps.len(),
        session_count: tally.sessions.len(),
        total_duration: tally.total_duration,
        longest_duration: tally.longest_duration,
    };

    Ok(SegmentReport {
        sessions: tally.sessions,
        summary,
        total_runs,
    })
}

use serde::Serialize;
use std::fmt;

use crate::presentation::formatters::format_duration;
use crate::presentation::formatters::session_table::SessionTableView;

#[derive(Debug, Serialize)]
pub struct AnalysisViewModel {
    pub settings: AnalysisSettings,
    pub sessions: Vec<SessionRow>,
    pub summary: SummaryViewModel,
}

#[derive(Debug, Serialize)]
pub struct AnalysisSettings {
    pub save_dir: String,
    pub gap_threshold_secs: i64,
    pub min_saves: usize,
    pub show_table: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionRow {
    pub ordinal: usize,
    pub duration_secs: i64,
    pub saves: usize,
    pub save_rate_secs: i64,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Debug, Serialize)]
pub struct SummaryViewModel {
    pub total_saves: usize,
    pub session_count: usize,
    pub total_duration_secs: i64,
    pub longest_duration_secs: i64,
    pub filtered_runs: usize,
}

impl fmt::Display for AnalysisViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.settings.show_table {
            writeln!(f, "{}", SessionTableView::new(&self.sessions))?;
        }

        write!(f, "{}", self.summary)
    }
}

impl fmt::Display for SummaryViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "saves: {};", self.total_saves)?;
        writeln!(f, "sessions: {};", self.session_count)?;
        writeln!(
            f,
            "total time: {};",
            format_duration(self.total_duration_secs)
        )?;
        writeln!(
            f,
            "longest session time: {}",
            format_duration(self.longest_duration_secs)
        )
    }
}

use crate::args::hints::cmd;
use crate::presentation::formatters::format_duration;
use crate::presentation::view_models::{
    AnalysisSettings, AnalysisViewModel, CommandResultViewModel, Guidance, SessionRow,
    StatusBadge, SummaryViewModel,
};
use save_analyzer_engine::{SegmentConfig, SegmentReport};
use std::path::Path;

pub fn present_analysis(
    report: &SegmentReport,
    save_dir: &Path,
    config: &SegmentConfig,
    show_table: bool,
) -> CommandResultViewModel<AnalysisViewModel> {
    let sessions = report
        .sessions
        .iter()
        .map(|s| SessionRow {
            ordinal: s.ordinal,
            duration_secs: s.duration,
            saves: s.saves,
            save_rate_secs: s.save_rate(),
            start_ts: s.start,
            end_ts: s.end,
        })
        .collect();

    let content = AnalysisViewModel {
        settings: AnalysisSettings {
            save_dir: save_dir.display().to_string(),
            gap_threshold_secs: config.gap_threshold,
            min_saves: config.min_saves,
            show_table,
        },
        sessions,
        summary: SummaryViewModel {
            total_saves: report.summary.total_saves,
            session_count: report.summary.session_count,
            total_duration_secs: report.summary.total_duration,
            longest_duration_secs: report.summary.longest_duration,
            filtered_runs: report.filtered_runs(),
        },
    };

    let mut result = CommandResultViewModel::new(content);

    if report.summary.session_count == 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "No sessions with at least {} saves",
            config.min_saves
        )));

        if config.min_saves > 1 {
            result = result.with_suggestion(
                Guidance::new("Count shorter sessions")
                    .with_command(cmd::with_short(config.min_saves - 1)),
            );
        }

        let wider = format_duration(config.gap_threshold.saturating_mul(2));
        result = result.with_suggestion(
            Guidance::new("Allow longer pauses between saves").with_command(cmd::with_delay(&wider)),
        );
    }

    result
}

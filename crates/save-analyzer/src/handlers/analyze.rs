use crate::args::OutputFormat;
use crate::config::Settings;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::save_loader;
use anyhow::{Result, bail};
use save_analyzer_engine::segment;
use tracing::{debug, info};

pub fn handle(settings: &Settings, format: OutputFormat) -> Result<()> {
    settings.segment.validate()?;

    let save_dir = save_loader::resolve_save_dir(settings.dir.as_deref())?;
    info!("Analyzing saves in {}", save_dir.display());

    let timestamps = save_loader::load_save_timestamps(&save_dir)?;
    if timestamps.is_empty() {
        bail!("saves dir is empty: {}", save_dir.display());
    }

    let report = segment(&timestamps, &settings.segment)?;
    debug!(
        "Found {} run(s), {} qualifying, {} filtered (min saves {}, delay {}s)",
        report.total_runs,
        report.summary.session_count,
        report.filtered_runs(),
        settings.segment.min_saves,
        settings.segment.gap_threshold
    );

    let view_model = presenters::present_analysis(
        &report,
        &save_dir,
        &settings.segment,
        settings.show_table,
    );

    let renderer = ConsoleRenderer::new(format.into());
    renderer.render(view_model)
}

mod bootstrap;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use hanzi_core::settings::{Settings, DICTIONARY_PATH};
use hanzi_data::analysis::{analyze_dictionary, AnalysisOptions};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("hanzi-stats v{} starting", env!("CARGO_PKG_VERSION"));

    let options = AnalysisOptions::default();
    let stats = analyze_dictionary(Path::new(DICTIONARY_PATH), &options)
        .with_context(|| format!("failed to analyse dictionary {}", DICTIONARY_PATH))?;

    // Render everything before touching stdout so a failure never leaves a
    // partial report behind.
    let report = stats.render(options.limit);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(report.as_bytes())
        .and_then(|_| out.flush())
        .context("failed to write report")?;

    tracing::info!(
        "Analysed {} records: {} radicals, {} decomposition kinds, {} etymology types ({} records without decomposition)",
        stats.record_count,
        stats.radicals.len(),
        stats.decompositions.len(),
        stats.etymologies.len(),
        stats.skipped_decompositions
    );

    Ok(())
}

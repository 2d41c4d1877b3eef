mod bootstrap;

use anyhow::Result;
use report_core::settings::Settings;
use report_runtime::orchestrator::{ReportOrchestrator, ReportPaths};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;
    tracing::info!("Health Report v{} starting", env!("CARGO_PKG_VERSION"));

    settings.validate()?;
    bootstrap::ensure_output_dir(&settings.output)?;

    let orchestrator = ReportOrchestrator::new(ReportPaths::from(&settings));
    let summary = orchestrator.run().map_err(|e| {
        tracing::error!("Report generation failed: {}", e);
        e
    })?;

    println!("Success! Report saved to {}", summary.output_path.display());

    Ok(())
}

//! Sydney registration insights — cleans the latest campaign export and
//! writes the Cleaned and Insights sheets back next to it.

use chrono::Local;
use clap::Parser;
use insights_core::ReportConfig;
use insights_report::run_report;
use std::path::PathBuf;
use tracing::{info, warn};

mod discover;
mod workbook;

#[derive(Parser, Debug)]
#[command(name = "sydney-insights")]
#[command(about = "Cleans the campaign performance export and writes the insights report")]
#[command(version)]
struct Cli {
    /// Explicit input file (discovery is skipped when it exists)
    #[arg(long, env = "SYDNEY_INSIGHTS__INPUT")]
    input: Option<PathBuf>,

    /// Directory to search instead of the configured locations
    #[arg(long, env = "SYDNEY_INSIGHTS__SEARCH_DIR")]
    search_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sydney_insights=info,insights_pipeline=info,insights_report=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let cfg = ReportConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        ReportConfig::default()
    });

    let input = discover::resolve_input(
        cli.input.as_deref(),
        cli.search_dir.as_deref(),
        &cfg.discovery,
    )?;
    let mut workbook = workbook::CsvWorkbook::open(&input);
    let table = workbook.load_input()?;
    info!(
        rows = table.rows.len(),
        sheet = %cfg.sheets.input,
        "input table loaded"
    );

    run_report(&table, &cfg, Local::now().date_naive(), &mut workbook)?;
    info!(input = %input.display(), "cleaned + insights sheets written");
    Ok(())
}

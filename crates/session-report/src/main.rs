mod bootstrap;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use report_core::config::Config;
use report_core::settings::Settings;
use report_runtime::orchestrator::{self, ReportRun};

/// Printed when neither the CLI argument nor the configured default path
/// resolves to an existing file.
const NO_INPUT_FILE_MESSAGE: &str = "Error: No input file path provided.";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    // Configuration problems are fatal before any report work starts.
    let config = Config::load_from(&settings.config)?;

    let run_started = chrono::Utc::now();
    bootstrap::setup_tracing(&config, settings.trace, run_started)?;

    tracing::info!("session-report v{} starting", env!("CARGO_PKG_VERSION"));

    let Some(input) = bootstrap::resolve_input_path(settings.input.as_deref(), &config.app)
    else {
        println!("{}", NO_INPUT_FILE_MESSAGE);
        std::process::exit(1);
    };

    tracing::info!("Reading sessions from {}", input.display());

    // Error boundary: anything escaping the pipeline reaches the trace log
    // before the process exits non-zero.
    match run_pipeline(&input).await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!("Unhandled error: {:#}", err);
            Err(err)
        }
    }
}

async fn run_pipeline(input: &std::path::Path) -> Result<()> {
    let run = orchestrator::generate_reports(Some(input)).await;
    print_reports(&run);
    Ok(())
}

/// Write both reports to stdout.
///
/// Rows flagged by the renderer are shown in red, but only when stdout is a
/// terminal; piped output stays plain.
fn print_reports(run: &ReportRun) {
    print!("{}", run.daily);

    let color = std::io::stdout().is_terminal();
    println!("{}", run.operators.header);
    for row in &run.operators.rows {
        if row.highlight && color {
            println!("{}", row.text.red());
        } else {
            println!("{}", row.text);
        }
    }
    println!();
}

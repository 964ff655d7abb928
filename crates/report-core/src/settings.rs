use clap::Parser;
use std::path::PathBuf;

/// Call-center session activity reports from a CSV export
#[derive(Parser, Debug, Clone)]
#[command(
    name = "session-report",
    about = "Call-center session activity reports from a CSV export",
    version
)]
pub struct Settings {
    /// Input CSV file; when absent, the configured default path is resolved
    /// by walking upward from the working directory
    pub input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH", default_value = "appsettings.json")]
    pub config: PathBuf,

    /// Write a diagnostic trace log for this run
    #[arg(long)]
    pub trace: bool,
}

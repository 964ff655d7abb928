//! The report pipeline: read the input file once, compute both aggregates,
//! render both reports.
//!
//! The pipeline holds no state between runs; running it twice on the same
//! input produces identical output.

use std::path::Path;

use report_data::daily::max_concurrent_by_day;
use report_data::operators::aggregate_operator_states;
use report_data::reader::read_sessions;
use report_render::daily::render_daily_report;
use report_render::operators::{render_operator_table, OperatorTable};
use tracing::debug;

/// The rendered output of one pipeline run.
#[derive(Debug, Clone)]
pub struct ReportRun {
    /// Report 1 text, including its trailing blank line.
    pub daily: String,
    /// Report 2 header and rows with their highlight flags.
    pub operators: OperatorTable,
}

/// Run the full pipeline for `path`.
///
/// Reading is lenient (see [`read_sessions`]); a missing or partially
/// readable file still produces reports from whatever was collected.
pub async fn generate_reports(path: Option<&Path>) -> ReportRun {
    let sessions = read_sessions(path).await;
    debug!("Generating reports from {} sessions", sessions.len());

    let daily = max_concurrent_by_day(&sessions);
    let operators = aggregate_operator_states(&sessions);

    ReportRun {
        daily: render_daily_report(&daily),
        operators: render_operator_table(&operators),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

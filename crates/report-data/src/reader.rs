//! Line-wise session file ingestion.
//!
//! Reads the semicolon-delimited export one line at a time, delegating to
//! [`Session::parse`] and collecting valid records in original file order.
//! Every failure degrades to a log entry; the reader never aborts the run.

use std::path::Path;

use report_core::session::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

/// Read all sessions from `path`, skipping lines that fail to parse.
///
/// * `None` path → zero sessions, no error.
/// * A line that does not parse is logged (raw line plus error) and skipped.
/// * An I/O error opening or reading the file is logged and whatever was
///   collected up to that point is returned.
///
/// The file handle is scoped to this function and released on every path.
pub async fn read_sessions(path: Option<&Path>) -> Vec<Session> {
    let Some(path) = path else {
        return Vec::new();
    };

    let file = match tokio::fs::File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            warn!("Error reading file '{}': '{}'", path.display(), e);
            return Vec::new();
        }
    };

    let mut sessions: Vec<Session> = Vec::new();
    let mut skipped = 0usize;
    let mut lines = BufReader::new(file).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match Session::parse(&line) {
                Ok(session) => sessions.push(session),
                Err(e) => {
                    skipped += 1;
                    warn!("Failed to parse line '{}': {}", line, e);
                }
            },
            Ok(None) => break,
            Err(e) => {
                // Partial results are still useful; stop here rather than fail.
                warn!("Error reading file '{}': '{}'", path.display(), e);
                break;
            }
        }
    }

    debug!(
        "Read {} sessions from {} ({} lines skipped)",
        sessions.len(),
        path.display(),
        skipped,
    );

    sessions
}

// ── Tests ─────────────────────────────────────────────────────────────────────

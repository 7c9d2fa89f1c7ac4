use std::fs;
use std::path::PathBuf;

use crate::domain::{
    ScanReport, count_summary_markers, expected_summary_line, locate_summary, scan,
};

use super::AppError;

/// Result of reconciling a document against its computed hour total.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub report: ScanReport,
    /// Whether a summary line was present before reconciliation.
    pub summary_found: bool,
    /// Whether the file content was changed (rewritten or appended).
    pub updated: bool,
}

/// Reconciliation of an in-memory document. `new_text` is `Some` when the
/// document needs to be written back.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub outcome: SyncOutcome,
    pub new_text: Option<String>,
}

/// Reconcile the document text against its computed total.
///
/// State machine: Scan -> Locate -> {Missing -> Append, Mismatch ->
/// (Rewrite | Error), Match -> NoOp, Multiple -> Error}. A missing summary
/// line is appended in both modes; a mismatched one is only rewritten when
/// `write` is set, otherwise it is an error.
pub fn reconcile(text: &str, write: bool) -> Result<Reconciled, AppError> {
    let report = scan(text);

    let markers = count_summary_markers(text);
    if markers > 1 {
        return Err(AppError::MultipleSummaryLines { found: markers });
    }

    let expected = expected_summary_line(report.total_hours);

    let Some(span) = locate_summary(text) else {
        let mut appended = text.to_string();
        if !appended.is_empty() && !appended.ends_with('\n') {
            appended.push('\n');
        }
        appended.push('\n');
        appended.push_str(&expected);
        appended.push('\n');
        return Ok(Reconciled {
            outcome: SyncOutcome {
                report,
                summary_found: false,
                updated: true,
            },
            new_text: Some(appended),
        });
    };

    let found = span.text(text);
    if found == expected {
        return Ok(Reconciled {
            outcome: SyncOutcome {
                report,
                summary_found: true,
                updated: false,
            },
            new_text: None,
        });
    }

    if !write {
        return Err(AppError::SummaryOutOfSync {
            expected,
            found: found.to_string(),
        });
    }

    let mut patched = String::with_capacity(text.len());
    patched.push_str(&text[..span.start]);
    patched.push_str(&expected);
    patched.push_str(&text[span.end..]);
    Ok(Reconciled {
        outcome: SyncOutcome {
            report,
            summary_found: true,
            updated: true,
        },
        new_text: Some(patched),
    })
}

/// Application service reconciling a markdown file on disk.
/// This is the primary interface for any client (CLI, scripts, tests).
pub struct SyncService {
    path: PathBuf,
    write: bool,
}

impl SyncService {
    pub fn new(path: impl Into<PathBuf>, write: bool) -> Self {
        Self {
            path: path.into(),
            write,
        }
    }

    /// Read the file, reconcile it, and write it back when needed.
    /// The write is a single whole-file write; bytes outside the patched
    /// span are preserved exactly.
    pub fn run(&self) -> Result<SyncOutcome, AppError> {
        if !self.path.exists() {
            return Err(AppError::FileNotFound(self.path.clone()));
        }

        let text = fs::read_to_string(&self.path).map_err(AppError::Read)?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "scanning file");

        let reconciled = reconcile(&text, self.write)?;
        if let Some(new_text) = &reconciled.new_text {
            fs::write(&self.path, new_text).map_err(AppError::Write)?;
            tracing::debug!(path = %self.path.display(), "summary line synced");
        }

        Ok(reconciled.outcome)
    }
}

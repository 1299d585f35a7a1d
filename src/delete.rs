//! Confirmation parsing and batch deletion
//!
//! Deletions are independent: a failure on one path is recorded and the rest
//! of the batch still runs.

use std::path::PathBuf;

/// Result of a deletion batch
#[derive(Debug, Default)]
pub struct DeleteOutcome {
    /// Paths that were removed
    pub deleted: Vec<PathBuf>,
    /// Paths that could not be removed, with the reason
    pub failed: Vec<(PathBuf, std::io::Error)>,
}

/// Interpret one line of confirmation input.
///
/// `y` or `yes`, case-insensitive with surrounding whitespace ignored,
/// confirms. Anything else, including empty input, declines.
pub fn confirmation_granted(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Remove every path in the batch, continuing past individual failures.
pub fn delete_files(paths: &[PathBuf]) -> DeleteOutcome {
    let mut outcome = DeleteOutcome::default();

    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => outcome.deleted.push(path.clone()),
            Err(err) => outcome.failed.push((path.clone(), err)),
        }
    }

    outcome
}

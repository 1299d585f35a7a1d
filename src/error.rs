//! Error types for bootprune
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for bootprune operations
pub type BootpruneResult<T> = Result<T, BootpruneError>;

/// Main error type for bootprune operations
#[derive(Error, Debug)]
pub enum BootpruneError {
    /// A directory listing failed
    #[error("cannot read directory {path}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The scratch file for the editor session could not be created
    #[error("cannot create scratch file: {0}")]
    ScratchCreate(std::io::Error),

    /// Writing the prompt into the scratch file failed
    #[error("cannot write scratch file {path}: {source}")]
    ScratchWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading the scratch file back after the editor exited failed
    #[error("cannot read scratch file {path}: {source}")]
    ScratchRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The editor binary could not be started
    #[error("cannot start editor '{editor}': {source}")]
    EditorStart {
        editor: String,
        source: std::io::Error,
    },

    /// The editor exited abnormally or with a non-zero status
    #[error("editor '{editor}' exited unsuccessfully ({status})")]
    EditorExit { editor: String, status: ExitStatus },

    /// A wildcard pattern failed to compile
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] globset::Error),

    /// Reading the confirmation answer from stdin failed
    #[error("cannot read confirmation from stdin: {0}")]
    ConfirmRead(std::io::Error),

    /// Writing a status line or the confirmation prompt failed
    #[error("cannot write output: {0}")]
    OutputWrite(std::io::Error),
}

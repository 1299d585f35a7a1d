//! External editor session
//!
//! Writes the prompt into a scratch file, hands the file to the user's
//! editor with the terminal streams inherited, blocks until the editor
//! exits, and reads the edited content back. The scratch file is removed
//! when the session ends, on every exit path.

use std::io::Write;
use std::process::Command;

use tempfile::Builder;

use crate::error::{BootpruneError, BootpruneResult};

/// Fallback editor when neither $VISUAL nor $EDITOR is set
const DEFAULT_EDITOR: &str = "vim";

/// Resolve the editor command from the environment.
///
/// Checks `$VISUAL` first, then `$EDITOR`, then falls back to `vim`. Empty
/// values count as unset. The returned command may contain arguments
/// (e.g. `code --wait`); the first whitespace-separated token is the program.
pub fn resolve_editor() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Run one editor session over the prompt and return the edited lines.
///
/// Scratch file creation failure is the only condition the caller cannot
/// meaningfully distinguish from the rest; write, spawn, abnormal exit, and
/// readback failures each surface as their own error variant. The editor
/// inherits stdin/stdout/stderr so full-screen terminal editors work.
pub fn edit_in_scratch_file(prompt: &str, editor: &str) -> BootpruneResult<Vec<String>> {
    // NamedTempFile deletes the scratch file on drop, covering every return
    // path below.
    let mut scratch = Builder::new()
        .prefix("bootprune.")
        .suffix(".tmp")
        .tempfile()
        .map_err(BootpruneError::ScratchCreate)?;
    let scratch_path = scratch.path().to_path_buf();

    scratch
        .write_all(prompt.as_bytes())
        .map_err(|source| BootpruneError::ScratchWrite {
            path: scratch_path.clone(),
            source,
        })?;
    scratch.flush().map_err(|source| BootpruneError::ScratchWrite {
        path: scratch_path.clone(),
        source,
    })?;

    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(DEFAULT_EDITOR);

    let status = Command::new(program)
        .args(parts)
        .arg(&scratch_path)
        .status()
        .map_err(|source| BootpruneError::EditorStart {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(BootpruneError::EditorExit {
            editor: editor.to_string(),
            status,
        });
    }

    let content =
        std::fs::read_to_string(&scratch_path).map_err(|source| BootpruneError::ScratchRead {
            path: scratch_path.clone(),
            source,
        })?;

    Ok(content.lines().map(str::to_string).collect())
}

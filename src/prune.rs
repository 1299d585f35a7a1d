//! The pruning pipeline
//!
//! Orchestrates one full run: scan, editor session, readback, resolution,
//! confirmation, deletion. Status lines go to the supplied writer and the
//! confirmation answer comes from the supplied reader, so the whole flow can
//! be driven from tests; the binary passes stdin/stdout.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::delete::{confirmation_granted, delete_files};
use crate::editor::edit_in_scratch_file;
use crate::error::{BootpruneError, BootpruneResult};
use crate::prompt::{parse_readback, render_prompt};
use crate::resolve::resolve_files;
use crate::scan::scan_versions;

/// Run one complete prune pass over `boot_dir`.
///
/// The editor itself still talks to the inherited terminal; only the status
/// report and the `[y/N]` answer go through `output` and `input`. If nothing
/// matches, or the user declines, the filesystem is left untouched.
pub fn prune<R: BufRead, W: Write>(
    boot_dir: &Path,
    editor: &str,
    input: &mut R,
    output: &mut W,
) -> BootpruneResult<()> {
    let versions = scan_versions(boot_dir)?;

    let prompt = render_prompt(&versions);
    let readback = edit_in_scratch_file(&prompt, editor)?;
    let drop_versions = parse_readback(&readback, &versions);

    let matches = resolve_files(boot_dir, &drop_versions)?;

    if matches.is_empty() {
        report(output, "Did not delete any files.")?;
        return Ok(());
    }

    report(output, "Deleting the following files:")?;
    for path in &matches {
        report(output, &format!("\t{}", path.display()))?;
    }

    if !ask_for_confirmation(input, output, "Is this okay?")? {
        report(output, "Did not delete any files.")?;
        return Ok(());
    }

    let outcome = delete_files(&matches);
    for (path, err) in &outcome.failed {
        report(output, &format!("{}: {}", path.display(), err))?;
    }
    report(output, &format!("Deleted {} files.", outcome.deleted.len()))?;

    Ok(())
}

fn report(output: &mut impl Write, line: &str) -> BootpruneResult<()> {
    writeln!(output, "{}", line).map_err(BootpruneError::OutputWrite)
}

/// Print a `[y/N]` prompt and read one answer line.
///
/// No retry loop; anything but `y`/`yes` declines. End of input is a hard
/// error rather than an implicit "no".
fn ask_for_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> BootpruneResult<bool> {
    write!(output, "{} [y/N]: ", question).map_err(BootpruneError::OutputWrite)?;
    output.flush().map_err(BootpruneError::OutputWrite)?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .map_err(BootpruneError::ConfirmRead)?;
    if read == 0 {
        return Err(BootpruneError::ConfirmRead(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    Ok(confirmation_granted(&answer))
}

//! Bootprune CLI - interactive cleaner for old kernel images in /boot
//!
//! Usage: bootprune
//!
//! Scans /boot for installed kernel versions, opens a keep/drop checklist in
//! the editor from $VISUAL or $EDITOR (vim if neither is set), and deletes
//! every file belonging to a dropped version after confirmation.

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use bootprune::{prune, resolve_editor};

/// Boot directory holding kernel images and their associated files
const BOOT_DIR: &str = "/boot";

/// Bootprune - remove old kernel images from /boot interactively
#[derive(Parser, Debug)]
#[command(name = "bootprune")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if let Err(err) = run(Path::new(BOOT_DIR)) {
        eprint!("{}", format_error(&err));
        std::process::exit(1);
    }
}

fn format_error(err: &anyhow::Error) -> String {
    format!("[ERROR] {}\n", err)
}

fn run(boot_dir: &Path) -> Result<()> {
    let editor = resolve_editor();
    let mut input = std::io::stdin().lock();
    let mut output = std::io::stdout();

    prune(boot_dir, &editor, &mut input, &mut output)?;
    Ok(())
}

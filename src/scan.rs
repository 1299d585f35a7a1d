//! Kernel image scanner
//!
//! Identifies installed kernel versions by file name prefix in the boot
//! directory.

use std::path::Path;

use crate::error::{BootpruneError, BootpruneResult};

/// File name prefix identifying a bootable kernel image
pub const KERNEL_PREFIX: &str = "vmlinuz-";

/// Extract the version suffix from a kernel image file name.
///
/// Returns `None` for names that do not start with [`KERNEL_PREFIX`]. For
/// every valid name, prepending [`KERNEL_PREFIX`] to the returned version
/// reconstructs the original file name.
pub fn kernel_version(filename: &str) -> Option<&str> {
    filename.strip_prefix(KERNEL_PREFIX)
}

/// List the boot directory and collect the versions of all kernel images.
///
/// Order follows the directory listing and is filesystem-dependent. Entries
/// with non-UTF-8 names cannot be kernel images and are skipped.
pub fn scan_versions(boot_dir: &Path) -> BootpruneResult<Vec<String>> {
    let entries =
        std::fs::read_dir(boot_dir).map_err(|source| BootpruneError::DirectoryUnreadable {
            path: boot_dir.to_path_buf(),
            source,
        })?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BootpruneError::DirectoryUnreadable {
            path: boot_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if let Some(version) = name.to_str().and_then(kernel_version) {
            versions.push(version.to_string());
        }
    }

    Ok(versions)
}

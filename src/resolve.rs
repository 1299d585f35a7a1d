//! Wildcard resolution of dropped versions to boot files
//!
//! Each dropped version expands to every file in the boot directory whose
//! name contains the version as a substring, via a `*<version>*` glob.

use std::path::{Path, PathBuf};

use globset::Glob;

use crate::error::{BootpruneError, BootpruneResult};

/// Expand every dropped version into the matching boot directory paths.
///
/// Matches for one version are returned in sorted path order; versions are
/// processed in input order and results concatenated without deduplication,
/// so a file whose name contains two dropped versions appears twice. A
/// version that fails to compile into a glob is a hard error.
pub fn resolve_files(boot_dir: &Path, versions: &[String]) -> BootpruneResult<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for version in versions {
        let matcher = Glob::new(&format!("*{version}*"))?.compile_matcher();

        let entries =
            std::fs::read_dir(boot_dir).map_err(|source| BootpruneError::DirectoryUnreadable {
                path: boot_dir.to_path_buf(),
                source,
            })?;

        let mut version_matches = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| BootpruneError::DirectoryUnreadable {
                path: boot_dir.to_path_buf(),
                source,
            })?;
            if matcher.is_match(entry.file_name().as_os_str()) {
                version_matches.push(entry.path());
            }
        }

        version_matches.sort();
        matches.extend(version_matches);
    }

    Ok(matches)
}

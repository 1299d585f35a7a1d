//! Bootprune - interactive cleaner for old kernel images
//!
//! Bootprune scans the boot directory for installed kernel versions, opens a
//! keep/drop checklist in the user's editor, and deletes every file belonging
//! to a dropped version after a final confirmation.

pub mod delete;
pub mod editor;
pub mod error;
pub mod prompt;
pub mod prune;
pub mod resolve;
pub mod scan;

// Re-exports for convenience
pub use delete::{confirmation_granted, delete_files, DeleteOutcome};
pub use editor::{edit_in_scratch_file, resolve_editor};
pub use error::{BootpruneError, BootpruneResult};
pub use prompt::{parse_readback, render_prompt};
pub use prune::prune;
pub use resolve::resolve_files;
pub use scan::{kernel_version, scan_versions, KERNEL_PREFIX};

//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod digest;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_args};
pub use digest::execute_digest;
pub use models::{AnalyzeArgs, DigestArgs};
pub use utils::{display_schema, display_version, load_transcript, validate_report_file};

//
// lib.rs
// emoji-scrub
//
// Library entry that re-exports the scanner, replacement table and cleaning pipeline so the binary and the integration tests share one code path.
//
// Thales Matheus Mendonça Santos - November 2025
//
pub mod clean;
pub mod cli;
pub mod scanner;
pub mod table;
pub mod utils;

pub use clean::{clean_file, run, FileOutcome, RunReport, Summary};
pub use cli::{build_config, Args, Mode, ScanConfig};
pub use scanner::{candidate_files, has_allowed_extension, walk_files};
pub use table::{Replacement, ReplacementTable};

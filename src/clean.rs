use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{Mode, ScanConfig};
use crate::scanner::candidate_files;
use crate::table::ReplacementTable;
use crate::utils::{read_text, write_text};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// True when the file was rewritten (fix) or would have been (check).
    pub modified: bool,
    pub matched: Vec<&'static str>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scanned: usize,
    pub flagged: usize,
    pub errors: usize,
}

impl Summary {
    pub fn found_any(&self) -> bool {
        self.flagged > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub mode: Mode,
    pub summary: Summary,
}

impl RunReport {
    /// Only a check run with findings fails.
    pub fn exit_code(&self) -> u8 {
        if self.mode == Mode::Check && self.summary.found_any() {
            1
        } else {
            0
        }
    }
}

/// Scan one file and, in fix mode, rewrite it when the table changed anything.
pub fn clean_file(path: &Path, mode: Mode, table: &ReplacementTable) -> Result<FileOutcome> {
    let original = read_text(path)?;
    let replaced = table.apply(&original);
    let modified = replaced.is_changed();

    if modified && mode == Mode::Fix {
        write_text(path, &replaced.content)?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        modified,
        matched: replaced.matched,
    })
}

fn report_file(out: &mut dyn Write, mode: Mode, outcome: &FileOutcome) -> Result<()> {
    if !outcome.modified {
        return Ok(());
    }
    match mode {
        Mode::Fix => writeln!(out, "FIXED: {}", outcome.path.display())?,
        Mode::Check => writeln!(
            out,
            "FAILED: Redundant emojis found in {}: {}",
            outcome.path.display(),
            outcome.matched.join(", ")
        )?,
    }
    Ok(())
}

/// Walk, filter and clean every candidate file, writing report lines to `out`.
pub fn run(config: &ScanConfig, table: &ReplacementTable, out: &mut dyn Write) -> Result<RunReport> {
    let mut summary = Summary::default();

    for path in candidate_files(config) {
        summary.scanned += 1;
        match clean_file(&path, config.mode, table) {
            Ok(outcome) => {
                debug!(path = %path.display(), matched = outcome.matched.len(), "scanned");
                report_file(out, config.mode, &outcome)?;
                if outcome.modified {
                    summary.flagged += 1;
                }
            }
            Err(err) => {
                summary.errors += 1;
                writeln!(out, "Error processing {}: {:#}", path.display(), err)?;
            }
        }
    }

    info!(
        root = %config.root.display(),
        mode = ?config.mode,
        scanned = summary.scanned,
        flagged = summary.flagged,
        errors = summary.errors,
        "scan finished"
    );

    if config.mode == Mode::Check && summary.found_any() {
        writeln!(out)?;
        writeln!(out, "Static check failed: Redundant emojis/slop detected in codebase.")?;
        writeln!(out, "Please run 'emoji-scrub --fix' to clean the codebase.")?;
    } else if !summary.found_any() {
        writeln!(out, "No redundant emojis found.")?;
    }

    Ok(RunReport {
        mode: config.mode,
        summary,
    })
}

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

pub const EXTENSIONS: &[&str] = &[
    ".md", ".go", ".ts", ".js", ".tsx", ".jsx", ".toml", ".yml", ".yaml", ".json",
];

pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    "dist",
    "out",
    "coverage",
    ".next",
    ".vscode",
];

#[derive(Parser, Debug)]
#[command(
    name = "emoji-scrub",
    author,
    version,
    about = "Scan and remove redundant emojis and slop from the codebase."
)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Exit with error code if emojis are found without modifying files
    #[arg(long)]
    pub check: bool,

    /// Automatically fix found emojis (default behavior if --check is not set)
    #[arg(long)]
    pub fix: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Fix,
}

impl Mode {
    /// `--fix` wins over `--check`; fixing is the default.
    pub fn resolve(check: bool, fix: bool) -> Self {
        if check && !fix {
            Mode::Check
        } else {
            Mode::Fix
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub mode: Mode,
    pub extensions: Vec<&'static str>,
    pub excluded_dirs: HashSet<&'static str>,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            root: root.into(),
            mode,
            extensions: EXTENSIONS.to_vec(),
            excluded_dirs: EXCLUDED_DIRS.iter().copied().collect(),
        }
    }
}

pub fn build_config(args: &Args) -> ScanConfig {
    ScanConfig::new(&args.path, Mode::resolve(args.check, args.fix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> ScanConfig {
        let args = Args::try_parse_from(argv).unwrap();
        build_config(&args)
    }

    #[test]
    fn defaults_to_fix_in_current_dir() {
        let cfg = parse(&["emoji-scrub"]);
        assert_eq!(cfg.mode, Mode::Fix);
        assert_eq!(cfg.root, PathBuf::from("."));
    }

    #[test]
    fn check_alone_selects_check() {
        assert_eq!(parse(&["emoji-scrub", "--check", "docs"]).mode, Mode::Check);
    }

    #[test]
    fn fix_takes_precedence_over_check() {
        assert_eq!(parse(&["emoji-scrub", "--check", "--fix"]).mode, Mode::Fix);
        assert_eq!(parse(&["emoji-scrub", "--fix"]).mode, Mode::Fix);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["emoji-scrub", "--dry-run"]).is_err());
    }

    #[test]
    fn fixed_lists_are_loaded() {
        let cfg = ScanConfig::new("x", Mode::Check);
        assert_eq!(cfg.extensions.len(), 10);
        assert!(cfg.excluded_dirs.contains("node_modules"));
        assert!(!cfg.excluded_dirs.contains("node"));
    }
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::{DirEntry, WalkDir};

use crate::cli::ScanConfig;

fn is_excluded(entry: &DirEntry, excluded: &HashSet<&'static str>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| excluded.contains(name))
}

pub fn has_allowed_extension(path: &Path, extensions: &[&str]) -> bool {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy(),
        None => return false,
    };
    extensions.iter().any(|ext| name.ends_with(ext))
}

fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        // Dangling links are kept so the read reports them.
        return !entry.path().is_dir();
    }
    file_type.is_file()
}

/// Lazily yield files under `root`, never descending into excluded directories.
///
/// Symlinked files are yielded; symlinked directories are not entered. A root
/// that is itself a file yields nothing.
pub fn walk_files<'a>(
    root: &Path,
    excluded: &'a HashSet<&'static str>,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |e| !is_excluded(e, excluded))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.depth() > 0 && is_file_like(entry))
        .map(DirEntry::into_path)
}

/// Files the cleaner should open for this configuration.
pub fn candidate_files(config: &ScanConfig) -> impl Iterator<Item = PathBuf> + '_ {
    walk_files(&config.root, &config.excluded_dirs)
        .filter(move |path| has_allowed_extension(path, &config.extensions))
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a whole file as UTF-8. A BOM, if present, stays part of the content.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).context("read failed")?;
    String::from_utf8(bytes).context("file is not valid UTF-8")
}

/// Replace the file's contents in full.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).context("write failed")
}

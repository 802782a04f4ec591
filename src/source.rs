//! Header file loading.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a header file into its lines.
///
/// The whole file is loaded at once, so the handle is closed before parsing starts.
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

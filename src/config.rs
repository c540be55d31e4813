//! Plain `key = value` configuration files.
//!
//! Shared by the theme (`theme.conf`) and key bindings (`keybinds.conf`).
//! Blank lines and `#` comments are skipped; lines without both a key and a
//! value are ignored rather than rejected.

use std::path::Path;

use crate::error::{Context, Result};

/// Read all `key = value` pairs from `path`, in file order.
pub fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let contents =
        std::fs::read_to_string(path).with_ctx(|| format!("read {}", path.display()))?;
    Ok(parse_pairs(&contents))
}

/// Write `contents` to `path`, reporting the path on failure.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_ctx(|| format!("write {}", path.display()))
}

pub fn parse_pairs(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                None
            } else {
                Some((key.to_string(), value.to_string()))
            }
        })
        .collect()
}

//! Dashboard output writing with change detection

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// What happened to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Hex SHA-256 of the content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Write `content` to `path` unless the file already holds the same bytes.
/// `force` always writes. Parent directories are created as needed.
pub fn write_if_changed(path: &Path, content: &str, force: bool) -> Result<WriteOutcome> {
    if !force {
        if let Ok(existing) = fs::read_to_string(path) {
            if content_hash(&existing) == content_hash(content) {
                return Ok(WriteOutcome::Unchanged);
            }
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write dashboard to {}", path.display()))?;
    Ok(WriteOutcome::Written)
}

//! On-disk copy of the last fetched news page.

use std::path::Path;

use anyhow::{Context, Result};

/// Loads the cached page.
///
/// Returns `None` if the file doesn't exist.
pub fn load(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(html) => {
            tracing::debug!(path = %path.display(), bytes = html.len(), "loaded cached page");
            Ok(Some(html))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no cached page");
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Stores the page, creating parent directories as needed.
pub fn store(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "cached news page");
    Ok(())
}

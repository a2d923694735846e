//! Renderers for the Space Invaders news feed.
//!
//! Turns parsed day records into:
//! - an RSS 2.0 feed (`feed.xml`)
//! - a Markdown digest (`NEWS.md`)
//! - a standalone HTML page (`index.html`)

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

mod group;
mod html;
mod markdown;
mod markup;
mod rss;

pub use group::{EventGroup, MonthGroup, YearGroup, group_by_month, group_events, month_name};
pub use html::render_html;
pub use markdown::{render_markdown, tag_url};
pub use markup::escape;
pub use rss::{FeedOptions, describe, render_rss};

pub const RSS_FILE: &str = "feed.xml";
pub const MARKDOWN_FILE: &str = "NEWS.md";
pub const HTML_FILE: &str = "index.html";

/// Output errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Failed to create the output directory or write a file.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rendered documents ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub rss: String,
    pub markdown: String,
    pub html: String,
}

/// Writes the documents into `docs_dir`, creating it if needed.
///
/// Returns the written paths in `feed.xml`, `NEWS.md`, `index.html` order.
pub fn write_outputs(docs_dir: &Path, outputs: &Outputs) -> Result<Vec<PathBuf>, FeedError> {
    fs::create_dir_all(docs_dir).map_err(|source| FeedError::Io {
        path: docs_dir.to_path_buf(),
        source,
    })?;

    let files = [
        (RSS_FILE, &outputs.rss),
        (MARKDOWN_FILE, &outputs.markdown),
        (HTML_FILE, &outputs.html),
    ];
    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = docs_dir.join(name);
        fs::write(&path, content).map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote output");
        written.push(path);
    }
    Ok(written)
}

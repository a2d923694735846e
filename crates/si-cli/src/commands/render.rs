//! Render command: regenerate outputs from a saved page.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use si_core::{DayRecord, filter_last_n_days, parse_news};
use si_feed::{FeedOptions, Outputs, render_html, render_markdown, render_rss, write_outputs};

use crate::commands::parse::read_page;
use crate::{Config, RenderArgs};

/// Renders all documents for `items` (oldest first).
///
/// The feed only carries the trailing `window_days`; the digest and page
/// carry everything.
pub fn build_outputs(items: &[DayRecord], config: &Config, generated_at: DateTime<Utc>) -> Outputs {
    let recent = filter_last_n_days(items, config.window_days);
    tracing::info!(
        total = items.len(),
        recent = recent.len(),
        window_days = config.window_days,
        "rendering outputs"
    );

    let markdown = render_markdown(items);
    Outputs {
        rss: render_rss(&recent, &FeedOptions::new(&config.site_url), generated_at),
        html: render_html(items),
        markdown,
    }
}

/// Builds and writes all documents into `config.docs_dir`.
pub fn publish(items: &[DayRecord], config: &Config, generated_at: DateTime<Utc>) -> Result<Vec<PathBuf>> {
    let outputs = build_outputs(items, config, generated_at);
    write_outputs(&config.docs_dir, &outputs).context("failed to write outputs")
}

pub fn run<W: Write>(writer: &mut W, args: &RenderArgs, config: &Config) -> Result<()> {
    let html = read_page(args.file.as_deref(), config)?;
    let parsed = parse_news(&html).context("failed to parse news page")?;

    let written = publish(&parsed.items, config, Utc::now())?;
    writeln!(writer, "Rendered {} day entries", parsed.items.len())?;
    for path in written {
        writeln!(writer, "- {}", path.display())?;
    }
    Ok(())
}

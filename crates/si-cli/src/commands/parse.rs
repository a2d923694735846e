//! Parse command: day records as JSONL.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use si_core::{DayRecord, filter_last_n_days, parse_news};

use crate::{Config, ParseArgs, cache};

/// Reads the page to work on: `file` if given, otherwise the cached page.
pub fn read_page(file: Option<&Path>, config: &Config) -> Result<String> {
    if let Some(file) = file {
        return fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()));
    }
    cache::load(&config.cache_path)?.with_context(|| {
        format!(
            "no cached page at {}. Run 'si-news run' first or pass a file.",
            config.cache_path.display()
        )
    })
}

pub fn run<W: Write>(writer: &mut W, args: &ParseArgs, config: &Config) -> Result<()> {
    let html = read_page(args.file.as_deref(), config)?;
    let parsed = parse_news(&html).context("failed to parse news page")?;

    let items: Vec<DayRecord> = match args.days {
        Some(days) => filter_last_n_days(&parsed.items, days),
        None => parsed.items,
    };

    for item in &items {
        let json = serde_json::to_string(item)?;
        // Stop quietly on a closed pipe (e.g. piped to `head`)
        if writeln!(writer, "{json}").is_err() {
            break;
        }
    }

    Ok(())
}

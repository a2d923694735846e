//! Status command for showing what the cached page contains.

use std::io::Write;

use anyhow::{Context, Result};
use si_core::{fingerprint, parse_news};

use crate::{Config, cache};

pub fn run<W: Write>(writer: &mut W, config: &Config) -> Result<()> {
    writeln!(writer, "Space Invaders news status")?;
    writeln!(writer, "Source: {}", config.source_url)?;
    writeln!(writer, "Cache:  {}", config.cache_path.display())?;

    let Some(html) = cache::load(&config.cache_path)? else {
        writeln!(writer, "No cached page.")?;
        return Ok(());
    };

    let parsed = parse_news(&html).context("failed to parse cached page")?;
    writeln!(writer, "Fingerprint: {}", fingerprint(&html))?;
    writeln!(writer, "Day entries: {}", parsed.items.len())?;
    match (parsed.items.first(), parsed.items.last()) {
        (Some(first), Some(last)) => {
            writeln!(writer, "Range:  {} .. {}", first.date, last.date)?;
        }
        _ => writeln!(writer, "Range:  (none)")?,
    }

    Ok(())
}

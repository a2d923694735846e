//! Run command: the full fetch → parse → render → publish pipeline.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use si_core::{has_changed, parse_news_at};
use si_feed::{HTML_FILE, MARKDOWN_FILE, RSS_FILE};

use crate::commands::render::publish;
use crate::git::{self, Repo};
use crate::{Config, RunArgs, cache};

/// Outcome of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the page differed from the cached copy.
    pub changed: bool,
    /// Day records parsed, or 0 when the run stopped early.
    pub records: usize,
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Whether a commit was made.
    pub committed: bool,
}

pub fn run(args: &RunArgs, config: &Config) -> Result<RunReport> {
    let client = si_fetch::Client::new(Duration::from_secs(config.request_timeout_secs))
        .context("failed to create HTTP client")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to initialize tokio runtime")?;
    let html = runtime
        .block_on(client.fetch_page(&config.source_url))
        .with_context(|| format!("failed to fetch {}", config.source_url))?;

    let publish_to_git = args.commit || config.publish_enabled();
    let repo = publish_to_git.then(Repo::default);
    process(&html, args.force, repo.as_ref(), config, Utc::now())
}

/// Runs everything after the fetch.
///
/// Stops early, writing nothing, when the page matches the cached copy and
/// `force` is off. Git failures are logged and do not fail the run.
pub fn process(
    html: &str,
    force: bool,
    repo: Option<&Repo>,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<RunReport> {
    let cached = cache::load(&config.cache_path)?;
    let changed = has_changed(html, cached.as_deref());
    if !changed && !force {
        tracing::info!("no changes detected");
        return Ok(RunReport {
            changed,
            records: 0,
            written: Vec::new(),
            committed: false,
        });
    }

    let parsed = parse_news_at(html, now).context("failed to parse news page")?;
    tracing::info!(records = parsed.items.len(), "parsed news page");

    let written = publish(&parsed.items, config, now)?;
    cache::store(&config.cache_path, html)?;

    let committed = match repo {
        Some(repo) => commit_outputs(repo, config, now),
        None => {
            tracing::debug!("git publishing disabled");
            false
        }
    };

    Ok(RunReport {
        changed,
        records: parsed.items.len(),
        written,
        committed,
    })
}

fn commit_outputs(repo: &Repo, config: &Config, now: DateTime<Utc>) -> bool {
    let paths = vec![
        config.cache_path.clone(),
        config.docs_dir.join(RSS_FILE),
        config.docs_dir.join(MARKDOWN_FILE),
        config.docs_dir.join(HTML_FILE),
    ];
    let message = git::commit_message(now.date_naive());

    let result = repo
        .configure_identity()
        .and_then(|()| repo.commit_and_push(&paths, &message));
    match result {
        Ok(committed) => committed,
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "failed to publish changes");
            false
        }
    }
}

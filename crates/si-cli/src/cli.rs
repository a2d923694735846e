//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Space Invaders news feed generator.
///
/// Fetches the invader-spotter news page, turns its French day-by-day notes
/// into typed events and publishes them as RSS, Markdown and HTML.
#[derive(Debug, Parser)]
#[command(name = "si-news", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch, parse, render and publish.
    Run(RunArgs),

    /// Parse a saved page and print day records as JSON lines.
    Parse(ParseArgs),

    /// Regenerate outputs from a saved page without fetching.
    Render(RenderArgs),

    /// Show the cached page and what it contains.
    Status,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Regenerate outputs even if the page is unchanged.
    #[arg(long)]
    pub force: bool,

    /// Commit and push the outputs.
    #[arg(long)]
    pub commit: bool,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// HTML file to parse (defaults to the cached page).
    pub file: Option<PathBuf>,

    /// Only print records within this many days of the latest one.
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// HTML file to render (defaults to the cached page).
    pub file: Option<PathBuf>,
}

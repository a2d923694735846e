use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use si_cli::commands::{parse, render, run, status};
use si_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so `parse` output stays clean JSONL
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let stdout = std::io::stdout();
    match &cli.command {
        Some(Commands::Run(args)) => {
            let config = load_config(cli.config.as_deref())?;
            let report = run::run(args, &config)?;
            let mut out = stdout.lock();
            if report.written.is_empty() {
                writeln!(out, "No changes detected.")?;
            } else {
                writeln!(out, "Published {} day entries", report.records)?;
                for path in &report.written {
                    writeln!(out, "- {}", path.display())?;
                }
                if report.committed {
                    writeln!(out, "Committed and pushed.")?;
                }
            }
        }
        Some(Commands::Parse(args)) => {
            let config = load_config(cli.config.as_deref())?;
            parse::run(&mut stdout.lock(), args, &config)?;
        }
        Some(Commands::Render(args)) => {
            let config = load_config(cli.config.as_deref())?;
            render::run(&mut stdout.lock(), args, &config)?;
        }
        Some(Commands::Status) => {
            let config = load_config(cli.config.as_deref())?;
            status::run(&mut stdout.lock(), &config)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

//! Publishing generated files through git.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};

const BOT_NAME: &str = "github-actions[bot]";
const BOT_EMAIL: &str = "github-actions[bot]@users.noreply.github.com";

/// Git invocations rooted at one working directory.
#[derive(Debug, Clone)]
pub struct Repo {
    workdir: PathBuf,
}

impl Repo {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Sets the commit identity used by CI.
    pub fn configure_identity(&self) -> Result<()> {
        self.git(&["config", "user.email", BOT_EMAIL])?;
        self.git(&["config", "user.name", BOT_NAME])?;
        tracing::debug!("git identity configured");
        Ok(())
    }

    /// Stages the given paths.
    pub fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        for path in paths {
            let path = path
                .to_str()
                .with_context(|| format!("non UTF-8 path: {}", path.display()))?;
            self.git(&["add", "--", path])?;
            tracing::debug!(path, "staged");
        }
        Ok(())
    }

    /// Commits staged changes.
    ///
    /// Returns `false` without committing when nothing is staged.
    pub fn commit(&self, message: &str) -> Result<bool> {
        let status = self
            .command(&["diff", "--cached", "--quiet"])
            .status()
            .context("failed to run git diff")?;
        if status.success() {
            tracing::info!("nothing to commit");
            return Ok(false);
        }

        self.git(&["commit", "-m", message])?;
        tracing::info!(message, "committed");
        Ok(true)
    }

    /// Pushes the current branch.
    pub fn push(&self) -> Result<()> {
        self.git(&["push"])?;
        tracing::info!("pushed");
        Ok(())
    }

    /// Stages, commits and, if a commit was made, pushes.
    pub fn commit_and_push(&self, paths: &[PathBuf], message: &str) -> Result<bool> {
        self.stage(paths)?;
        let committed = self.commit(message)?;
        if committed {
            self.push()?;
        }
        Ok(committed)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.workdir);
        command
    }

    fn git(&self, args: &[&str]) -> Result<Output> {
        let output = self
            .command(args)
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))?;
        if !output.status.success() {
            bail!(
                "git {} exited with status {}: {}",
                args.join(" "),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output)
    }
}

impl Default for Repo {
    fn default() -> Self {
        Self::new(Path::new("."))
    }
}

/// Commit message for a publishing run on `date`.
pub fn commit_message(date: chrono::NaiveDate) -> String {
    format!("Update Space Invaders news - {}", date.format("%Y-%m-%d"))
}

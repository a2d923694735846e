//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// News page to fetch.
    pub source_url: String,
    /// Public address of the generated site, used for feed links.
    pub site_url: String,
    /// Where the last fetched page is kept.
    pub cache_path: PathBuf,
    /// Directory receiving `feed.xml`, `NEWS.md` and `index.html`.
    pub docs_dir: PathBuf,
    /// Days of history published in the feed.
    pub window_days: u32,
    /// HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Commit and push outputs after a run.
    pub git_commit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: si_fetch::NEWS_URL.to_string(),
            site_url: "https://jfix.github.io/si-rss-generator".to_string(),
            cache_path: PathBuf::from("data").join("news-cache.html"),
            docs_dir: PathBuf::from("docs"),
            window_days: 90,
            request_timeout_secs: si_fetch::DEFAULT_TIMEOUT.as_secs(),
            git_commit: false,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (SI_*)
        figment = figment.merge(Env::prefixed("SI_"));

        figment.extract()
    }

    /// Whether a run should publish through git.
    ///
    /// Enabled by `git_commit` or by running under GitHub Actions.
    pub fn publish_enabled(&self) -> bool {
        self.git_commit || std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
    }
}

/// Returns the platform-specific config directory for si-news.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("si-news"))
}

//! HTTP fetching of the invader-spotter news page.
//!
//! The page is always requested fresh: every request carries no-cache
//! headers so intermediaries do not serve a stale copy.

use std::fmt;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, EXPIRES, HeaderMap, HeaderValue, PRAGMA};
use thiserror::Error;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Address of the news page.
pub const NEWS_URL: &str = "https://www.invader-spotter.art/news.php";
const USER_AGENT: &str = concat!("si-news/", env!("CARGO_PKG_VERSION"));

/// Fetch errors.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Server answered with a non-success status.
    #[error("failed to fetch {url}: status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// News page client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(no_cache_headers())
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { http })
    }

    /// Downloads the page at `url` and returns its body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching news page");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await?;
        tracing::info!(bytes = body.len(), "fetched news page");
        Ok(body)
    }
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-cache, no-store, must-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}

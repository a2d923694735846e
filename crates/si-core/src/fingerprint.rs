//! Content fingerprints for change detection.
//!
//! Pages are reduced to their news content before hashing, so that scripts,
//! nonces, cache-busting query strings and formatting-only edits do not
//! register as changes.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?</script>").unwrap());
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?</style>").unwrap());
static TIMESTAMP_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)data-timestamp=["'][^"']*["']"#).unwrap());
static CACHE_BUST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\?v=\d+").unwrap());
static NONCE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)nonce=["'][^"']*["']"#).unwrap());
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap());
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static INTER_TAG_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">\s+<").unwrap());

/// Returns the lowercase hex SHA-256 of the page's normalized news content.
pub fn fingerprint(html: &str) -> String {
    let normalized = normalize(&extract_news_content(html));
    let digest = Sha256::digest(normalized.as_bytes());
    format!("{digest:x}")
}

/// Reports whether `new` differs from the previously seen page.
///
/// A missing previous page always counts as a change.
pub fn has_changed(new: &str, old: Option<&str>) -> bool {
    let Some(old) = old else {
        tracing::debug!("no previous page, treating as changed");
        return true;
    };
    let new_hash = fingerprint(new);
    let old_hash = fingerprint(old);
    let changed = new_hash != old_hash;
    if changed {
        tracing::debug!(old = %old_hash, new = %new_hash, "content changed");
    } else {
        tracing::debug!(hash = %new_hash, "content unchanged");
    }
    changed
}

fn extract_news_content(html: &str) -> String {
    let content = SCRIPT_RE.replace_all(html, "");
    let content = STYLE_RE.replace_all(&content, "");
    let content = TIMESTAMP_ATTR_RE.replace_all(&content, "");
    let content = CACHE_BUST_RE.replace_all(&content, "");
    let content = NONCE_ATTR_RE.replace_all(&content, "");

    match BODY_RE.captures(&content) {
        Some(caps) => caps[1].to_string(),
        None => content.into_owned(),
    }
}

fn normalize(content: &str) -> String {
    let content = COMMENT_RE.replace_all(content, "");
    let content = INTER_TAG_WS_RE.replace_all(&content, "><");
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

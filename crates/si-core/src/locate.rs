//! Month section discovery.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static MONTH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[id^="mois"]"#).unwrap());

static MONTH_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^mois([0-9]{4})([0-9]{2})").unwrap());

/// Year and month encoded in a container identifier such as `mois202601`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthSection {
    pub year: i32,
    pub month: u32,
}

impl MonthSection {
    /// Parses a container identifier.
    ///
    /// Returns `None` when the identifier does not match or the month is
    /// outside `1..=12`.
    pub fn from_id(id: &str) -> Option<Self> {
        let caps = MONTH_ID_RE.captures(id)?;
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }
}

/// Yields every month container in document order.
pub fn month_sections(document: &Html) -> impl Iterator<Item = (MonthSection, ElementRef<'_>)> {
    document.select(&MONTH_SELECTOR).filter_map(|element| {
        let id = element.value().id()?;
        match MonthSection::from_id(id) {
            Some(section) => {
                tracing::debug!(year = section.year, month = section.month, "found month section");
                Some((section, element))
            }
            None => {
                tracing::debug!(id, "skipping container with unrecognized id");
                None
            }
        }
    })
}

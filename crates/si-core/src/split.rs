//! Day fragment extraction within a month section.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

static FRAGMENT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

/// Day marker: one or two digits, a colon (ASCII or full-width), then the body.
static DAY_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2})\s*[:：]\s*(.+)$").unwrap());

/// A paragraph that starts with a day marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayFragment {
    /// Day of month as written; not checked against the month length.
    pub day: u32,
    pub body: String,
}

impl DayFragment {
    /// Splits fragment text into day number and body.
    ///
    /// Whitespace runs are collapsed to a single space first, so paragraphs
    /// that wrap across lines still match.
    pub fn parse(text: &str) -> Option<Self> {
        let text = collapse_whitespace(text);
        if text.is_empty() {
            return None;
        }
        let Some(caps) = DAY_MARKER_RE.captures(&text) else {
            tracing::trace!(text = %text, "no day marker");
            return None;
        };
        let day = caps[1].parse().ok()?;
        Some(Self {
            day,
            body: caps[2].to_string(),
        })
    }
}

/// Yields the day fragments of one month container, in document order.
pub fn day_fragments<'a>(container: ElementRef<'a>) -> impl Iterator<Item = DayFragment> + 'a {
    container.select(&FRAGMENT_SELECTOR).filter_map(|element| {
        let text: String = element.text().collect();
        DayFragment::parse(&text)
    })
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

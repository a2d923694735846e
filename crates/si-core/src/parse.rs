//! News page parsing: month sections → day fragments → day records.

use chrono::{DateTime, Utc};
use scraper::Html;
use thiserror::Error;

use crate::classify::classify_fragment;
use crate::locate::month_sections;
use crate::record::{DayRecord, ParsedNews};
use crate::split::day_fragments;
use crate::timeline::sort_chronologically;

/// Parser errors.
///
/// Unrecognized containers, paragraphs without a day marker and paragraphs
/// without identifiers are skipped, never reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no content to parse.
    #[error("news page is empty")]
    EmptyDocument,
}

/// Yields day records in document order.
///
/// Lazy and restartable: each call walks the document afresh.
pub fn day_records(document: &Html) -> impl Iterator<Item = DayRecord> + '_ {
    month_sections(document).flat_map(|(section, container)| {
        day_fragments(container).filter_map(move |fragment| {
            let events = classify_fragment(&fragment.body);
            DayRecord::new(
                section.year,
                section.month,
                fragment.day,
                events,
                fragment.body,
            )
        })
    })
}

/// Parses a news page, stamping the result with the current time.
pub fn parse_news(html: &str) -> Result<ParsedNews, ParseError> {
    parse_news_at(html, Utc::now())
}

/// Parses a news page into day records sorted oldest first.
pub fn parse_news_at(html: &str, fetched_at: DateTime<Utc>) -> Result<ParsedNews, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        tracing::trace!(count = document.errors.len(), "recovered from html errors");
    }

    let mut items: Vec<DayRecord> = day_records(&document).collect();
    sort_chronologically(&mut items);
    tracing::debug!(records = items.len(), "parsed news page");

    Ok(ParsedNews { items, fetched_at })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::action::ActionType;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>News</title></head>
<body>
  <div id="mois202602">
    <p>5 : Ajout de PA_1500 et PA_1501.</p>
    <p>1 : Réactivation de LDN_12</p>
  </div>
  <div id="mois202601">
    <p>Janvier</p>
    <p>31 : Destruction et dégradation de AB_1</p>
    <p>  : no leading number PA_9</p>
    <p>20 : Rien de neuf aujourd'hui.</p>
    <p>12 : CD_99 photographié</p>
  </div>
  <div id="archives">
    <p>3 : Ajout de ZZ_1</p>
  </div>
</body>
</html>"#;

    fn fixed_time() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-02-06T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_and_sorts_records() {
        let parsed = parse_news_at(PAGE, fixed_time()).unwrap();
        let dates: Vec<_> = parsed.items.iter().map(|item| item.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2026-01-12", "2026-01-31", "2026-02-01", "2026-02-05"]
        );
        assert_eq!(parsed.fetched_at, fixed_time());
    }

    #[test]
    fn records_carry_events_and_body() {
        let parsed = parse_news_at(PAGE, fixed_time()).unwrap();
        let feb5 = parsed.items.last().unwrap();
        assert_eq!((feb5.year, feb5.month, feb5.day), (2026, 2, 5));
        assert_eq!(feb5.raw_content, "Ajout de PA_1500 et PA_1501.");
        let ids: Vec<_> = feb5.events.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, vec!["PA_1500", "PA_1501"]);
        assert!(feb5.events.iter().all(|event| event.action == ActionType::New));
    }

    #[test]
    fn classification_per_fragment() {
        let parsed = parse_news_at(PAGE, fixed_time()).unwrap();
        let actions: Vec<_> = parsed
            .items
            .iter()
            .map(|item| item.events[0].action)
            .collect();
        assert_eq!(
            actions,
            vec![
                ActionType::Unknown,
                ActionType::Destruction,
                ActionType::Reactivated,
                ActionType::New,
            ]
        );
    }

    #[test]
    fn every_record_has_events_and_canonical_date() {
        let parsed = parse_news_at(PAGE, fixed_time()).unwrap();
        for item in &parsed.items {
            assert!(!item.events.is_empty());
            assert_eq!(
                item.date,
                format!("{}-{:02}-{:02}", item.year, item.month, item.day)
            );
        }
    }

    #[test]
    fn parsing_is_idempotent() {
        let first = parse_news(PAGE).unwrap();
        let second = parse_news(PAGE).unwrap();
        assert_eq!(first.items, second.items);
    }

    #[test]
    fn lazy_records_restart() {
        let document = Html::parse_document(PAGE);
        let first: Vec<_> = day_records(&document).collect();
        let second: Vec<_> = day_records(&document).collect();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        assert_eq!(first[0].date, "2026-02-05");
    }

    #[test]
    fn page_without_sections_is_empty_not_error() {
        let parsed = parse_news_at("<html><body><p>1 : PA_1</p></body></html>", fixed_time())
            .unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn blank_input_is_an_error() {
        assert_eq!(
            parse_news_at("  \n ", fixed_time()).unwrap_err(),
            ParseError::EmptyDocument
        );
    }
}

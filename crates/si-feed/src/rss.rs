//! RSS 2.0 feed rendering.
//!
//! One `<item>` per day record, newest first. The item description is an
//! HTML fragment (escaped into the XML) listing the day's events by type,
//! followed by the original French text.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};
use si_core::DayRecord;

use crate::group::group_events;
use crate::markup::escape;

pub const FEED_TITLE: &str = "Space Invaders News";
pub const FEED_DESCRIPTION: &str = "Latest updates on Space Invaders creations, destructions, and damage. Data sourced from invader-spotter.art - a community project tracking Space Invaders worldwide.";
pub const SOURCE_SITE: &str = "https://www.invader-spotter.art";
const FAVICON: &str = "https://www.invader-spotter.art/favicon.ico";
const GENERATOR: &str = "SI RSS Generator";
const COPYRIGHT: &str = "Data from invader-spotter.art - SI RSS Generator";
const AUTHOR: &str = "invader-spotter.art";
/// Minutes readers may cache the feed.
const TTL_MINUTES: u32 = 120;

/// Channel-level settings.
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Public address of the generated site, without a trailing slash.
    pub site_url: String,
}

impl FeedOptions {
    pub fn new(site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    fn feed_url(&self) -> String {
        format!("{}/feed.xml", self.site_url)
    }
}

/// Renders the feed.
///
/// `items` is expected oldest first, as produced by the parser; the feed
/// lists them newest first.
pub fn render_rss(items: &[DayRecord], options: &FeedOptions, generated_at: DateTime<Utc>) -> String {
    let site = escape(&options.site_url);
    let mut output = String::new();

    writeln!(output, r#"<?xml version="1.0" encoding="utf-8"?>"#).unwrap();
    writeln!(
        output,
        r#"<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:atom="http://www.w3.org/2005/Atom">"#
    )
    .unwrap();
    writeln!(output, "  <channel>").unwrap();
    writeln!(output, "    <title>{FEED_TITLE}</title>").unwrap();
    writeln!(output, "    <link>{site}</link>").unwrap();
    writeln!(output, "    <description>{}</description>", escape(FEED_DESCRIPTION)).unwrap();
    writeln!(output, "    <lastBuildDate>{}</lastBuildDate>", generated_at.to_rfc2822()).unwrap();
    writeln!(output, "    <docs>https://validator.w3.org/feed/docs/rss2.html</docs>").unwrap();
    writeln!(output, "    <generator>{GENERATOR}</generator>").unwrap();
    writeln!(output, "    <language>en</language>").unwrap();
    writeln!(output, "    <ttl>{TTL_MINUTES}</ttl>").unwrap();
    writeln!(output, "    <image>").unwrap();
    writeln!(output, "      <title>{FEED_TITLE}</title>").unwrap();
    writeln!(output, "      <url>{FAVICON}</url>").unwrap();
    writeln!(output, "      <link>{site}</link>").unwrap();
    writeln!(output, "    </image>").unwrap();
    writeln!(output, "    <copyright>{COPYRIGHT}</copyright>").unwrap();
    writeln!(
        output,
        r#"    <atom:link href="{}" rel="self" type="application/rss+xml"/>"#,
        escape(&options.feed_url())
    )
    .unwrap();

    for item in items.iter().rev() {
        write_item(&mut output, item, &site);
    }

    writeln!(output, "  </channel>").unwrap();
    writeln!(output, "</rss>").unwrap();

    tracing::debug!(entries = items.len(), "rendered rss feed");
    output
}

fn write_item(output: &mut String, item: &DayRecord, site: &str) {
    let date = item.calendar_date();
    let title = date.map_or_else(|| item.date.clone(), long_date);

    writeln!(output, "    <item>").unwrap();
    writeln!(output, "      <title>{}</title>", escape(&title)).unwrap();
    writeln!(output, "      <link>{site}/#{}</link>", item.date).unwrap();
    writeln!(output, r#"      <guid isPermaLink="false">{site}#{}</guid>"#, item.date).unwrap();
    if let Some(date) = date {
        writeln!(output, "      <pubDate>{}</pubDate>", midnight_utc(date).to_rfc2822()).unwrap();
    }
    writeln!(
        output,
        "      <description>{}</description>",
        escape(&describe(item))
    )
    .unwrap();
    writeln!(output, "      <dc:creator>{AUTHOR}</dc:creator>").unwrap();
    writeln!(output, "    </item>").unwrap();
}

/// HTML summary of a day: events grouped by type, then the original text.
pub fn describe(item: &DayRecord) -> String {
    let mut html = String::from("<ul>");
    for group in group_events(&item.events) {
        write!(
            html,
            "<li>{} <strong>{}</strong>: {}</li>",
            group.action.emoji(),
            group.action.feed_label(),
            group.ids.join(", ")
        )
        .unwrap();
    }
    html.push_str("</ul>");
    write!(
        html,
        "<p><strong>Original:</strong> <em>{}</em></p>",
        escape(&item.raw_content)
    )
    .unwrap();
    html
}

/// Long English date, e.g. `Monday, March 2, 2026`.
fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    use si_core::{ActionType, InvaderEvent};

    fn record(month: u32, day: u32, events: Vec<InvaderEvent>, raw: &str) -> DayRecord {
        DayRecord::new(2026, month, day, events, raw).unwrap()
    }

    fn generated_at() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn sample() -> Vec<DayRecord> {
        vec![
            record(
                2,
                27,
                vec![InvaderEvent::new("PA_1", ActionType::Destruction)],
                "Destruction de PA_1",
            ),
            record(
                3,
                2,
                vec![
                    InvaderEvent::new("LDN_12", ActionType::New),
                    InvaderEvent::new("LDN_13", ActionType::New),
                ],
                "Ajout de LDN_12 & LDN_13 <bis>",
            ),
        ]
    }

    #[test]
    fn describe_groups_ids_and_escapes_original() {
        let html = describe(&sample()[1]);
        assert_eq!(
            html,
            "<ul><li>🟢 <strong>new</strong>: LDN_12, LDN_13</li></ul>\
             <p><strong>Original:</strong> <em>Ajout de LDN_12 &amp; LDN_13 &lt;bis&gt;</em></p>"
        );
    }

    #[test]
    fn describe_uses_spaced_label() {
        let item = record(
            1,
            4,
            vec![InvaderEvent::new("NY_7", ActionType::StatusChange)],
            "Changement de statut",
        );
        assert!(describe(&item).contains("⚪ <strong>status change</strong>: NY_7"));
    }

    #[test]
    fn items_are_newest_first() {
        let feed = render_rss(&sample(), &FeedOptions::new("https://example.org/si/"), generated_at());
        let newest = feed.find("Monday, March 2, 2026").unwrap();
        let oldest = feed.find("Friday, February 27, 2026").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn item_links_and_dates() {
        let feed = render_rss(&sample(), &FeedOptions::new("https://example.org/si/"), generated_at());
        assert!(feed.contains("<link>https://example.org/si/#2026-03-02</link>"));
        assert!(feed.contains(r#"<guid isPermaLink="false">https://example.org/si#2026-03-02</guid>"#));
        assert!(feed.contains("<pubDate>Mon, 2 Mar 2026 00:00:00 +0000</pubDate>"));
        assert!(feed.contains("<dc:creator>invader-spotter.art</dc:creator>"));
    }

    #[test]
    fn channel_metadata() {
        let feed = render_rss(&[], &FeedOptions::new("https://example.org/si"), generated_at());
        assert!(feed.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(feed.contains("<title>Space Invaders News</title>"));
        assert!(feed.contains("<ttl>120</ttl>"));
        assert!(feed.contains("<lastBuildDate>Mon, 2 Mar 2026 10:00:00 +0000</lastBuildDate>"));
        assert!(feed.contains(r#"<atom:link href="https://example.org/si/feed.xml" rel="self""#));
        assert!(!feed.contains("<item>"));
    }

    #[test]
    fn description_is_xml_escaped() {
        let feed = render_rss(&sample(), &FeedOptions::new("https://example.org"), generated_at());
        assert!(feed.contains("<description>&lt;ul&gt;&lt;li&gt;🔴 &lt;strong&gt;destruction"));
        assert!(feed.contains("LDN_12 &amp;amp; LDN_13"));
    }
}

//! Standalone HTML page mirroring the Markdown digest.

use std::fmt::Write;

use si_core::DayRecord;

use crate::group::{group_by_month, group_events, month_name};
use crate::markdown::tag_url;
use crate::markup::escape;
use crate::rss::{FEED_TITLE, SOURCE_SITE};

const STYLE: &str = r"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
      line-height: 1.6;
      color: #333;
      background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%);
      min-height: 100vh;
      padding: 20px;
    }
    .container {
      max-width: 1200px;
      margin: 0 auto;
      background: white;
      border-radius: 8px;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      overflow: hidden;
    }
    .content { padding: 40px; }
    h1 { font-size: 2.5em; margin-bottom: 10px; color: #222; }
    h2 {
      font-size: 1.8em;
      margin-top: 40px;
      margin-bottom: 20px;
      color: #333;
      border-bottom: 2px solid #0066cc;
      padding-bottom: 10px;
    }
    h3 { font-size: 1.3em; margin-top: 25px; margin-bottom: 15px; color: #444; }
    ul { list-style: none; padding: 0; }
    li { margin: 8px 0; padding-left: 20px; position: relative; }
    li:before { content: '•'; position: absolute; left: 0; color: #0066cc; font-weight: bold; }
    strong { color: #222; font-weight: 600; }
    em { color: #666; font-style: italic; }
    a { color: #0066cc; text-decoration: none; }
    a:hover { text-decoration: underline; }
    .rss-link {
      display: inline-block;
      margin-bottom: 20px;
      padding: 10px 15px;
      background: #ff9800;
      color: white;
      border-radius: 4px;
      font-weight: 600;
    }
    .rss-link:hover { background: #e68900; text-decoration: none; }
    .source {
      margin: 15px 0;
      padding: 10px;
      background: #f0f8ff;
      border-left: 3px solid #0066cc;
      font-style: italic;
      color: #555;
    }
    @media (max-width: 768px) {
      .content { padding: 20px; }
      h1 { font-size: 1.8em; }
      h2 { font-size: 1.3em; }
    }
";

/// Renders the full page.
pub fn render_html(items: &[DayRecord]) -> String {
    let mut output = String::new();
    writeln!(output, "<!DOCTYPE html>").unwrap();
    writeln!(output, r#"<html lang="en">"#).unwrap();
    writeln!(output, "<head>").unwrap();
    writeln!(output, r#"  <meta charset="UTF-8">"#).unwrap();
    writeln!(
        output,
        r#"  <meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )
    .unwrap();
    writeln!(output, "  <title>{FEED_TITLE}</title>").unwrap();
    writeln!(
        output,
        r#"  <link rel="alternate" type="application/rss+xml" title="{FEED_TITLE}" href="./feed.xml">"#
    )
    .unwrap();
    writeln!(output, "  <style>{STYLE}  </style>").unwrap();
    writeln!(output, "</head>").unwrap();
    writeln!(output, "<body>").unwrap();
    writeln!(output, r#"  <div class="container">"#).unwrap();
    writeln!(output, r#"    <div class="content">"#).unwrap();
    writeln!(
        output,
        r#"      <a href="./feed.xml" class="rss-link">📡 Subscribe to RSS Feed</a>"#
    )
    .unwrap();
    writeln!(
        output,
        r#"      <p class="source">📍 Data sourced from <a href="{SOURCE_SITE}" target="_blank">invader-spotter.art</a> - a community project tracking Space Invaders worldwide.</p>"#
    )
    .unwrap();
    write_body(&mut output, items);
    writeln!(output, "    </div>").unwrap();
    writeln!(output, "  </div>").unwrap();
    writeln!(output, "</body>").unwrap();
    writeln!(output, "</html>").unwrap();
    output
}

fn write_body(output: &mut String, items: &[DayRecord]) {
    writeln!(output, "<h1>{FEED_TITLE}</h1>").unwrap();
    if items.is_empty() {
        writeln!(output, "<p>No entries found.</p>").unwrap();
        return;
    }

    for year in group_by_month(items) {
        writeln!(output, "<h2>{}</h2>", year.year).unwrap();
        for month in year.months {
            writeln!(output, "<h3>{}</h3>", month_name(month.month)).unwrap();
            writeln!(output, "<ul>").unwrap();
            for day in month.days {
                let events: Vec<String> = group_events(&day.events)
                    .iter()
                    .map(|group| {
                        let links: Vec<String> = group
                            .ids
                            .iter()
                            .map(|id| {
                                format!(r#"<a href="{}">{}</a>"#, escape(&tag_url(id)), escape(id))
                            })
                            .collect();
                        format!(
                            "{} <strong>{}</strong>: {}",
                            group.action.emoji(),
                            group.action.label(),
                            links.join(", ")
                        )
                    })
                    .collect();
                writeln!(
                    output,
                    r#"<li id="{}"><strong>{} {} {}</strong> — {}</li>"#,
                    day.date,
                    day.day,
                    month_name(day.month),
                    day.year,
                    events.join(" • ")
                )
                .unwrap();
            }
            writeln!(output, "</ul>").unwrap();
        }
    }
}

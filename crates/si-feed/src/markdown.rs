//! Markdown digest of all day records, grouped by year and month.

use std::fmt::Write;

use si_core::DayRecord;

use crate::group::{EventGroup, group_by_month, group_events, month_name};

const ATTRIBUTION: &str = "_Data sourced from [invader-spotter.art](https://www.invader-spotter.art) - a community project tracking Space Invaders worldwide._";

/// Instagram tag page for an invader.
pub fn tag_url(id: &str) -> String {
    format!("https://www.instagram.com/explore/tags/{id}")
}

/// Renders the digest, newest year, month and day first.
pub fn render_markdown(items: &[DayRecord]) -> String {
    if items.is_empty() {
        return "# Space Invaders News\n\nNo entries found.\n".to_string();
    }

    let mut output = String::new();
    writeln!(output, "# Space Invaders News\n").unwrap();
    writeln!(output, "{ATTRIBUTION}\n").unwrap();

    for year in group_by_month(items) {
        writeln!(output, "## {}\n", year.year).unwrap();
        for month in year.months {
            writeln!(output, "### {}\n", month_name(month.month)).unwrap();
            for day in month.days {
                let events: Vec<String> = group_events(&day.events).iter().map(event_line).collect();
                writeln!(
                    output,
                    "- **{} {} {}** — {}",
                    day.day,
                    month_name(day.month),
                    day.year,
                    events.join(" • ")
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }
    }

    tracing::debug!(entries = items.len(), "rendered markdown");
    output
}

fn event_line(group: &EventGroup<'_>) -> String {
    let links: Vec<String> = group
        .ids
        .iter()
        .map(|id| format!("[{id}]({})", tag_url(id)))
        .collect();
    format!(
        "{} **{}**: {}",
        group.action.emoji(),
        group.action.label(),
        links.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use si_core::{ActionType, InvaderEvent};

    #[test]
    fn empty_digest() {
        assert_eq!(
            render_markdown(&[]),
            "# Space Invaders News\n\nNo entries found.\n"
        );
    }

    #[test]
    fn digest_is_grouped_newest_first() {
        let items = vec![
            DayRecord::new(
                2025,
                12,
                30,
                vec![InvaderEvent::new("PA_1", ActionType::Damage)],
                "Dégradation de PA_1",
            )
            .unwrap(),
            DayRecord::new(
                2026,
                1,
                3,
                vec![
                    InvaderEvent::new("LDN_12", ActionType::StatusChange),
                    InvaderEvent::new("LDN_13", ActionType::StatusChange),
                ],
                "Changement de statut",
            )
            .unwrap(),
            DayRecord::new(
                2026,
                1,
                9,
                vec![InvaderEvent::new("NY_7", ActionType::Destruction)],
                "Destruction de NY_7",
            )
            .unwrap(),
        ];

        assert_snapshot!(render_markdown(&items).trim_end(), @r"
        # Space Invaders News

        _Data sourced from [invader-spotter.art](https://www.invader-spotter.art) - a community project tracking Space Invaders worldwide._

        ## 2026

        ### January

        - **9 January 2026** — 🔴 **Destruction**: [NY_7](https://www.instagram.com/explore/tags/NY_7)
        - **3 January 2026** — ⚪ **Status Change**: [LDN_12](https://www.instagram.com/explore/tags/LDN_12), [LDN_13](https://www.instagram.com/explore/tags/LDN_13)

        ## 2025

        ### December

        - **30 December 2025** — 🟡 **Damage**: [PA_1](https://www.instagram.com/explore/tags/PA_1)
        ");
    }
}

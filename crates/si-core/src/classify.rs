//! Identifier extraction and action classification for a day fragment.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::action::ActionType;
use crate::record::InvaderEvent;

static INVADER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,}_[0-9]+").unwrap());

/// Extracts invader identifiers in first-seen order, without duplicates.
pub fn extract_ids(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    INVADER_ID_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Builds the events reported by a fragment body.
///
/// Every identifier shares the action inferred for the whole body. Returns
/// an empty list when the body contains no identifier.
pub fn classify_fragment(body: &str) -> Vec<InvaderEvent> {
    let ids = extract_ids(body);
    if ids.is_empty() {
        return Vec::new();
    }
    let action = ActionType::from_text(body);
    ids.into_iter()
        .map(|id| InvaderEvent::new(id, action))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids_in_order() {
        assert_eq!(
            extract_ids("Ajout de PA_1500, LDN_12 et NY_7."),
            vec!["PA_1500", "LDN_12", "NY_7"]
        );
    }

    #[test]
    fn deduplicates_keeping_first_occurrence() {
        assert_eq!(extract_ids("AB_1 foo AB_1 bar AB_1"), vec!["AB_1"]);
        assert_eq!(extract_ids("CD_2 AB_1 CD_2"), vec!["CD_2", "AB_1"]);
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert_eq!(extract_ids("pa_1 Pa_2 P_3 PA_ PA_4"), vec!["PA_4"]);
    }

    #[test]
    fn one_event_per_unique_id() {
        let events = classify_fragment("AB_1 foo AB_1 bar AB_1");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "AB_1");
    }

    #[test]
    fn all_ids_share_the_fragment_action() {
        let events = classify_fragment("Destruction de PA_1 et ajout de PA_2");
        assert_eq!(events.len(), 2);
        assert!(
            events
                .iter()
                .all(|event| event.action == ActionType::Destruction)
        );
    }

    #[test]
    fn destruction_outranks_damage() {
        let events = classify_fragment("Destruction et dégradation de AB_1");
        assert_eq!(events, vec![InvaderEvent::new("AB_1", ActionType::Destruction)]);
    }

    #[test]
    fn unrecognized_text_is_unknown_with_neutral_marker() {
        let events = classify_fragment("CD_99 photographié hier");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, ActionType::Unknown);
        assert_eq!(events[0].emoji, "⚪");
    }

    #[test]
    fn no_ids_no_events() {
        assert!(classify_fragment("Destruction massive à Paris").is_empty());
    }
}

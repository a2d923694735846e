//! Chronological ordering and trailing-window selection of day records.

use chrono::Days;

use crate::record::DayRecord;

/// Sorts records oldest first by `(year, month, day)`.
///
/// The sort is stable: records sharing a date keep their input order.
pub fn sort_chronologically(items: &mut [DayRecord]) {
    items.sort_by_key(DayRecord::key);
}

/// Keeps the records dated within `days` days of the latest record.
///
/// The anchor is the calendar date of the last record and the cutoff is the
/// anchor minus `days`; records on or after the cutoff are kept.
///
/// `items` must already be sorted oldest first (see [`sort_chronologically`]);
/// the result is unspecified otherwise.
pub fn filter_last_n_days(items: &[DayRecord], days: u32) -> Vec<DayRecord> {
    let Some(anchor) = items.last().and_then(DayRecord::calendar_date) else {
        return Vec::new();
    };
    let Some(cutoff) = anchor.checked_sub_days(Days::new(u64::from(days))) else {
        return items.to_vec();
    };

    items
        .iter()
        .filter(|item| item.calendar_date().is_some_and(|date| date >= cutoff))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Datelike, NaiveDate};

    use crate::action::ActionType;
    use crate::record::InvaderEvent;

    fn record(year: i32, month: u32, day: u32, id: &str) -> DayRecord {
        DayRecord::new(
            year,
            month,
            day,
            vec![InvaderEvent::new(id, ActionType::New)],
            id,
        )
        .unwrap()
    }

    fn daily(start: NaiveDate, end: NaiveDate) -> Vec<DayRecord> {
        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| record(date.year(), date.month(), date.day(), "PA_1"))
            .collect()
    }

    #[test]
    fn sorts_by_year_month_day() {
        let mut items = vec![
            record(2026, 1, 2, "A_1"),
            record(2025, 12, 31, "B_1"),
            record(2026, 1, 10, "C_1"),
            record(2026, 1, 1, "D_1"),
        ];
        sort_chronologically(&mut items);
        let dates: Vec<_> = items.iter().map(|item| item.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2025-12-31", "2026-01-01", "2026-01-02", "2026-01-10"]
        );
    }

    #[test]
    fn sort_keeps_input_order_for_equal_dates() {
        let mut items = vec![
            record(2026, 1, 2, "SECOND_1"),
            record(2026, 1, 1, "FIRST_1"),
            record(2026, 1, 2, "THIRD_1"),
        ];
        sort_chronologically(&mut items);
        let ids: Vec<_> = items.iter().map(|item| item.events[0].id.as_str()).collect();
        assert_eq!(ids, vec!["FIRST_1", "SECOND_1", "THIRD_1"]);
    }

    #[test]
    fn filter_keeps_trailing_window() {
        let items = daily(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        );
        let kept = filter_last_n_days(&items, 30);
        let dates: Vec<_> = kept.iter().map(|item| item.date.as_str()).collect();

        assert!(!dates.contains(&"2026-01-01"));
        assert!(dates.contains(&"2026-02-05"));
        assert!(dates.contains(&"2026-03-01"));
        assert_eq!(dates.first(), Some(&"2026-01-30"));
        assert_eq!(kept.len(), 31);
    }

    #[test]
    fn filter_cutoff_is_inclusive() {
        let items = vec![record(2026, 1, 1, "A_1"), record(2026, 1, 31, "B_1")];
        assert_eq!(filter_last_n_days(&items, 30).len(), 2);
        assert_eq!(filter_last_n_days(&items, 29).len(), 1);
    }

    #[test]
    fn filter_zero_days_keeps_latest_date_only() {
        let items = vec![
            record(2026, 1, 1, "A_1"),
            record(2026, 1, 2, "B_1"),
            record(2026, 1, 2, "C_1"),
        ];
        assert_eq!(filter_last_n_days(&items, 0).len(), 2);
    }

    #[test]
    fn filter_empty_input() {
        assert!(filter_last_n_days(&[], 90).is_empty());
    }

    #[test]
    fn filter_crosses_year_boundary() {
        let items = vec![
            record(2025, 11, 30, "A_1"),
            record(2025, 12, 20, "B_1"),
            record(2026, 1, 5, "C_1"),
        ];
        let kept = filter_last_n_days(&items, 20);
        let dates: Vec<_> = kept.iter().map(|item| item.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-12-20", "2026-01-05"]);
    }
}

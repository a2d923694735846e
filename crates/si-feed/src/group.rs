//! Grouping helpers shared by the renderers.

use std::collections::BTreeMap;

use si_core::{ActionType, DayRecord, InvaderEvent};

/// Identifiers of one action type within a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup<'a> {
    pub action: ActionType,
    pub ids: Vec<&'a str>,
}

/// Days of one month, newest first.
#[derive(Debug)]
pub struct MonthGroup<'a> {
    pub month: u32,
    pub days: Vec<&'a DayRecord>,
}

/// Months of one year, newest first.
#[derive(Debug)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub months: Vec<MonthGroup<'a>>,
}

/// Groups events by action type, in order of each type's first appearance.
pub fn group_events(events: &[InvaderEvent]) -> Vec<EventGroup<'_>> {
    let mut groups: Vec<EventGroup<'_>> = Vec::new();
    for event in events {
        match groups.iter_mut().find(|group| group.action == event.action) {
            Some(group) => group.ids.push(event.id.as_str()),
            None => groups.push(EventGroup {
                action: event.action,
                ids: vec![event.id.as_str()],
            }),
        }
    }
    groups
}

/// Groups records by year and month, newest first at every level.
///
/// Records sharing a day keep their input order.
pub fn group_by_month(items: &[DayRecord]) -> Vec<YearGroup<'_>> {
    let mut by_year: BTreeMap<i32, BTreeMap<u32, Vec<&DayRecord>>> = BTreeMap::new();
    for item in items {
        by_year
            .entry(item.year)
            .or_default()
            .entry(item.month)
            .or_default()
            .push(item);
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, months)| YearGroup {
            year,
            months: months
                .into_iter()
                .rev()
                .map(|(month, mut days)| {
                    days.sort_by(|a, b| b.day.cmp(&a.day));
                    MonthGroup { month, days }
                })
                .collect(),
        })
        .collect()
}

/// English month name, or `Unknown` outside `1..=12`.
pub const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

//! Day-level news records.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::action::ActionType;

/// One identifier reported in a day fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvaderEvent {
    /// Invader identifier, e.g. `PA_1234`.
    pub id: String,
    /// Action inferred for the whole fragment.
    #[serde(rename = "type")]
    pub action: ActionType,
    /// Marker for `action`.
    pub emoji: String,
}

impl InvaderEvent {
    pub fn new(id: impl Into<String>, action: ActionType) -> Self {
        Self {
            id: id.into(),
            action,
            emoji: action.emoji().to_string(),
        }
    }
}

/// Everything reported for one day of one month section.
///
/// `events` is never empty for records produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// `YYYY-MM-DD`, built from the literal integers.
    pub date: String,
    pub events: Vec<InvaderEvent>,
    /// Body text of the fragment, after the day marker.
    pub raw_content: String,
}

impl DayRecord {
    /// Assembles a record, or `None` when there are no events.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        events: Vec<InvaderEvent>,
        raw_content: impl Into<String>,
    ) -> Option<Self> {
        if events.is_empty() {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            date: canonical_date(year, month, day),
            events,
            raw_content: raw_content.into(),
        })
    }

    /// Sort key: the literal `(year, month, day)` triple.
    pub const fn key(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// Resolves the record to a calendar date.
    ///
    /// Day numbers past the end of the month roll over into the next month,
    /// and day 0 is the last day of the previous month. Returns `None` only
    /// when the month is out of range.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        match self.day {
            0 => first.checked_sub_days(Days::new(1)),
            day => first.checked_add_days(Days::new(u64::from(day - 1))),
        }
    }
}

/// Formats `(year, month, day)` as `YYYY-MM-DD`, zero-padding month and day.
pub fn canonical_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// Result of parsing one news page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedNews {
    /// Day records, oldest first.
    pub items: Vec<DayRecord>,
    pub fetched_at: DateTime<Utc>,
}

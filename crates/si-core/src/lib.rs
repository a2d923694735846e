//! Core domain logic for the Space Invaders news feed.
//!
//! This crate contains:
//! - Parsing: month sections, day fragments, identifier extraction and
//!   keyword classification of the invader-spotter news page
//! - Timeline: chronological ordering and trailing-window filtering
//! - Fingerprints: content hashing for change detection

pub mod action;
mod classify;
pub mod fingerprint;
mod locate;
mod parse;
pub mod record;
mod split;
mod timeline;

pub use action::{ActionType, UnknownActionType};
pub use classify::{classify_fragment, extract_ids};
pub use fingerprint::{fingerprint, has_changed};
pub use locate::{MonthSection, month_sections};
pub use parse::{ParseError, day_records, parse_news, parse_news_at};
pub use record::{DayRecord, InvaderEvent, ParsedNews, canonical_date};
pub use split::{DayFragment, day_fragments};
pub use timeline::{filter_last_n_days, sort_chronologically};

/// Re-exported so callers can build documents for [`day_records`].
pub use scraper::Html;

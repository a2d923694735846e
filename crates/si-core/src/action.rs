//! Action type enum as the single source of truth for update kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The classified nature of a day's update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Destruction,
    Damage,
    New,
    Reactivated,
    StatusChange,
    Unknown,
}

/// Keywords tested against the lower-cased fragment body, in priority order.
///
/// The first keyword found anywhere in the body decides the action type for
/// every identifier in the fragment.
pub const KEYWORDS: &[(&str, ActionType)] = &[
    ("destruction", ActionType::Destruction),
    ("dégradation", ActionType::Damage),
    ("ajout", ActionType::New),
    ("réactivation", ActionType::Reactivated),
    ("changement de statut", ActionType::StatusChange),
    ("changement", ActionType::StatusChange),
];

impl ActionType {
    /// All variants, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Destruction,
        Self::Damage,
        Self::New,
        Self::Reactivated,
        Self::StatusChange,
        Self::Unknown,
    ];

    /// Classifies free text by keyword presence.
    ///
    /// The text is lower-cased before matching. Returns [`ActionType::Unknown`]
    /// when no keyword is present.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map_or(Self::Unknown, |&(_, action)| action)
    }

    /// Canonical snake_case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Destruction => "destruction",
            Self::Damage => "damage",
            Self::New => "new",
            Self::Reactivated => "reactivated",
            Self::StatusChange => "status_change",
            Self::Unknown => "unknown",
        }
    }

    /// Colour marker shown next to events of this type.
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Destruction => "🔴",
            Self::Damage => "🟡",
            Self::New | Self::Reactivated => "🟢",
            Self::StatusChange | Self::Unknown => "⚪",
        }
    }

    /// Title-cased label, e.g. `Status Change`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Destruction => "Destruction",
            Self::Damage => "Damage",
            Self::New => "New",
            Self::Reactivated => "Reactivated",
            Self::StatusChange => "Status Change",
            Self::Unknown => "Unknown",
        }
    }

    /// Lower-case label with spaces, e.g. `status change`.
    #[must_use]
    pub const fn feed_label(&self) -> &'static str {
        match self {
            Self::StatusChange => "status change",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destruction" => Ok(Self::Destruction),
            "damage" => Ok(Self::Damage),
            "new" => Ok(Self::New),
            "reactivated" => Ok(Self::Reactivated),
            "status_change" => Ok(Self::StatusChange),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownActionType(s.to_string())),
        }
    }
}

impl Serialize for ActionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ActionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown action type strings.
#[derive(Debug, Clone)]
pub struct UnknownActionType(String);

impl fmt::Display for UnknownActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action type: {}", self.0)
    }
}

impl std::error::Error for UnknownActionType {}

//! Shopping list entries and their urgency classifier.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How urgently an entry is needed.
///
/// The set is closed: only `1`, `2` and `3` convert into an `Urgency`, so an
/// out-of-range level is rejected when the value is built (for example while
/// the config file is parsed) instead of reaching the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Urgency {
    Low = 1,
    Moderate = 2,
    Severe = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("urgency must be 1, 2 or 3, got {0}")]
pub struct InvalidUrgency(pub u8);

impl TryFrom<u8> for Urgency {
    type Error = InvalidUrgency;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Moderate),
            3 => Ok(Self::Severe),
            other => Err(InvalidUrgency(other)),
        }
    }
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> Self {
        urgency as u8
    }
}

/// A single line on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub urgency: Option<Urgency>,
    pub checked: bool,
    pub note: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category: category.into(),
            urgency: None,
            checked: false,
            note: None,
        }
    }

    #[must_use]
    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Stable key used by list views to address this entry
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

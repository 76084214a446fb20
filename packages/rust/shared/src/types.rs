//! Core domain types for meeting scheduling.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MeetingId
// ---------------------------------------------------------------------------

/// Zero-based meeting index, assigned in input order and stable for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeetingId(pub usize);

impl MeetingId {
    /// The raw index, usable for matrix and slot-array addressing.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for MeetingId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for MeetingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Meeting
// ---------------------------------------------------------------------------

/// A scheduling unit: a title plus the people who must attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Position in the input.
    pub id: MeetingId,
    /// Display title (opaque).
    pub title: String,
    /// Participant names, trimmed, in input order. Duplicates are kept.
    pub participants: Vec<String>,
}

impl Meeting {
    /// Build meeting `id`, trimming each participant name.
    pub fn new<I, S>(id: usize, title: impl Into<String>, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: MeetingId(id),
            title: title.into(),
            participants: participants
                .into_iter()
                .map(|p| p.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Participants rendered the way the result table shows them.
    pub fn participant_list(&self) -> String {
        self.participants.join(", ")
    }
}

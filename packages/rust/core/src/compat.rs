//! Meeting compatibility graph.
//!
//! Two meetings are compatible when they share no participant. The matrix is
//! built once per run and is the only thing consolidation consults when it
//! decides whether a meeting may join a slot.

use std::collections::HashSet;

use tracing::{debug, instrument};

use meetslot_shared::{Meeting, MeetingId};

/// Symmetric n×n compatibility table over meeting indices.
///
/// The diagonal carries no meaning and is never consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl CompatibilityMatrix {
    /// Build the matrix for `meetings`, whose ids must be `0..meetings.len()`
    /// in order.
    #[instrument(skip_all, fields(meeting_count = meetings.len()))]
    pub fn build(meetings: &[Meeting]) -> Self {
        let size = meetings.len();
        let mut cells = vec![false; size * size];

        let attendees: Vec<HashSet<&str>> = meetings
            .iter()
            .map(|m| m.participants.iter().map(String::as_str).collect())
            .collect();

        let mut compatible_pairs = 0usize;
        for i in 0..size {
            for j in (i + 1)..size {
                if attendees[i].is_disjoint(&attendees[j]) {
                    cells[i * size + j] = true;
                    cells[j * size + i] = true;
                    compatible_pairs += 1;
                }
            }
        }

        debug!(compatible_pairs, "compatibility matrix built");
        Self { size, cells }
    }

    /// Number of meetings the matrix covers.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether meetings `a` and `b` (`a != b`) can share a slot.
    pub fn compatible(&self, a: MeetingId, b: MeetingId) -> bool {
        self.cells[a.index() * self.size + b.index()]
    }

    /// Whether `meeting` is compatible with every member of `group`.
    pub fn compatible_with_all(&self, meeting: MeetingId, group: &[MeetingId]) -> bool {
        group.iter().all(|&other| self.compatible(meeting, other))
    }

    /// Every compatible pair `(i, j)` with `i < j`, in row-major order.
    pub fn compatible_pairs(&self) -> impl Iterator<Item = (MeetingId, MeetingId)> + '_ {
        (0..self.size).flat_map(move |i| {
            ((i + 1)..self.size)
                .filter(move |&j| self.cells[i * self.size + j])
                .map(move |j| (MeetingId(i), MeetingId(j)))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! A finished schedule: meetings, their final slots, and the graph behind it.

use meetslot_shared::{Meeting, MeetingId};

use crate::compat::CompatibilityMatrix;
use crate::consolidate::{PassOutcome, Slot, consolidate_with};

/// Meetings partitioned into slots.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Input meetings, indexed by id.
    pub meetings: Vec<Meeting>,
    /// Final non-empty slots in output order.
    pub slots: Vec<Slot>,
    /// Compatibility matrix the slots were built from.
    pub matrix: CompatibilityMatrix,
    /// Consolidation passes run.
    pub passes: usize,
}

impl Schedule {
    /// Consolidate `meetings`, whose ids must be `0..meetings.len()` in order.
    pub fn build(meetings: Vec<Meeting>) -> Self {
        Self::build_with(meetings, |_| {})
    }

    /// Like [`build`](Self::build), reporting each pass to `on_pass`.
    pub fn build_with(meetings: Vec<Meeting>, on_pass: impl FnMut(&PassOutcome)) -> Self {
        let consolidation = consolidate_with(&meetings, on_pass);
        Self {
            meetings,
            slots: consolidation.slots,
            matrix: consolidation.matrix,
            passes: consolidation.passes,
        }
    }

    pub fn meeting(&self, id: MeetingId) -> &Meeting {
        &self.meetings[id.index()]
    }

    /// Slots resolved to meetings, as the artifact writers take them.
    pub fn grouped(&self) -> Vec<Vec<&Meeting>> {
        self.slots
            .iter()
            .map(|slot| slot.meetings().iter().map(|&id| self.meeting(id)).collect())
            .collect()
    }

    /// `(slot position, meeting)` in result-table order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &Meeting)> + '_ {
        self.slots.iter().enumerate().flat_map(move |(position, slot)| {
            slot.meetings()
                .iter()
                .map(move |&id| (position, self.meeting(id)))
        })
    }
}

//! Greedy slot consolidation.
//!
//! Every meeting starts in its own slot. A pass walks the slot array left to
//! right and tries to empty each slot by moving all of its meetings into
//! other slots (lowest compatible index wins). Passes repeat until one empties
//! nothing, then empty slots are dropped.
//!
//! The slot array is mutated in place during a pass, so a decision for slot
//! `s` sees every move committed earlier in the same pass. Passes never work
//! from a snapshot.

use tracing::{debug, info, instrument, trace};

use meetslot_shared::{Meeting, MeetingId};

use crate::compat::CompatibilityMatrix;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// Meetings held in the same time period, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    meetings: Vec<MeetingId>,
}

impl Slot {
    /// A slot holding one meeting.
    pub fn single(meeting: MeetingId) -> Self {
        Self {
            meetings: vec![meeting],
        }
    }

    pub fn meetings(&self) -> &[MeetingId] {
        &self.meetings
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

/// Drop empty slots, keeping the relative order of the rest.
pub fn compact(slots: Vec<Slot>) -> Vec<Slot> {
    slots.into_iter().filter(|slot| !slot.is_empty()).collect()
}

// ---------------------------------------------------------------------------
// SlotConsolidator
// ---------------------------------------------------------------------------

/// What a single pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// 1-based pass number.
    pub pass: usize,
    /// Slots emptied during this pass.
    pub emptied: usize,
    /// Non-empty slots left after the pass.
    pub open_slots: usize,
}

/// Owns the slot array and runs merge passes over it.
#[derive(Debug)]
pub struct SlotConsolidator<'m> {
    matrix: &'m CompatibilityMatrix,
    slots: Vec<Slot>,
    passes: usize,
}

impl<'m> SlotConsolidator<'m> {
    /// Start from the identity partition: slot `i` holds meeting `i`.
    pub fn new(matrix: &'m CompatibilityMatrix) -> Self {
        Self {
            matrix,
            slots: (0..matrix.len()).map(|i| Slot::single(MeetingId(i))).collect(),
            passes: 0,
        }
    }

    /// The full slot array, empty slots included.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn open_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Run one left-to-right pass. Returns whether any slot was emptied.
    pub fn run_pass(&mut self) -> bool {
        self.pass().emptied > 0
    }

    /// Run passes until one empties no slot.
    pub fn run(&mut self) {
        self.run_with(|_| {});
    }

    /// Like [`run`](Self::run), calling `on_pass` after every pass.
    ///
    /// Zero meetings means zero passes.
    pub fn run_with(&mut self, mut on_pass: impl FnMut(&PassOutcome)) {
        if self.slots.is_empty() {
            return;
        }
        loop {
            let outcome = self.pass();
            on_pass(&outcome);
            if outcome.emptied == 0 {
                break;
            }
        }
    }

    /// The final partition: non-empty slots in ascending original index.
    pub fn into_slots(self) -> Vec<Slot> {
        compact(self.slots)
    }

    fn pass(&mut self) -> PassOutcome {
        self.passes += 1;
        let mut emptied = 0;

        for source in 0..self.slots.len() {
            if self.slots[source].is_empty() {
                continue;
            }
            // All or nothing: a slot is never partially drained.
            let Some(destinations) = self.plan_relocation(source) else {
                continue;
            };

            let moving = std::mem::take(&mut self.slots[source].meetings);
            trace!(source, moved = moving.len(), "slot emptied");
            for (meeting, destination) in moving.into_iter().zip(destinations) {
                self.slots[destination].meetings.push(meeting);
            }
            emptied += 1;
        }

        let outcome = PassOutcome {
            pass: self.passes,
            emptied,
            open_slots: self.open_slots(),
        };
        debug!(
            pass = outcome.pass,
            emptied = outcome.emptied,
            open_slots = outcome.open_slots,
            "consolidation pass complete"
        );
        outcome
    }

    /// Destination for every meeting of `source`, or `None` as soon as one
    /// meeting has nowhere to go.
    fn plan_relocation(&self, source: usize) -> Option<Vec<usize>> {
        self.slots[source]
            .meetings
            .iter()
            .map(|&meeting| self.find_destination(source, meeting))
            .collect()
    }

    /// Lowest-index non-empty slot other than `source` whose every member is
    /// compatible with `meeting`.
    fn find_destination(&self, source: usize, meeting: MeetingId) -> Option<usize> {
        (0..self.slots.len()).find(|&candidate| {
            candidate != source
                && !self.slots[candidate].is_empty()
                && self
                    .matrix
                    .compatible_with_all(meeting, &self.slots[candidate].meetings)
        })
    }
}

// ---------------------------------------------------------------------------
// consolidate
// ---------------------------------------------------------------------------

/// Result of consolidating a meeting list.
#[derive(Debug, Clone)]
pub struct Consolidation {
    /// Final slots, compacted.
    pub slots: Vec<Slot>,
    /// The matrix every decision was made against.
    pub matrix: CompatibilityMatrix,
    /// Passes run, including the final one that emptied nothing.
    pub passes: usize,
}

/// Build the compatibility matrix for `meetings` and consolidate to a fixed
/// point.
pub fn consolidate(meetings: &[Meeting]) -> Consolidation {
    consolidate_with(meetings, |_| {})
}

/// Like [`consolidate`], reporting each pass to `on_pass`.
#[instrument(skip_all, fields(meeting_count = meetings.len()))]
pub fn consolidate_with(meetings: &[Meeting], on_pass: impl FnMut(&PassOutcome)) -> Consolidation {
    let matrix = CompatibilityMatrix::build(meetings);

    let (slots, passes) = {
        let mut consolidator = SlotConsolidator::new(&matrix);
        consolidator.run_with(on_pass);
        let passes = consolidator.passes();
        (consolidator.into_slots(), passes)
    };

    info!(
        meetings = meetings.len(),
        slots = slots.len(),
        passes,
        "consolidation reached fixed point"
    );

    Consolidation {
        slots,
        matrix,
        passes,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

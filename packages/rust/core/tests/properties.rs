//! Property tests for the compatibility matrix and consolidation.

use std::collections::HashSet;

use meetslot_core::{Meeting, MeetingId, compact, consolidate};
use proptest::prelude::*;

/// Up to 12 meetings drawing from 8 participants, so conflicts are common.
fn meeting_sets() -> impl Strategy<Value = Vec<Meeting>> {
    prop::collection::vec(prop::collection::vec(0u8..8, 0..4), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, people)| {
                Meeting::new(i, format!("m{i}"), people.into_iter().map(|p| format!("p{p}")))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn compatibility_is_symmetric(input in meeting_sets()) {
        let result = consolidate(&input);
        let n = input.len();
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    prop_assert_eq!(
                        result.matrix.compatible(MeetingId(i), MeetingId(j)),
                        result.matrix.compatible(MeetingId(j), MeetingId(i))
                    );
                }
            }
        }
    }

    #[test]
    fn compatibility_means_no_shared_participant(input in meeting_sets()) {
        let result = consolidate(&input);
        for a in &input {
            for b in &input {
                if a.id == b.id {
                    continue;
                }
                let shared = a.participants.iter().any(|p| b.participants.contains(p));
                prop_assert_eq!(result.matrix.compatible(a.id, b.id), !shared);
            }
        }
    }

    #[test]
    fn every_meeting_lands_in_exactly_one_slot(input in meeting_sets()) {
        let result = consolidate(&input);
        let placed: Vec<MeetingId> = result
            .slots
            .iter()
            .flat_map(|s| s.meetings().iter().copied())
            .collect();
        let unique: HashSet<MeetingId> = placed.iter().copied().collect();

        prop_assert_eq!(placed.len(), input.len());
        prop_assert_eq!(unique.len(), input.len());
        prop_assert!(result.slots.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn slots_are_cliques(input in meeting_sets()) {
        let result = consolidate(&input);
        for slot in &result.slots {
            let members = slot.meetings();
            for (x, &a) in members.iter().enumerate() {
                for &b in &members[x + 1..] {
                    prop_assert!(result.matrix.compatible(a, b));
                }
            }
        }
    }

    #[test]
    fn consolidation_is_deterministic(input in meeting_sets()) {
        let first = consolidate(&input);
        let second = consolidate(&input);
        prop_assert_eq!(first.slots, second.slots);
        prop_assert_eq!(first.passes, second.passes);
    }

    #[test]
    fn passes_bounded_by_meeting_count(input in meeting_sets()) {
        let result = consolidate(&input);
        prop_assert!(result.passes <= input.len());
    }

    #[test]
    fn compacting_a_compacted_schedule_changes_nothing(input in meeting_sets()) {
        let result = consolidate(&input);
        prop_assert_eq!(compact(result.slots.clone()), result.slots);
    }
}

//! Slot planning for meetings.
//!
//! Meetings that share a participant cannot run at the same time. This crate
//! builds the compatibility graph between meetings ([`compat`]), greedily
//! merges single-meeting slots into larger compatible groups until nothing
//! moves ([`consolidate`]), and ties loading and output together
//! ([`pipeline`]).
//!
//! The result is deterministic but not guaranteed minimal.

pub mod compat;
pub mod consolidate;
pub mod pipeline;
pub mod schedule;

pub use compat::CompatibilityMatrix;
pub use consolidate::{Consolidation, PassOutcome, Slot, SlotConsolidator, compact, consolidate};
pub use schedule::Schedule;

pub use meetslot_shared::{Meeting, MeetingId};

//! Shared types, error model, and configuration for meetslot.
//!
//! This crate is the foundation depended on by all other meetslot crates.
//! It provides:
//! - [`MeetslotError`] — the unified error type
//! - Domain types ([`Meeting`], [`MeetingId`])
//! - Configuration ([`AppConfig`], [`InputConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DEFAULT_PALETTE, GraphConfig, InputConfig, OutputConfig, load_config_from,
};
pub use error::{MeetslotError, Result};
pub use types::{Meeting, MeetingId};

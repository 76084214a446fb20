//! Application configuration for meetslot.
//!
//! Config is only read when a path is passed explicitly (`--config`); there
//! is no implicit lookup. Missing sections and fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MeetslotError, Result};

/// Graphviz color names assigned to slots, cycled by slot position.
pub const DEFAULT_PALETTE: [&str; 22] = [
    "aqua",
    "aquamarine",
    "beige",
    "brown",
    "cadetblue",
    "coral",
    "cornflowerblue",
    "crimson",
    "darkgreen",
    "darkorchid",
    "darkseagreen4",
    "cyan4",
    "darkorange",
    "darkolivegreen4",
    "deeppink",
    "firebrick1",
    "dimgray",
    "darkviolet",
    "darkseagreen",
    "floralwhite",
    "darkseagreen2",
    "darkred",
];

// ---------------------------------------------------------------------------
// Config structs (matching meetslot.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// How input records are read.
    #[serde(default)]
    pub input: InputConfig,

    /// Graph export settings.
    #[serde(default)]
    pub graph: GraphConfig,

    /// Result table settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[input]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// CSV field delimiter. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Separator between names inside the participant field.
    #[serde(default = "default_delimiter")]
    pub participant_separator: String,

    /// Skip the first record as a header row.
    #[serde(default)]
    pub has_headers: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            participant_separator: default_delimiter(),
            has_headers: false,
        }
    }
}

impl InputConfig {
    /// The field delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(MeetslotError::config(format!(
                "input.delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }
}

fn default_delimiter() -> String {
    ",".into()
}

/// `[graph]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Node colors, indexed by `slot_position % palette.len()`.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
        }
    }
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Slot label prefix; rows are labelled `"<slot_label> N"`.
    #[serde(default = "default_slot_label")]
    pub slot_label: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            slot_label: default_slot_label(),
        }
    }
}

impl OutputConfig {
    /// Label for the slot at compacted position `position`.
    pub fn label(&self, position: usize) -> String {
        format!("{} {position}", self.slot_label)
    }
}

fn default_slot_label() -> String {
    "slot".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

impl AppConfig {
    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.input.delimiter_byte()?;
        if self.input.participant_separator.is_empty() {
            return Err(MeetslotError::config(
                "input.participant_separator must not be empty",
            ));
        }
        if self.graph.palette.is_empty() {
            return Err(MeetslotError::config("graph.palette must not be empty"));
        }
        Ok(())
    }
}

/// Load and validate the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MeetslotError::io(path, e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| {
        MeetslotError::config(format!("failed to parse {}: {e}", path.display()))
    })?;
    config.validate()?;

    tracing::debug!(?path, "loaded config file");
    Ok(config)
}

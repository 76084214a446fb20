//! Output artifacts for a finished schedule.
//!
//! - [`table`] — the result CSV, one row per meeting grouped by slot
//! - [`dot`] — a Graphviz view of the compatibility graph, colored by slot
//! - [`report`] — a JSON run summary
//!
//! Everything here works on slots already resolved to meetings
//! (`&[Vec<&Meeting>]`, compacted order), so this crate has no dependency on
//! the consolidation logic.

pub mod dot;
pub mod report;
pub mod table;

pub use dot::{render_dot, write_dot};
pub use report::{ReportSlot, RunReport, write_report};
pub use table::{render_table, write_table};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use meetslot_shared::{MeetslotError, Result};

/// Create (or truncate) `path` for buffered writing.
pub(crate) fn create_file(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| MeetslotError::io(path, e))
}

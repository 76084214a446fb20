//! Result table writer.
//!
//! One CSV row per meeting: `slot N`, title, participants joined by `", "`.
//! Rows are grouped by slot in compacted order, meetings in slot order.

use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use meetslot_shared::{Meeting, MeetslotError, OutputConfig, Result};

use crate::create_file;

/// Write the result table to `path`.
///
/// `rows` are `(slot position, meeting)` pairs in output order.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_table<'a>(
    path: &Path,
    rows: impl IntoIterator<Item = (usize, &'a Meeting)>,
    output: &OutputConfig,
) -> Result<()> {
    let file = create_file(path)?;
    let written = render_table(file, rows, output).map_err(|e| match e {
        MeetslotError::Render(msg) => {
            MeetslotError::Render(format!("cannot write to {}: {msg}", path.display()))
        }
        other => other,
    })?;

    debug!(rows = written, "result table written");
    Ok(())
}

/// Write the result table to any writer. Returns the number of rows written.
pub fn render_table<'a, W: Write>(
    writer: W,
    rows: impl IntoIterator<Item = (usize, &'a Meeting)>,
    output: &OutputConfig,
) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0;

    for (position, meeting) in rows {
        csv_writer
            .write_record([
                output.label(position).as_str(),
                meeting.title.as_str(),
                meeting.participant_list().as_str(),
            ])
            .map_err(|e| MeetslotError::Render(e.to_string()))?;
        written += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| MeetslotError::Render(e.to_string()))?;
    Ok(written)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

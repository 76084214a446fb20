//! JSON run report.

use std::io::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use meetslot_shared::{Meeting, MeetingId, MeetslotError, OutputConfig, Result};

use crate::create_file;

/// Summary of one scheduling run, written with `--report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Tool version that produced it.
    pub tool_version: String,
    pub meeting_count: usize,
    pub slot_count: usize,
    /// Consolidation passes, including the final one that changed nothing.
    pub pass_count: usize,
    /// Edges in the compatibility graph.
    pub compatible_pairs: usize,
    /// Final slots in output order.
    pub slots: Vec<ReportSlot>,
}

/// One slot of the final schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSlot {
    /// Same label the result table uses.
    pub label: String,
    /// Member meeting ids in slot order.
    pub meetings: Vec<MeetingId>,
}

impl RunReport {
    pub fn new(
        tool_version: impl Into<String>,
        slots: &[Vec<&Meeting>],
        pass_count: usize,
        compatible_pairs: usize,
        output: &OutputConfig,
    ) -> Self {
        let slots: Vec<ReportSlot> = slots
            .iter()
            .enumerate()
            .map(|(position, slot)| ReportSlot {
                label: output.label(position),
                meetings: slot.iter().map(|m| m.id).collect(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            tool_version: tool_version.into(),
            meeting_count: slots.iter().map(|s| s.meetings.len()).sum(),
            slot_count: slots.len(),
            pass_count,
            compatible_pairs,
            slots,
        }
    }
}

/// Write `report` as pretty-printed JSON.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let mut file = create_file(path)?;
    serde_json::to_writer_pretty(&mut file, report).map_err(|e| {
        MeetslotError::Render(format!("cannot write to {}: {e}", path.display()))
    })?;
    file.write_all(b"\n")
        .and_then(|()| file.flush())
        .map_err(|e| MeetslotError::io(path, e))?;

    debug!(slots = report.slot_count, "run report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_and_labels() {
        let a = Meeting::new(0, "A", ["x"]);
        let b = Meeting::new(1, "B", ["y"]);
        let c = Meeting::new(2, "C", ["x"]);

        let report = RunReport::new("0.1.0", &[vec![&b, &a], vec![&c]], 2, 2, &OutputConfig::default());
        assert_eq!(report.meeting_count, 3);
        assert_eq!(report.slot_count, 2);
        assert_eq!(report.slots[0].label, "slot 0");
        assert_eq!(report.slots[0].meetings, vec![MeetingId(1), MeetingId(0)]);
        assert_eq!(report.slots[1].label, "slot 1");
    }

    #[test]
    fn report_written_as_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("report.json");
        let a = Meeting::new(0, "A", ["x"]);
        let report = RunReport::new("0.1.0", &[vec![&a]], 1, 0, &OutputConfig::default());

        write_report(&path, &report).expect("write");

        let raw = std::fs::read_to_string(&path).expect("read back");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(value["pass_count"], 1);
        assert_eq!(value["slots"][0]["meetings"][0], 0);
        assert_eq!(value["tool_version"], "0.1.0");
    }
}

//! End-to-end `plan` pipeline: CSV → meetings → consolidate → table/graph/report.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use meetslot_artifacts::RunReport;
use meetslot_shared::{AppConfig, Result};

use crate::consolidate::PassOutcome;
use crate::schedule::Schedule;

/// Configuration for the `plan` pipeline.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Meeting CSV to read.
    pub input: PathBuf,
    /// Result table to write.
    pub output: PathBuf,
    /// Optional Graphviz file.
    pub graph: Option<PathBuf>,
    /// Optional JSON run report.
    pub report: Option<PathBuf>,
    /// Input/graph/output settings.
    pub app: AppConfig,
    /// Tool version string.
    pub tool_version: String,
}

/// Result of the `plan` pipeline.
#[derive(Debug)]
pub struct PlanResult {
    pub meeting_count: usize,
    pub slot_count: usize,
    /// Consolidation passes run.
    pub passes: usize,
    /// Where the result table went.
    pub output: PathBuf,
    pub graph: Option<PathBuf>,
    pub report: Option<PathBuf>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each consolidation pass.
    fn pass_completed(&self, outcome: &PassOutcome);
    /// Called when the pipeline completes.
    fn done(&self, result: &PlanResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn pass_completed(&self, _outcome: &PassOutcome) {}
    fn done(&self, _result: &PlanResult) {}
}

/// Run the full `plan` pipeline.
///
/// 1. Load meetings
/// 2. Build the compatibility matrix and consolidate slots
/// 3. Write the result table
/// 4. Write the graph and report, if requested
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn plan(config: &PlanConfig, progress: &dyn ProgressReporter) -> Result<PlanResult> {
    let start = Instant::now();
    config.app.validate()?;

    progress.phase("Loading meetings");
    let meetings = meetslot_records::load_meetings(&config.input, &config.app.input)?;
    info!(count = meetings.len(), "meetings loaded");

    progress.phase("Consolidating slots");
    let schedule = Schedule::build_with(meetings, |outcome| progress.pass_completed(outcome));
    let grouped = schedule.grouped();

    progress.phase("Writing schedule");
    meetslot_artifacts::write_table(&config.output, schedule.rows(), &config.app.output)?;

    if let Some(graph) = &config.graph {
        progress.phase("Writing graph");
        meetslot_artifacts::write_dot(
            graph,
            &grouped,
            schedule.matrix.compatible_pairs(),
            &config.app.graph.palette,
        )?;
    }

    if let Some(report_path) = &config.report {
        progress.phase("Writing report");
        let report = RunReport::new(
            config.tool_version.as_str(),
            &grouped,
            schedule.passes,
            schedule.matrix.compatible_pairs().count(),
            &config.app.output,
        );
        meetslot_artifacts::write_report(report_path, &report)?;
    }

    let result = PlanResult {
        meeting_count: schedule.meetings.len(),
        slot_count: schedule.slots.len(),
        passes: schedule.passes,
        output: config.output.clone(),
        graph: config.graph.clone(),
        report: config.report.clone(),
        elapsed: start.elapsed(),
    };

    info!(
        meetings = result.meeting_count,
        slots = result.slot_count,
        passes = result.passes,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "plan complete"
    );
    progress.done(&result);

    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! CLI definition, tracing setup, and the plan command.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use meetslot_core::PassOutcome;
use meetslot_core::pipeline::{PlanConfig, PlanResult, ProgressReporter, SilentProgress};
use meetslot_shared::{AppConfig, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// meetslot — schedule meetings into the fewest slots without double-booking anyone.
#[derive(Parser)]
#[command(
    name = "meetslot",
    version,
    about = "Assign meetings to concurrent time slots so no participant is double-booked.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Meeting CSV: title, then a comma-separated participant list.
    #[arg(required_unless_present = "print_config")]
    pub input: Option<PathBuf>,

    /// Where to write the slot table (CSV).
    #[arg(required_unless_present = "print_config")]
    pub output: Option<PathBuf>,

    /// Optional Graphviz (.dot) file of the compatibility graph.
    pub graph: Option<PathBuf>,

    /// TOML config file (input delimiters, graph palette, slot label).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON run report to this path.
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Print the resolved configuration and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// No spinner and no summary.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Parse arguments. Usage errors exit with status 1; help and version exit 0.
pub(crate) fn parse_args() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = exit_code(&err);
        let _ = err.print();
        std::process::exit(code);
    })
}

/// Exit status for a clap error: 0 for `--help`/`--version`, 1 otherwise.
fn exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "meetslot=warn",
        1 => "meetslot=info",
        2 => "meetslot=debug",
        _ => "meetslot=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let app = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => AppConfig::default(),
    };

    if cli.print_config {
        println!("{}", toml::to_string_pretty(&app)?);
        return Ok(());
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        return Err(eyre!("both <INPUT> and <OUTPUT> are required"));
    };

    let config = PlanConfig {
        input,
        output,
        graph: cli.graph,
        report: cli.report,
        app,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        "planning slots"
    );

    let outcome = if cli.quiet {
        meetslot_core::pipeline::plan(&config, &SilentProgress)
    } else {
        meetslot_core::pipeline::plan(&config, &CliProgress::new())
    };
    let result =
        outcome.wrap_err_with(|| format!("cannot plan slots for {}", config.input.display()))?;

    if !cli.quiet {
        print_summary(&result);
    }

    Ok(())
}

fn print_summary(result: &PlanResult) {
    println!();
    println!("  Schedule written!");
    println!("  Meetings: {}", result.meeting_count);
    println!("  Slots:    {}", result.slot_count);
    println!("  Passes:   {}", result.passes);
    println!("  Output:   {}", result.output.display());
    if let Some(graph) = &result.graph {
        println!("  Graph:    {}", graph.display());
    }
    if let Some(report) = &result.report {
        println!("  Report:   {}", report.display());
    }
    println!("  Time:     {:.3}s", result.elapsed.as_secs_f64());
    println!();
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn pass_completed(&self, outcome: &PassOutcome) {
        self.spinner.set_message(format!(
            "Consolidating [pass {}] {} slots open",
            outcome.pass, outcome.open_slots
        ));
    }

    fn done(&self, _result: &PlanResult) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}

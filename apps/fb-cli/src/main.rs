mod error;

use clap::{Args, Parser, Subcommand};
use error::{CliError, CliResult};
use fb_budget::{ForceBudget, output_line};
use fb_scenario::CaseResult;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "fb-cli")]
#[command(about = "ForceBudget CLI - clamp a requested force by safety and actuator limits", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clamp a single set of inputs (defaults to the cookie demo)
    Apply(ApplyArgs),
    /// Evaluate every case in a scenario file
    Run {
        /// Path to a scenario file (.yaml, .yml or .json)
        scenario_path: PathBuf,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct ApplyArgs {
    /// Force the caller wants to apply (N)
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    desired: f64,
    /// Maximum force the target tolerates (N)
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    safe_limit: f64,
    /// Maximum force the actuator produces (N)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    actuator: f64,
    /// Loss factor applied to the actuator force
    #[arg(long, default_value_t = 0.8, allow_negative_numbers = true)]
    efficiency: f64,
}

impl ApplyArgs {
    fn budget(&self) -> ForceBudget {
        ForceBudget::new(self.desired, self.safe_limit, self.actuator, self.efficiency)
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        None => cmd_apply(ForceBudget::cookie_demo()),
        Some(Commands::Apply(args)) => cmd_apply(args.budget()),
        Some(Commands::Run {
            scenario_path,
            json,
        }) => cmd_run(&scenario_path, json),
    }
}

/// Logs go to stderr so stdout carries only results. A non-empty `RUST_LOG`
/// replaces the level chosen by `--verbose`.
fn setup_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn cmd_apply(budget: ForceBudget) -> CliResult<()> {
    tracing::debug!(?budget, "applying force budget");
    println!("{}", output_line(budget.apply()));
    Ok(())
}

fn cmd_run(scenario_path: &Path, json: bool) -> CliResult<()> {
    let scenario = fb_scenario::load_path(scenario_path).map_err(|source| CliError::Scenario {
        path: scenario_path.to_path_buf(),
        source,
    })?;
    tracing::info!(name = %scenario.name, "running scenario");

    let results = scenario.evaluate();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &results)?;
        writeln!(out)?;
    } else {
        for line in render_results(&results) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn render_results(results: &[CaseResult]) -> Vec<String> {
    results
        .iter()
        .map(|r| {
            format!(
                "{}: {} (limited by {})",
                r.id,
                output_line(r.breakdown.output),
                r.breakdown.binding
            )
        })
        .collect()
}

//! gapinspect library root.
//! Exposes the employment coverage analyzer, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::logic::{Core, analyze_employment_coverage};
pub use models::coverage::{CoverageDuration, CoverageReport, Interval};
pub use models::resume::{DurationUnit, EmploymentRecord, Resume, ResumeLike};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
    }
}

/// Diagnostic logging on stderr. `GAPINSPECT_LOG` takes precedence over
/// `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("GAPINSPECT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore a second init (library users may own the subscriber).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 2️⃣ resolve and load config once
    let cfg_path = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&cfg_path)?;

    // 3️⃣ dispatch
    dispatch(&cli, &cfg, &cfg_path)
}

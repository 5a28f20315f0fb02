use crate::export::ReportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gapinspect
/// CLI application to find gaps and overlaps in a resume's employment history
#[derive(Parser)]
#[command(
    name = "gapinspect",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze employment gaps, overlaps and coverage in a resume",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Analyze the employment history of a resume
    Analyze {
        /// Resume file (.json, .yaml or .yml)
        resume: String,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ReportFormat>,

        #[arg(long, value_name = "FILE", help = "Write the report to FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,

        #[arg(
            long = "as-of",
            value_name = "YYYY-MM-DD",
            help = "Treat this date as today for ongoing jobs"
        )]
        as_of: Option<String>,
    },
}

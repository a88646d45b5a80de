use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rpunch
#[derive(Parser)]
#[command(
    name = "rpunch",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple punch clock: clock in/out and compute rounded hours and pay",
    long_about = None
)]
pub struct Cli {
    /// Override the punch file path (useful for tests or a second job)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the punch file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Clock in (start a punch)
    In,

    /// Clock out (close the running punch)
    Out,

    /// Show whether you are clocked in
    Status,

    /// Show punches, rounded hours and pay for a date range
    Summary {
        /// First day (YYYY-MM-DD). Defaults to the start of the default window.
        #[arg(long, conflicts_with = "period")]
        from: Option<String>,

        /// Last day (YYYY-MM-DD). Defaults to today.
        #[arg(long, conflicts_with = "period")]
        to: Option<String>,

        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY            → year range           (e.g. "2024:2025")
        /// - YYYY-MM:YYYY-MM      → month range          (e.g. "2025-06:2025-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range           (e.g. "2025-06-01:2025-06-10")
        ///
        /// Special value:
        /// - all                   → every punch on file
        #[arg(long, short)]
        period: Option<String>,

        /// Hourly wage (0.00 - 1000.00). Defaults to the configured wage.
        #[arg(long, short)]
        wage: Option<f64>,

        /// Refresh every second (Ctrl-C to stop)
        #[arg(long)]
        watch: bool,

        /// Stop watching after this many refreshes
        #[arg(long, requires = "watch")]
        ticks: Option<u64>,
    },

    /// Export the summary rows of a range
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        out: String,

        /// Period to export (same formats as `summary --period`); default: all
        #[arg(long, short)]
        period: Option<String>,

        /// Hourly wage used for the totals
        #[arg(long, short)]
        wage: Option<f64>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the punch file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        out: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,

        /// Overwrite without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

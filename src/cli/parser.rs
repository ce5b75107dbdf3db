use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for Fichalia
#[derive(Parser)]
#[command(
    name = "fichalia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in, check out, and see your work sessions and daily totals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this subject instead of `default_subject` from the config
    #[arg(global = true, long = "subject", short = 's')]
    pub subject: Option<String>,

    /// Display timezone: `local`, `UTC` or an offset like `+02:00`
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a check-in or check-out
    Add {
        /// `in` or `out`
        kind: String,

        #[arg(
            long = "at",
            help = "Instant: RFC 3339 or 'YYYY-MM-DD HH:MM' in the display timezone (default: now)"
        )]
        at: Option<String>,

        #[arg(long = "lat", allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long = "lon", allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        #[arg(long = "address", help = "Human-readable place")]
        address: Option<String>,
    },

    /// List work sessions grouped by date
    List {
        #[arg(
            long,
            short,
            help = "YYYY, YYYY-MM, YYYY-MM-DD, a range like YYYY-MM:YYYY-MM, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Only today's sessions", conflicts_with = "period")]
        today: bool,

        #[arg(long = "entries", help = "List raw check-in/check-out entries")]
        entries: bool,

        #[arg(long = "all-subjects", help = "Report every subject in the database")]
        all_subjects: bool,
    },

    /// Export sessions (or raw entries) to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Export raw entries instead of sessions")]
        entries: bool,

        #[arg(long = "all-subjects")]
        all_subjects: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

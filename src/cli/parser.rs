use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtreports
#[derive(Parser)]
#[command(
    name = "rtreports",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work-logs and check whether each day has missing, right or extra hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record hours worked by a worker on a date
    Add {
        /// Date of the worklog (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, short, help = "Worker username (default: config 'default_worker')")]
        user: Option<String>,

        #[arg(long, help = "Hours worked", allow_negative_numbers = true)]
        hours: i32,

        #[arg(long = "desc", default_value = "", help = "Free text description")]
        description: String,
    },

    /// Delete a worklog by id
    Del {
        /// Worklog id (see `list`)
        id: i32,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List worklogs
    List {
        #[arg(long, short, help = "Filter by worker username")]
        user: Option<String>,

        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,
    },

    /// Show the day status (MISSING_HOURS, RIGHT_HOURS, EXTRA_HOURS)
    Status {
        #[arg(long, short, help = "Worker username (default: config 'default_worker')")]
        user: Option<String>,

        #[arg(
            long,
            short,
            conflicts_with = "period",
            help = "Day to check (YYYY-MM-DD or \"today\", default: today)"
        )]
        date: Option<String>,

        #[arg(long, short, help = "One status per day over a period (A:B ranges allowed)")]
        period: Option<String>,
    },

    /// Export day statuses
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Worker username (default: config 'default_worker')")]
        user: Option<String>,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Year/month/day or a custom range (default: current month)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

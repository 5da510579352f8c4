use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rShiftChart
/// CLI application to chart shift production against target with SQLite
#[derive(Parser)]
#[command(
    name = "rshiftchart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Shift production chart: compare actual output with the target curve, breaks and overnight shifts included",
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

/// Shift selection shared by `chart` and `export`.
///
/// Values from `--preset` are used as defaults; explicit flags win.
#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    /// Shift date (YYYY-MM-DD or "today"); overnight shifts end the next day
    pub date: String,

    #[arg(long = "preset", short = 'p', help = "Shift preset from the configuration file")]
    pub preset: Option<String>,

    #[arg(long = "shift", help = "Shift label (informational)")]
    pub shift: Option<String>,

    #[arg(long = "start", help = "Shift start time (HH:MM)")]
    pub start: Option<String>,

    #[arg(long = "end", help = "Shift end time (HH:MM)")]
    pub end: Option<String>,

    #[arg(long = "target", help = "Target parts for the whole shift")]
    pub target: Option<u32>,

    #[arg(long = "cycle", help = "Cycle time in seconds per part")]
    pub cycle: Option<f64>,

    #[arg(
        long = "breaks",
        help = r#"Breaks as JSON, e.g. '[{"name":"Lunch","startTime":"12:00","endTime":"12:30"}]'"#
    )]
    pub breaks: Option<String>,

    #[arg(long = "form", help = "Form id whose submissions count as produced parts")]
    pub form: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record produced parts (one submission per part)
    Add {
        /// Date of the submission (YYYY-MM-DD or "today")
        date: String,

        /// Time of the submission (HH:MM or HH:MM:SS)
        time: String,

        #[arg(long = "form", help = "Form id (default: default_form_id from config)")]
        form: Option<i64>,

        #[arg(long = "count", default_value_t = 1, help = "Number of parts to record")]
        count: u32,

        #[arg(long = "source", default_value = "cli", help = "Source tag stored with the event")]
        source: String,
    },

    /// Compute and print the shift chart
    Chart {
        #[command(flatten)]
        shift: ShiftArgs,

        #[arg(long = "json", help = "Print the chart as JSON")]
        json: bool,

        #[arg(
            long = "watch",
            value_name = "SECS",
            help = "Recompute and redraw every SECS seconds"
        )]
        watch: Option<u64>,
    },

    /// Export the shift chart
    Export {
        #[command(flatten)]
        shift: ShiftArgs,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

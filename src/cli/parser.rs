use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mapty
#[derive(Parser)]
#[command(
    name = "mapty",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log running and cycling workouts at map coordinates, stored locally in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (useful for tests or a custom location)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Current position as LAT,LNG (overrides `home` from the config)
    #[arg(global = true, long = "here", value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub here: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
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

    /// Log a new workout
    Add {
        /// Workout type: running (r) or cycling (c)
        kind: String,

        #[arg(long, allow_negative_numbers = true, help = "Distance in km")]
        distance: Option<f64>,

        #[arg(long, allow_negative_numbers = true, help = "Duration in minutes")]
        duration: Option<f64>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Cadence in steps/min (running)"
        )]
        cadence: Option<f64>,

        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Elevation gain in meters (cycling)"
        )]
        elevation: Option<f64>,

        #[arg(
            long = "at",
            value_name = "LAT,LNG",
            allow_hyphen_values = true,
            help = "Where the workout happened (default: current position)"
        )]
        at: Option<String>,
    },

    /// List logged workouts, newest first
    List {
        #[arg(long = "markers", help = "Also print the map markers")]
        markers: bool,

        #[arg(long = "table", help = "Print a compact table instead of list rows")]
        table: bool,
    },

    /// Center the map on a workout
    Select {
        /// Workout id as shown by `list`
        id: String,
    },

    /// Delete every stored workout
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export workouts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

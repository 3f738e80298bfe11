//! Command-line interface definitions using clap
//!
//! `Cli` is the `signalctl` process interface. `SessionLine` is parsed once per
//! line of a session script.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::registry::{TimingOptions, TimingUpdate};

/// signalctl - drive an in-memory traffic signal timing registry
#[derive(Parser, Debug)]
#[command(name = "signalctl")]
#[command(version)]
#[command(about = "Manage traffic signal timing configurations", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a session script against a fresh registry
    ///
    /// One command per line; blank lines and lines starting with '#' are skipped.
    Run {
        /// Script file (default: stdin)
        script: Option<PathBuf>,

        /// Report failing lines and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// One line of a session script
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Registry operations available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Register a new signal
    Create {
        id: String,
        #[command(flatten)]
        timings: TimingArgs,
    },

    /// Show a signal's timings
    Read { id: String },

    /// Change some of a signal's timings
    Update {
        id: String,
        #[command(flatten)]
        timings: TimingArgs,
    },

    /// Remove a signal
    Delete { id: String },

    /// Stretch green by 10% and shorten red by 10%
    Optimize { id: String },

    /// Show the impact analysis for a signal
    Summarize {
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all signals
    List,
}

/// Phase durations in seconds; omitted flags stay unset
#[derive(Args, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimingArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub green: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub yellow: Option<i64>,

    #[arg(long, allow_negative_numbers = true)]
    pub red: Option<i64>,
}

impl From<TimingArgs> for TimingOptions {
    fn from(args: TimingArgs) -> Self {
        TimingOptions {
            green: args.green,
            yellow: args.yellow,
            red: args.red,
        }
    }
}

impl From<TimingArgs> for TimingUpdate {
    fn from(args: TimingArgs) -> Self {
        TimingUpdate {
            green: args.green,
            yellow: args.yellow,
            red: args.red,
        }
    }
}

//! CLI interface module
//!
//! Command-line front-end for signalctl. Every command is an in-process call
//! on a [`SignalRegistry`](crate::registry::SignalRegistry).

pub mod commands;
mod session;

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader};

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::SignalError;
use crate::registry::SignalRegistry;

pub use session::{Session, SessionReport};

#[derive(Debug)]
pub enum CliError {
    RegistryError(SignalError),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::RegistryError(err) => format!("{} {}", err.code(), err.format_simple()),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::RegistryError(err) => err.format_colored(),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }

    /// The registry error behind this failure, if any.
    pub fn as_registry_error(&self) -> Option<&SignalError> {
        match self {
            CliError::RegistryError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<SignalError> for CliError {
    fn from(err: SignalError) -> Self {
        CliError::RegistryError(err)
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        Commands::Run { script, keep_going } => {
            let session = Session::new(SignalRegistry::with_defaults(config.registry.defaults))
                .keep_going(keep_going);

            let report = match script {
                Some(path) => {
                    let file = File::open(&path).map_err(|e| {
                        CliError::CommandError(format!(
                            "Failed to open script {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    session.run(BufReader::new(file))?
                }
                None => session.run(io::stdin().lock())?,
            };

            report.print();
            if report.failed > 0 {
                return Err(CliError::CommandError(format!(
                    "{} of {} commands failed",
                    report.failed, report.executed
                )));
            }
            Ok(())
        }

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => commands::generate_config(output_path, force),
    }
}

use anyhow::Context;
use clap::Parser;

use signal_registry::cli::Cli;
use signal_registry::config::{init_config, init_config_from};
use signal_registry::interfaces::cli::run_cli_command;
use signal_registry::system::init_logging;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => init_config_from(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => init_config(),
    };

    // guard 必须在退出前 drop，否则缓冲的日志会丢失
    let guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    let result = run_cli_command(cli.command, &config);
    drop(guard);

    if let Err(e) = result {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    Ok(())
}

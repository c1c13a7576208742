//! The `vitae` command line tool.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::logging::{init_logging, LogConfig, LogFormat};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let result = match cli.command {
        Command::Templates => commands::run_templates(),
        Command::Sample { output } => commands::run_sample(output.as_deref()),
        Command::Render(args) => commands::run_render(&args),
        Command::Export(args) => commands::run_export(&args).await,
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        ..LogConfig::default()
    }
}

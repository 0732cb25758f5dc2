use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::{debug, error};

use linkshort::cli::Cli;
use linkshort::runtime::lifetime::startup::prepare_startup;
use linkshort::runtime::modes::{self, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mode = modes::detect_mode(cli.command);
    if matches!(mode, Mode::Help) {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::SUCCESS);
    }

    let startup = prepare_startup(cli.config.as_deref(), mode.is_interactive())?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    let code = runtime.block_on(async {
        match mode {
            Mode::Cli(cmd) => match modes::run_cli(cmd, &startup.services).await {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(e) => {
                    error!("CLI command failed: {}", e);
                    eprintln!("{}", e.format_colored());
                    Ok(ExitCode::FAILURE)
                }
            },
            #[cfg(feature = "tui")]
            Mode::Tui => modes::run_tui(startup.services.clone(), &startup.config)
                .await
                .map(|()| ExitCode::SUCCESS),
            Mode::Help => Ok(ExitCode::SUCCESS),
        }
    });

    debug!("Shutting down");
    drop(startup.log_guard);
    code
}

use clap::Parser;
use std::process::ExitCode;

mod banner;
mod cli;
mod commands;

use cli::{Cli, Command};
use research_console::ShellConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(mode) = cli.color {
        research_console::set_color_mode(mode);
    }
    research_console::telemetry_init(cli.verbose);

    // Configuration is read once; everything below receives it by reference.
    let config = ShellConfig::from_env();
    tracing::debug!(gateway = ?config.gateway(), "configuration loaded");

    let result = match &cli.command {
        Command::Modules { json, origin } => {
            commands::run_modules(&config, origin.as_deref(), *json)
        }
        Command::Surfaces { json, origin } => {
            commands::run_surfaces(&config, origin.as_deref(), *json)
        }
        Command::Resolve {
            module,
            surface,
            origin,
        } => Ok(commands::run_resolve(
            &config,
            origin.as_deref(),
            module,
            surface.as_deref(),
        )),
        Command::Doctor { origin, timeout_ms } => Ok(commands::run_doctor(
            &config,
            origin.as_deref(),
            *timeout_ms,
        )),
        Command::Serve { bind } => Ok(commands::run_serve(&cli, config, bind.as_deref())),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            let use_err = research_console::color_enabled_stderr();
            research_console::log_error_stderr(use_err, &format!("research-console: {e:#}"));
            ExitCode::from(1)
        }
    }
}

// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   StaleReport | OpenExplorer | ChangeDirectory | OpenEditor | Options
//! ```
//!
//! Config loads before logging so the configured levels apply to the console
//! layer; `version` and `configs` run before both so they work even with a
//! broken configuration.

use std::process::ExitCode;

use repohop::cli::global::GlobalOptions;
use repohop::cli::{self, Command};
use repohop::cmd::cd::run_change_directory_command;
use repohop::cmd::config::{run_configs_command, run_options_command};
use repohop::cmd::open::{run_open_editor_command, run_open_explorer_command};
use repohop::cmd::stale::run_stale_report_command;
use repohop::config::Config;
use repohop::config::loader::ConfigLoader;
use repohop::logging::init_logging;
use repohop::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Configs) => {
            return match build_config_loader(&cli.global) {
                Ok(loader) => {
                    run_configs_command(&loader.format_loaded_files());
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e:#}");
                    ExitCode::FAILURE
                }
            };
        }
        None => {
            cli::print_long_help();
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.output_log_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.global.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::StaleReport(args)) => run_stale_report_command(args, config),
        Some(Command::OpenExplorer(args)) => run_open_explorer_command(args, config),
        Some(Command::ChangeDirectory(args)) => run_change_directory_command(args, config),
        Some(Command::OpenEditor(args)) => run_open_editor_command(args, config),
        // Handled in main before config loading
        Some(Command::Version | Command::Configs) | None => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> repohop::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().with_env_prefix("HOP");

    if !global.no_default_config {
        loader = loader.add_toml_file_optional("hop.toml");
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    if let Some(root) = &global.root {
        loader = loader.set("paths.root", root.display().to_string())?;
    }

    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> repohop::error::Result<Config> {
    build_config_loader(global)
        .and_then(ConfigLoader::build)
        .map_err(|e| {
            eprintln!("Failed to load config: {e}");
            e
        })
}

// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for repohop using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! hop [global options] <command>
//! stale-report [term] [--json]   (alias: stale)
//! open-explorer [term]           (alias: open)
//! change-directory [term]        (alias: cd)
//! open-editor [term]             (alias: edit)
//! options
//! configs
//! ```

pub mod global;
pub mod repo;


use crate::cli::global::GlobalOptions;
use crate::cli::repo::{StaleReportArgs, TermArgs};
use clap::{CommandFactory, Parser, Subcommand};

/// Git checkout navigator
///
/// Finds, inspects, and jumps between git checkouts under a configured root.
#[derive(Debug, Parser)]
#[command(
    name = "hop",
    author,
    version,
    about = "Git checkout navigator",
    long_about = "repohop Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Finds git checkouts under a configured root by name, reports\n\
                  which ones fell behind their upstream, and opens a match in\n\
                  your file explorer or editor. See `hop <command> --help` for\n\
                  more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, hop looks for a `hop.toml` in the current directory.\n\
                  Additional files can be specified with --config, loaded in order\n\
                  after the default with later files overriding earlier ones.\n\
                  Environment variables prefixed with HOP_ override the files\n\
                  (HOP_PATHS_ROOT, HOP_TOOLS_EDITOR, HOP_TOOLS_EXPLORER), and\n\
                  --root overrides everything. Use --no-default-config to disable\n\
                  auto detection and only use --config.\n\n\
                  SHELL INTEGRATION:\n\n\
                  A child process cannot change its parent shell's directory, so\n\
                  `hop change-directory` prints the resolved path on stdout and\n\
                  leaves the cd to the shell. Add this wrapper to your profile:\n\n\
                  hop() { if [ \"$1\" = cd ] && [ -n \"$2\" ]; then local t; \
                  t=\"$(command hop cd \"$2\")\" && cd \"$t\"; \
                  else command hop \"$@\"; fi; }"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the configuration files used by hop.
    Configs,

    /// Reports matching repositories whose local branch is behind upstream.
    #[command(name = "stale-report", visible_alias = "stale")]
    StaleReport(StaleReportArgs),

    /// Opens a matching directory in the file explorer.
    #[command(name = "open-explorer", visible_alias = "open")]
    OpenExplorer(TermArgs),

    /// Resolves a matching repository and prints its path for the shell to cd into.
    #[command(name = "change-directory", visible_alias = "cd")]
    ChangeDirectory(TermArgs),

    /// Opens a matching repository in the editor.
    #[command(name = "open-editor", visible_alias = "edit")]
    OpenEditor(TermArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}

/// Prints the long help text to stdout.
pub fn print_long_help() {
    let mut command = Cli::command();
    let _ = command.print_long_help();
}

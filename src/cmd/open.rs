// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Open-explorer and open-editor command implementations for repohop.
//!
//! Both resolve a plain directory without the repository filter, so a
//! checkout-adjacent folder (notes, downloads) can be opened too. An empty
//! term resolves to the current directory without prompting.

use crate::cli::repo::TermArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::discovery::find_dirs;
use crate::launch::{open_editor, open_explorer};
use crate::select::select_interactive;
use anyhow::Context;
use std::path::PathBuf;

/// Main handler for the open-explorer command.
///
/// # Errors
///
/// Returns an error if the root is not configured, the selection is invalid,
/// or the explorer cannot be launched.
pub fn run_open_explorer_command(args: &TermArgs, config: &Config) -> Result<()> {
    match resolve_target(args, config)? {
        Some(dir) => {
            open_explorer(&config.tools, &dir)?;
            Ok(())
        }
        None => {
            println!("No match found");
            Ok(())
        }
    }
}

/// Main handler for the open-editor command.
///
/// # Errors
///
/// Returns an error if the root is not configured, the selection is invalid,
/// or the editor cannot be launched.
pub fn run_open_editor_command(args: &TermArgs, config: &Config) -> Result<()> {
    match resolve_target(args, config)? {
        Some(dir) => {
            open_editor(&config.tools, &dir)?;
            Ok(())
        }
        None => {
            println!("No match found");
            Ok(())
        }
    }
}

/// Resolve the directory a launcher command should act on.
fn resolve_target(args: &TermArgs, config: &Config) -> Result<Option<PathBuf>> {
    let term = args.term();

    if term.is_empty() {
        let cwd = std::env::current_dir().context("failed to resolve current directory")?;
        return Ok(Some(cwd));
    }

    let candidates = find_dirs(config, term)?;
    Ok(select_interactive(&candidates)?)
}

// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Change-directory command implementation for repohop.
//!
//! A process cannot change its parent shell's working directory, so this
//! command emits the resolved path as the only stdout output and the shell
//! wrapper function does the actual `cd`. The selector menu and all
//! diagnostics stay on stderr to keep that contract.

use crate::cli::repo::TermArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::discovery::find_repos;
use crate::select::{candidate_name, select_interactive};
use anyhow::anyhow;

/// Main handler for the change-directory command.
///
/// With an empty term, lists the names of every repository under the root.
/// Otherwise resolves one repository and prints its absolute path.
///
/// # Errors
///
/// Returns an error if the root is not configured, the selection is invalid,
/// or no repository matches the term.
pub fn run_change_directory_command(args: &TermArgs, config: &Config) -> Result<()> {
    let term = args.term();

    if term.is_empty() {
        let repos = find_repos(config, "")?;
        if repos.is_empty() {
            println!("No repositories found");
        } else {
            for repo in &repos {
                println!("{}", candidate_name(repo));
            }
        }
        return Ok(());
    }

    let repos = find_repos(config, term)?;
    match select_interactive(&repos)? {
        Some(repo) => {
            println!("{}", repo.display());
            Ok(())
        }
        // The wrapper's && gates on the exit code; stdout must stay empty here
        None => Err(anyhow!("no repository found matching '{term}'")),
    }
}

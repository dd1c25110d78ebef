// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Stale-report command implementation for repohop.

use crate::cli::repo::StaleReportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::ops::survey_repos;
use anyhow::Context;

/// Main handler for the stale-report command.
///
/// Surveys every repository matching the term and prints the ones whose
/// local branch is behind upstream. A failed fetch does not hide a
/// repository; its row is marked `(network-unconfirmed)` instead.
///
/// # Errors
///
/// Returns an error if the root is not configured or cannot be read.
pub fn run_stale_report_command(args: &StaleReportArgs, config: &Config) -> Result<()> {
    let term = args.term.term();
    let survey = survey_repos(config, term).map_err(|e| {
        eprintln!("Failed to survey repositories: {e}");
        e
    })?;

    if args.json {
        let json = serde_json::to_string_pretty(&survey).context("failed to serialize survey")?;
        println!("{json}");
        return Ok(());
    }

    if survey.matched_dirs == 0 {
        println!("No repos found");
        return Ok(());
    }

    let stale = survey.stale();
    if stale.is_empty() {
        println!("No stale repositories");
        return Ok(());
    }

    for status in stale {
        let name = status.name();
        let label = status.freshness_label();
        println!("{name:30} {label}");
    }
    Ok(())
}

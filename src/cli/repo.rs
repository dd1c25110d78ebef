// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository navigation arguments.
//!
//! # Term Matching
//!
//! ```text
//! hop stale-report api    term = "api"     (substring, case-insensitive)
//! hop cd                  term = ""        (lists all repositories)
//! hop open                term = ""        (current directory)
//! ```

use clap::Args;

/// Positional search term shared by the navigation commands.
#[derive(Debug, Clone, Default, Args)]
pub struct TermArgs {
    /// Search term matched case-insensitively against directory names under
    /// the configured root.
    #[arg(value_name = "TERM")]
    pub term: Option<String>,
}

impl TermArgs {
    /// The term to match; empty when omitted.
    #[must_use]
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or("")
    }
}

/// Arguments for the stale-report command.
#[derive(Debug, Clone, Default, Args)]
pub struct StaleReportArgs {
    /// Search term.
    #[command(flatten)]
    pub term: TermArgs,

    /// Prints the full survey as JSON instead of the stale table.
    #[arg(long)]
    pub json: bool,
}

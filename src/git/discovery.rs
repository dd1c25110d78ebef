// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Candidate directory discovery.
//!
//! ```text
//! paths.root/
//!   alpha/        (matched if name contains the term)
//!   beta/         (matched)
//!   .cache/       (skipped, hidden)
//!   notes.txt     (skipped, not a directory)
//! ```
//!
//! Returns sorted lists for deterministic ordering.

use crate::config::Config;
use crate::error::Result;
use anyhow::Context;
use std::path::PathBuf;

use super::query::is_git_repo;

/// List immediate subdirectories of the configured root whose name contains
/// `term`, case-insensitively. An empty term matches everything.
///
/// Hidden directories (name starting with '.') are skipped, as are entries
/// whose names are not valid UTF-8 since they cannot be matched.
///
/// # Errors
///
/// Returns an error if `paths.root` is not configured or cannot be read.
pub fn find_dirs(config: &Config, term: &str) -> Result<Vec<PathBuf>> {
    let root = config.paths.root()?;
    let needle = term.to_lowercase();

    let mut dirs = Vec::new();

    for entry in
        std::fs::read_dir(root).with_context(|| format!("failed to read {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("failed to read entry in {}", root.display()))?;
        let path = entry.path();

        // Skip non-directories
        if !path.is_dir() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        // Skip hidden directories (starting with '.')
        if name.starts_with('.') {
            continue;
        }

        if name.to_lowercase().contains(&needle) {
            dirs.push(path);
        }
    }

    // Sort for determinism
    dirs.sort();
    Ok(dirs)
}

/// Narrow a directory list to git repositories.
///
/// Keeps only entries carrying the version-control marker. Idempotent:
/// filtering an already-filtered list changes nothing.
#[must_use]
pub fn filter_repos(mut dirs: Vec<PathBuf>) -> Vec<PathBuf> {
    dirs.retain(|dir| is_git_repo(dir));
    dirs
}

/// Discover git repositories under the configured root matching `term`.
///
/// # Errors
///
/// Returns an error if `paths.root` is not configured or cannot be read.
pub fn find_repos(config: &Config, term: &str) -> Result<Vec<PathBuf>> {
    Ok(filter_repos(find_dirs(config, term)?))
}

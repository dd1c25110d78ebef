// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository freshness operations.
//!
//! ```text
//! survey_repos   locate + filter + check every match
//! check_repo     fetch, status, classify one repository
//! ```
//!
//! A failed fetch never aborts a survey; it is recorded on the repository's
//! status so the report can mark the classification as network-unconfirmed.

use crate::config::Config;
use crate::error::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::classify::{Freshness, classify};
use super::cmd::{fetch, status_text};
use super::discovery::{filter_repos, find_dirs};
use super::query::is_git_repo;

/// Outcome of the remote-fetch attempt preceding a status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchOutcome {
    /// Fetch completed; remote-tracking state is current.
    Completed,
    /// Fetch failed; the classification may rest on stale local state.
    Failed,
    /// Fetch was not attempted (not a repository).
    Skipped,
}

/// Freshness report for one repository.
#[derive(Debug, Clone, Serialize)]
pub struct RepoStatus {
    /// Repository path.
    pub path: PathBuf,
    /// Classified freshness.
    pub freshness: Freshness,
    /// Whether the preceding fetch refreshed remote-tracking state.
    pub fetch: FetchOutcome,
}

impl RepoStatus {
    /// Repository name, derived from the final path component.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }

    /// Freshness label for reports, marked when the fetch failed.
    #[must_use]
    pub fn freshness_label(&self) -> String {
        match self.fetch {
            FetchOutcome::Failed => format!("{} (network-unconfirmed)", self.freshness),
            _ => self.freshness.to_string(),
        }
    }

    /// True when the local branch is behind its upstream.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self.freshness, Freshness::Stale)
    }
}

/// Result of surveying every directory matching a search term.
#[derive(Debug, Clone, Serialize)]
pub struct Survey {
    /// Number of directories the term matched, before the repository filter.
    pub matched_dirs: usize,
    /// Freshness of each matched repository.
    pub statuses: Vec<RepoStatus>,
}

impl Survey {
    /// Statuses classified stale, in survey order.
    #[must_use]
    pub fn stale(&self) -> Vec<&RepoStatus> {
        self.statuses.iter().filter(|s| s.is_stale()).collect()
    }
}

/// Fetch, query, and classify a single repository.
///
/// The fetch runs first so the status reflects current remote state; its
/// failure is recorded, not propagated. A directory without the
/// version-control marker is classified `Unknown` with a warning, never an
/// error, so one bad entry cannot abort a batch.
#[must_use]
pub fn check_repo(path: &Path) -> RepoStatus {
    let repo_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    if !is_git_repo(path) {
        warn!(repo = %repo_name, "not a git repository, skipping status check");
        return RepoStatus {
            path: path.to_path_buf(),
            freshness: Freshness::Unknown,
            fetch: FetchOutcome::Skipped,
        };
    }

    let fetch_outcome = match fetch(path) {
        Ok(()) => FetchOutcome::Completed,
        Err(e) => {
            debug!(repo = %repo_name, error = %e, "fetch failed, status may be stale");
            FetchOutcome::Failed
        }
    };

    let freshness = match status_text(path) {
        Ok(text) => classify(&text),
        Err(e) => {
            warn!(repo = %repo_name, error = %e, "status query failed");
            Freshness::Unknown
        }
    };

    debug!(repo = %repo_name, freshness = %freshness, "checked repository");

    RepoStatus {
        path: path.to_path_buf(),
        freshness,
        fetch: fetch_outcome,
    }
}

/// Check the freshness of every repository matching `term`.
///
/// Directories without the version-control marker count toward
/// `matched_dirs` but receive no status.
///
/// # Errors
///
/// Returns an error if `paths.root` is not configured or cannot be read.
pub fn survey_repos(config: &Config, term: &str) -> Result<Survey> {
    let dirs = find_dirs(config, term)?;
    let matched_dirs = dirs.len();

    let repos = filter_repos(dirs);
    let statuses: Vec<RepoStatus> = repos.iter().map(|repo| check_repo(repo)).collect();

    info!(
        matched = matched_dirs,
        repos = statuses.len(),
        stale = statuses.iter().filter(|s| s.is_stale()).count(),
        "survey complete"
    );

    Ok(Survey {
        matched_dirs,
        statuses,
    })
}

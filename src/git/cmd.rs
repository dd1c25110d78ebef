// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command invocation.
//!
//! ```text
//! cmd.rs --> git CLI (fetch, status; stdout captured, stderr on failure)
//! ```

use crate::error::{GitError, HopResult};
use std::path::Path;

use super::query::is_git_repo;

/// Execute a git command inside `cwd` and capture its trimmed stdout.
///
/// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so a
/// credential prompt can never block a report, and `LC_ALL=C` so the status
/// phrasing stays in untranslated English.
pub(super) fn git_command(args: &[&str], cwd: &Path) -> HopResult<String> {
    use std::process::Command;

    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .env("LC_ALL", "C")
        .output()
        .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Reject paths lacking the version-control marker before spawning git.
fn ensure_repo(repo_path: &Path) -> HopResult<()> {
    if is_git_repo(repo_path) {
        Ok(())
    } else {
        Err(GitError::NotARepository {
            path: repo_path.display().to_string(),
        }
        .into())
    }
}

/// Fetch from the default remote.
///
/// # Errors
///
/// Returns `GitError::NotARepository` for a path without the marker, or
/// `GitError::CommandFailed` if the fetch itself fails, typically with the
/// remote unreachable or no remote configured.
pub fn fetch(repo_path: &Path) -> HopResult<()> {
    ensure_repo(repo_path)?;
    git_command(&["fetch", "--quiet"], repo_path)?;
    Ok(())
}

/// Run `git status` and capture its human-readable text.
///
/// Uses the long format, not porcelain: the classifier matches the long
/// format's phrases ("Your branch is behind ...").
///
/// # Errors
///
/// Returns `GitError::NotARepository` for a path without the marker, or
/// `GitError::CommandFailed` if the status query fails.
pub fn status_text(repo_path: &Path) -> HopResult<String> {
    ensure_repo(repo_path)?;
    git_command(&["status"], repo_path)
}

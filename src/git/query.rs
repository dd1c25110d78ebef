// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations.
//!
//! ```text
//! query.rs --> .git marker check (no subprocess)
//! ```

use std::path::Path;

/// Check if the directory contains the version-control marker.
///
/// A plain path test on `.git` rather than a `rev-parse` subprocess: the
/// candidates are immediate children of the configured root, so nested
/// work-tree membership never applies. This also matches a `.git` file as
/// used by linked worktrees and submodule checkouts.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").exists()
}

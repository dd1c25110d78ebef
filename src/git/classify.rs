// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Freshness classification from `git status` text.
//!
//! ```text
//! "Your branch is behind ..."        --> Stale
//! "... up to date / up-to-date ..."  --> UpToDate   (case-insensitive)
//! anything else, or no text at all   --> Unknown
//! ```
//!
//! The "behind" check runs first; git emits both phrases in some outputs and
//! the first match wins.

use serde::{Deserialize, Serialize};

/// Freshness of a local branch relative to its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Freshness {
    /// Local branch is behind its upstream.
    Stale,
    /// Local branch matches its upstream.
    UpToDate,
    /// Status text matched no known phrase.
    Unknown,
}

impl std::fmt::Display for Freshness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stale => write!(f, "stale"),
            Self::UpToDate => write!(f, "up-to-date"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify raw `git status` text. Pure, total, never fails.
///
/// Git has changed the "up to date" spelling across releases (hyphenated
/// before 2.15), so that phrase is matched case-insensitively with hyphens
/// treated as spaces. The "behind" phrase has been stable.
#[must_use]
pub fn classify(status_text: &str) -> Freshness {
    if status_text.contains("Your branch is behind") {
        return Freshness::Stale;
    }

    let normalized = status_text.to_lowercase().replace('-', " ");
    if normalized.contains("up to date") {
        return Freshness::UpToDate;
    }

    Freshness::Unknown
}

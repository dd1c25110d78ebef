// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/            (paths.root, required for repository commands)
//!   alpha/.git
//!   beta/.git
//!   notes/         (no marker, listed but filtered from repo commands)
//! ```
//!
//! `root` is the only configured path. It has no default; commands that scan
//! for repositories fail without it.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Repository root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Base directory under which all candidate checkouts live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve a relative root against the current working directory.
    ///
    /// Resolved paths keep reports and the `change-directory` output absolute
    /// regardless of where the tool was started.
    ///
    /// # Errors
    ///
    /// Returns an error if the current working directory cannot be determined.
    pub fn resolve(&mut self) -> Result<()> {
        if let Some(root) = &self.root
            && root.is_relative()
        {
            let absolute = std::path::absolute(root)
                .with_context(|| format!("failed to resolve paths.root '{}'", root.display()))?;
            self.root = Some(absolute);
        }
        Ok(())
    }

    /// Get the root path, returning an error if not set.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if the `root` path is not set.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "root".to_string(),
            }
            .into()
        })
    }
}

// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tool launchers.
//!
//! ```text
//! open_explorer  tools.explorer <dir>   (xdg-open, open, explorer)
//! open_editor    tools.editor   <dir>   (code, vim, ...)
//! ```
//!
//! Tools are resolved through PATH before spawning, and launched detached
//! with all three standard streams nulled so a GUI tool cannot tangle with
//! the terminal this process owns.

use crate::config::types::ToolsConfig;
use crate::error::{HopResult, ProcessError};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Resolve `tool` to an executable path.
///
/// Bare names go through PATH lookup; values carrying a separator are
/// validated as given.
///
/// # Errors
///
/// Returns a `ProcessError::ExecutableNotFound` if no matching executable
/// exists.
pub fn resolve_tool(tool: &Path) -> HopResult<PathBuf> {
    which::which(tool).map_or_else(
        |_| {
            Err(ProcessError::ExecutableNotFound {
                name: tool.display().to_string(),
            }
            .into())
        },
        Ok,
    )
}

/// Spawn `tool` with `target` as its only argument and leave it running.
///
/// # Errors
///
/// Returns a `ProcessError` if the tool cannot be resolved or spawned.
pub fn launch_tool(tool: &Path, target: &Path) -> HopResult<()> {
    let program = resolve_tool(tool)?;

    debug!(tool = %program.display(), target = %target.display(), "launching");

    Command::new(&program)
        .arg(target)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ProcessError::SpawnFailed {
            command: format!("{} {}", program.display(), target.display()),
            source,
        })?;

    Ok(())
}

/// Open `dir` in the configured file explorer.
///
/// # Errors
///
/// Returns a `ProcessError` if the explorer cannot be resolved or spawned.
pub fn open_explorer(tools: &ToolsConfig, dir: &Path) -> HopResult<()> {
    launch_tool(&tools.explorer, dir)
}

/// Open `dir` in the configured editor.
///
/// # Errors
///
/// Returns a `ProcessError` if the editor cannot be resolved or spawned.
pub fn open_editor(tools: &ToolsConfig, dir: &Path) -> HopResult<()> {
    launch_tool(&tools.editor, dir)
}

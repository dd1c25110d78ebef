// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive candidate selection.
//!
//! ```text
//! 0 candidates  -> None, no prompt
//! 1 candidate   -> returned directly, no prompt
//! N candidates  -> 1-based menu on the prompt stream, one line of input
//! ```
//!
//! The menu and prompt go to the injected writer (stderr in production) so
//! stdout stays reserved for command output such as the resolved path.

use crate::error::{HopResult, SelectionError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Pick one entry from `candidates`, prompting through `reader`/`writer`
/// when more than one is offered.
///
/// The menu rows are printed in candidate order; entering `k` returns the
/// k-th row. Exactly one line of input is read. Invalid input is an error,
/// not a retry.
///
/// # Errors
///
/// Returns a `SelectionError` when the input line cannot be read, is not a
/// number, or falls outside `1..=N`.
pub fn select_from<R, W>(
    reader: &mut R,
    writer: &mut W,
    candidates: &[PathBuf],
) -> HopResult<Option<PathBuf>>
where
    R: BufRead,
    W: Write,
{
    match candidates {
        [] => Ok(None),
        [single] => Ok(Some(single.clone())),
        _ => prompt_for_choice(reader, writer, candidates).map(Some),
    }
}

fn prompt_for_choice<R, W>(
    reader: &mut R,
    writer: &mut W,
    candidates: &[PathBuf],
) -> HopResult<PathBuf>
where
    R: BufRead,
    W: Write,
{
    let count = candidates.len();

    writeln!(writer, "Multiple matches:")?;
    for (i, path) in candidates.iter().enumerate() {
        writeln!(writer, "{:>3}) {}", i + 1, path.display())?;
    }
    write!(writer, "Select repository (1-{count}): ")?;
    writer.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|source| SelectionError::ReadFailed { source })?;

    let input = line.trim();
    let index: usize = input.parse().map_err(|_| SelectionError::InvalidIndex {
        input: input.to_string(),
    })?;

    if !(1..=count).contains(&index) {
        return Err(SelectionError::OutOfRange { index, count }.into());
    }

    debug!(index, path = %candidates[index - 1].display(), "selected candidate");
    Ok(candidates[index - 1].clone())
}

/// Pick one entry from `candidates` on the terminal.
///
/// Prompts on stderr and reads from stdin, leaving stdout untouched for
/// whatever the command needs to emit.
///
/// # Errors
///
/// Returns a `SelectionError` for unreadable or invalid input.
pub fn select_interactive(candidates: &[PathBuf]) -> HopResult<Option<PathBuf>> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();
    let mut writer = std::io::stderr();
    select_from(&mut reader, &mut writer, candidates)
}

/// Display name for a candidate, the final path component.
#[must_use]
pub fn candidate_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
}

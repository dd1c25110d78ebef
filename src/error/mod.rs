// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            HopError (~24 bytes)
//!                   |
//!     +------+------+------+------+
//!     |      |      |      |      |
//!     v      v      v      v      v
//!    Git   Config  Sel   Proc    Io
//!    Box    Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git       CommandFailed, NotARepository
//!   Config    MissingKey, InvalidValue
//!   Selection InvalidIndex, OutOfRange, ReadFailed
//!   Process   ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => HopError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HopError`].
pub type HopResult<T> = std::result::Result<T, HopError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum HopError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Interactive selection error.
    #[error("selection error: {0}")]
    Selection(#[from] Box<SelectionError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HopError {
                fn from(err: $error) -> Self {
                    HopError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    SelectionError => Selection,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Directory lacks the version-control marker.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Selection Errors ---

/// Interactive menu selection errors.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Input was not a parseable index.
    #[error("not a number: '{input}'")]
    InvalidIndex { input: String },

    /// Parsed index falls outside the menu.
    #[error("index {index} out of range (1-{count})")]
    OutOfRange { index: usize, count: usize },

    /// Reading the selection failed.
    #[error("failed to read selection: {source}")]
    ReadFailed {
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

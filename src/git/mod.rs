// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          Public API
//!   discovery.rs    ops.rs
//!        \         /     \
//!         v       v       v
//!      query.rs  cmd.rs  classify.rs
//!      .is_repo  fetch    Freshness
//!      (marker)  status   (pure text match)
//!                 |
//!                 v
//!              git CLI
//!        (captured stdout/stderr)
//! ```
//!
//! Freshness is judged from `git status` console text, never from repository
//! internals; the CLI's phrasing is the contract. Every invocation pins
//! `LC_ALL=C` to keep that phrasing stable.

pub mod classify;
pub mod cmd;
pub mod discovery;
pub mod ops;
pub mod query;

#[cfg(test)]
mod tests;

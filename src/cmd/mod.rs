// repohop: Locate, inspect, and jump between local git checkouts
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   stale, open (explorer/editor), cd, config
//! ```

pub mod cd;
pub mod config;
pub mod open;
pub mod stale;

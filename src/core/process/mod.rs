// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("cmake")
//!   .args() .cwd() .env() .capture_stdout()
//!   .run()
//!       --> which (bare names only)
//!       --> tokio::process::Command
//!       --> ProcessOutput { exit_code, stdout }
//! ```

pub mod builder;
mod runner;

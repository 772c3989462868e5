// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (dispatch)
//!          mode flags          banners, exit code
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  defaults, RAISE_*, --set |
//!              '-------------+-------------'
//!                            v
//!                          task
//!                        executor
//!                            |
//!                 +----------+----------+
//!                 v          v          v
//!              backend    pipeline    runner
//!             (per OS)    (steps)   process/dry-run
//!                 |
//!                 v
//!               tools
//!       conan/cmake/doxygen/make
//!
//!   +-----------------------------------------+
//!   |  core   platform, process, env          |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod task;

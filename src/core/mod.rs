// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for platform, process and environment management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//! platform     env     process
//!     |         |         |
//!  HostOs      Env     Builder
//!  Platform  env -0    Output
//! ```

pub mod env;
pub mod platform;
pub mod process;

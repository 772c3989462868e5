// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<String, String>)
//! Source: Env::from_nul_separated(`env -0` output)
//! Ops: set/get/iter
//! ```
//!
//! Conan's `conanbuild.sh` only exports variables into the shell that sources
//! it. The activation step sources it in a child shell, dumps the resulting
//! environment with `env -0`, and the captured `Env` is handed to every
//! following command of the pipeline.

pub mod container;

#[cfg(test)]
mod tests;

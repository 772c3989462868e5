// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command synthesis for the external build tools.
//!
//! ```text
//! Config --> Tool --> ProcessBuilder --> Step::Exec
//!   ConanTool     conan install
//!   CmakeTool     cmake configure | cmake --build
//!   DoxygenTool   doxygen
//!   MakeTool      make (in doc/latex)
//!
//! ActivationScript --> Step::Activate / Step::Deactivate
//! ```
//!
//! Tools only describe commands. Running them is up to the pipeline's runner.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::task::pipeline::Step;

pub mod activation;
pub mod cmake;
pub mod conan;
pub mod doxygen;
pub mod make;

/// Trait for tools that synthesize a single external command.
pub trait Tool {
    /// Returns the name of this tool (e.g., "conan", "cmake").
    fn name(&self) -> &'static str;

    /// Builds the command line for this tool.
    fn command(&self, config: &Config) -> ProcessBuilder;

    /// Wraps the command in a pipeline step.
    fn step(&self, config: &Config) -> Step {
        Step::Exec(self.command(config).name(self.name()))
    }
}

/// Prefixes relative paths with `./`, leaving absolute paths alone.
///
/// `cmake -B` and the shell `.` builtin treat `./x` and `x` differently from
/// bare words, so relative paths are always spelled out.
#[must_use]
pub fn dot_relative(path: &Path) -> PathBuf {
    if path.is_relative() && !path.starts_with(".") {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

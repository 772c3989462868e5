// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` tool for configure/build operations.
//!
//! ```text
//! CmakeTool
//! Operations: Configure | Build
//! Builder: definition/typed_definition/build_op
//!
//! configure --> cmake ./ -G<cmake.generator> -D<KEY>=<VALUE>... -B./build/<Type>
//! build     --> cmake --build ./build/<Type>
//! ```
//!
//! Definitions are emitted in key order.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use super::{Tool, dot_relative};
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CmakeOperation {
    Configure,
    Build,
}

/// `CMake` tool for the project in the current directory.
#[derive(Debug, Clone)]
pub struct CmakeTool {
    build_dir: PathBuf,
    definitions: BTreeMap<String, OsString>,
    operation: CmakeOperation,
}

impl CmakeTool {
    /// Creates a configure operation targeting `build_dir`.
    #[must_use]
    pub fn new(build_dir: impl AsRef<Path>) -> Self {
        Self {
            build_dir: build_dir.as_ref().to_path_buf(),
            definitions: BTreeMap::new(),
            operation: CmakeOperation::Configure,
        }
    }

    /// Adds `-D<key>=<value>`.
    #[must_use]
    pub fn definition(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.definitions
            .insert(key.into(), value.as_ref().to_os_string());
        self
    }

    /// Adds `-D<key>:<type>=<value>`.
    #[must_use]
    pub fn typed_definition(self, key: &str, kind: &str, value: impl AsRef<OsStr>) -> Self {
        self.definition(format!("{key}:{kind}"), value)
    }

    /// Switches to `cmake --build` of the same directory.
    #[must_use]
    pub const fn build_op(mut self) -> Self {
        self.operation = CmakeOperation::Build;
        self
    }
}

impl Tool for CmakeTool {
    fn name(&self) -> &'static str {
        match self.operation {
            CmakeOperation::Configure => "cmake configure",
            CmakeOperation::Build => "cmake build",
        }
    }

    fn command(&self, config: &Config) -> ProcessBuilder {
        let builder = ProcessBuilder::new(&config.tools.cmake);
        let build_dir = dot_relative(&self.build_dir);

        match self.operation {
            CmakeOperation::Configure => {
                let definitions = self.definitions.iter().map(|(key, value)| {
                    let mut definition = OsString::from(format!("-D{key}="));
                    definition.push(value);
                    definition
                });

                let mut binary_dir = OsString::from("-B");
                binary_dir.push(&build_dir);

                builder
                    .arg("./")
                    .arg(format!("-G{}", config.cmake.generator))
                    .args(definitions)
                    .arg(binary_dir)
            }
            CmakeOperation::Build => builder.arg("--build").arg(build_dir),
        }
    }
}

#[cfg(test)]
mod tests;

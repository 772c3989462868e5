// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for raise-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ToolsConfig, PathsConfig, CmakeConfig
//! ```
//!
//! # Build Type
//!
//! ```text
//! BuildType: Release | Debug
//!   Display --> "Release" / "Debug"  (conan build_type, CMAKE_BUILD_TYPE, dir name)
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// Build type of a single build tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildType {
    Release,
    Debug,
}

impl BuildType {
    /// Returns the per-type directory name under `build/` and `conan/`.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Release => "Release",
            Self::Debug => "Debug",
        }
    }
}

impl std::fmt::Display for BuildType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print the commands instead of running them.
    pub dry: bool,
}

/// External tool executables.
///
/// Bare names are resolved through PATH when a command is spawned.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub conan: PathBuf,
    pub cmake: PathBuf,
    pub doxygen: PathBuf,
    pub make: PathBuf,
    /// POSIX shell used to source conan's activation scripts.
    pub shell: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            conan: PathBuf::from("conan"),
            cmake: PathBuf::from("cmake"),
            doxygen: PathBuf::from("doxygen"),
            make: PathBuf::from("make"),
            shell: PathBuf::from("/bin/sh"),
        }
    }
}

/// Project-relative output directories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root of the per-type build trees.
    pub build: PathBuf,
    /// Root of the per-type conan output folders.
    pub conan: PathBuf,
    /// Documentation output.
    pub doc: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            build: PathBuf::from("build"),
            conan: PathBuf::from("conan"),
            doc: PathBuf::from("doc"),
        }
    }
}

impl PathsConfig {
    /// Build tree for one build type, e.g. `build/Release`.
    #[must_use]
    pub fn build_dir(&self, build_type: BuildType) -> PathBuf {
        self.build.join(build_type.dir_name())
    }

    /// Conan output folder for one build type, e.g. `conan/Release`.
    #[must_use]
    pub fn conan_dir(&self, build_type: BuildType) -> PathBuf {
        self.conan.join(build_type.dir_name())
    }

    /// LaTeX sources written by doxygen, e.g. `doc/latex`.
    #[must_use]
    pub fn latex_dir(&self) -> PathBuf {
        self.doc.join("latex")
    }
}

/// `CMake` options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmakeConfig {
    /// Generator passed as `-G`.
    pub generator: String,
}

impl Default for CmakeConfig {
    fn default() -> Self {
        Self {
            generator: "Ninja".to_string(),
        }
    }
}

// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conan tool for dependency installation.
//!
//! ```text
//! ConanTool::install(conan/Release, Release)
//!   --> conan install . --output-folder=conan/Release --build=missing -s build_type=Release
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::Tool;
use crate::config::Config;
use crate::config::types::BuildType;
use crate::core::process::builder::ProcessBuilder;

/// `conan install` of the recipe in the current directory for one build type.
///
/// Packages without a prebuilt binary are built from source.
#[derive(Debug, Clone)]
pub struct ConanTool {
    output_folder: PathBuf,
    build_type: BuildType,
}

impl ConanTool {
    #[must_use]
    pub fn install(output_folder: impl AsRef<Path>, build_type: BuildType) -> Self {
        Self {
            output_folder: output_folder.as_ref().to_path_buf(),
            build_type,
        }
    }
}

impl Tool for ConanTool {
    fn name(&self) -> &'static str {
        "conan"
    }

    fn command(&self, config: &Config) -> ProcessBuilder {
        let mut output_folder = OsString::from("--output-folder=");
        output_folder.push(&self.output_folder);

        ProcessBuilder::new(&config.tools.conan)
            .arg("install")
            .arg(".")
            .arg(output_folder)
            .arg("--build=missing")
            .arg("-s")
            .arg(format!("build_type={}", self.build_type))
    }
}

#[cfg(test)]
mod tests;

// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conan environment activation scripts.
//!
//! ```text
//! conan/<Type>/conanbuild.sh             --> Step::Activate
//!   sh -c '. "$1" && env -0' sh ./conan/<Type>/conanbuild.sh
//!   stdout: KEY=VALUE\0KEY=VALUE\0...
//!
//! conan/<Type>/deactivate_conanbuild.sh  --> Step::Deactivate
//!   sh -c '. "$1"' sh ./conan/<Type>/deactivate_conanbuild.sh
//! ```
//!
//! The script path is passed as `$1` and never spliced into the shell text.

use std::path::{Path, PathBuf};

use super::dot_relative;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::task::pipeline::Step;

const SOURCE_AND_DUMP: &str = ". \"$1\" && env -0";
const SOURCE_ONLY: &str = ". \"$1\"";

/// Name of `$0` inside the shell.
const ARGV0: &str = "sh";

/// A shell script that exports (or unsets) environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationScript {
    path: PathBuf,
}

impl ActivationScript {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `conanbuild.sh` in a conan output folder.
    #[must_use]
    pub fn conanbuild(conan_dir: &Path) -> Self {
        Self::new(conan_dir.join("conanbuild.sh"))
    }

    /// `deactivate_conanbuild.sh` in a conan output folder.
    #[must_use]
    pub fn deactivate_conanbuild(conan_dir: &Path) -> Self {
        Self::new(conan_dir.join("deactivate_conanbuild.sh"))
    }

    /// Sources the script and prints the resulting environment.
    #[must_use]
    pub fn capture_command(&self, config: &Config) -> ProcessBuilder {
        self.shell(config, SOURCE_AND_DUMP)
            .capture_stdout()
            .name("activate")
    }

    /// Sources the script.
    #[must_use]
    pub fn source_command(&self, config: &Config) -> ProcessBuilder {
        self.shell(config, SOURCE_ONLY).name("deactivate")
    }

    #[must_use]
    pub fn activate_step(&self, config: &Config) -> Step {
        Step::Activate(self.capture_command(config))
    }

    #[must_use]
    pub fn deactivate_step(&self, config: &Config) -> Step {
        Step::Deactivate(self.source_command(config))
    }

    fn shell(&self, config: &Config, script: &str) -> ProcessBuilder {
        ProcessBuilder::new(&config.tools.shell)
            .arg("-c")
            .arg(script)
            .arg(ARGV0)
            .arg(dot_relative(&self.path))
    }
}

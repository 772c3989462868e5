// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Make tool, used for the LaTeX output of doxygen.

use std::path::{Path, PathBuf};

use super::Tool;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;

/// `make` of the default target inside a directory.
#[derive(Debug, Clone)]
pub struct MakeTool {
    dir: PathBuf,
}

impl MakeTool {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Tool for MakeTool {
    fn name(&self) -> &'static str {
        "make"
    }

    fn command(&self, config: &Config) -> ProcessBuilder {
        ProcessBuilder::new(&config.tools.make).cwd(&self.dir)
    }
}

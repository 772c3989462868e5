// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Doxygen tool.
//!
//! Runs `doxygen` in the project root, which reads `Doxyfile`.

use super::Tool;
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;

#[derive(Debug, Clone, Copy, Default)]
pub struct DoxygenTool;

impl Tool for DoxygenTool {
    fn name(&self) -> &'static str {
        "doxygen"
    }

    fn command(&self, config: &Config) -> ProcessBuilder {
        ProcessBuilder::new(&config.tools.doxygen)
    }
}

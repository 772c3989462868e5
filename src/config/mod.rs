// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for raise-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. RAISE_* env vars
//! 3. --set KEY=VALUE
//! 4. CLI flags (--dry)
//! ```
//!
//! There are no configuration files; the project layout is fixed by convention
//! and only tool locations and directory roots can be overridden.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RAISE_GLOBAL_DRY=true         → global.dry = true
//! RAISE_TOOLS_CMAKE=/opt/cmake  → tools.cmake = "/opt/cmake"
//! RAISE_PATHS_BUILD=out         → paths.build = "out"
//! RAISE_CMAKE_GENERATOR=Ninja   → cmake.generator = "Ninja"
//! ```

pub mod loader;
pub mod types;


use serde::Deserialize;
use std::collections::BTreeMap;

use loader::ConfigLoader;
use types::{CmakeConfig, GlobalConfig, PathsConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// External tool executables.
    pub tools: ToolsConfig,
    /// Output directories.
    pub paths: PathsConfig,
    /// `CMake` options.
    pub cmake: CmakeConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use raise_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .with_env_prefix("RAISE")
    ///     .apply_overrides(&["tools.cmake=/opt/cmake/bin/cmake"])?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert("global.dry", self.global.dry.to_string());
        options.insert("tools.conan", self.tools.conan.display().to_string());
        options.insert("tools.cmake", self.tools.cmake.display().to_string());
        options.insert("tools.doxygen", self.tools.doxygen.display().to_string());
        options.insert("tools.make", self.tools.make.display().to_string());
        options.insert("tools.shell", self.tools.shell.display().to_string());
        options.insert("paths.build", self.paths.build.display().to_string());
        options.insert("paths.conan", self.paths.conan.display().to_string());
        options.insert("paths.doc", self.paths.doc.display().to_string());
        options.insert("cmake.generator", self.cmake.generator.clone());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

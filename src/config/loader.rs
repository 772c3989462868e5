// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .with_env_prefix("RAISE")
//!   .apply_overrides(--set KEY=VALUE ...)
//!   .set()
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Only `<PREFIX>_<SECTION>_*` variables naming one of the configuration
//! sections are read, so unrelated variables sharing the prefix (for example
//! `RAISE_HOME`) are ignored. Unknown keys inside a known section are still
//! rejected.

use std::collections::HashMap;

use super::Config;
use crate::error::{ConfigError, Result};

/// Top-level sections of [`Config`].
const SECTIONS: [&str; 4] = ["global", "tools", "paths", "cmake"];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_source: Option<HashMap<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_source: None,
        }
    }

    /// Reads `<PREFIX>_<SECTION>_<KEY>` environment variables on `build()`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Uses `vars` instead of the process environment for the prefixed lookup.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies `KEY=VALUE` overrides, where `KEY` is `section.key` or
    /// `section/key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for entries without `=` or with an
    /// empty key.
    pub fn apply_overrides<S: AsRef<str>>(self, overrides: &[S]) -> Result<Self> {
        let mut loader = self;
        for entry in overrides {
            let (key, value) = parse_override(entry.as_ref())?;
            loader = loader.set(&key, value)?;
        }
        Ok(loader)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self
                    .env_source
                    .unwrap_or_else(|| std::env::vars().collect());
                self.builder.add_source(
                    config::Environment::with_prefix(prefix)
                        .separator("_")
                        .try_parsing(true)
                        .source(Some(section_vars(prefix, vars))),
                )
            }
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the variables that address a known section under `prefix`.
fn section_vars(prefix: &str, vars: HashMap<String, String>) -> HashMap<String, String> {
    vars.into_iter()
        .filter(|(key, _)| {
            let key = key.to_ascii_lowercase();
            key.strip_prefix(&prefix.to_ascii_lowercase())
                .and_then(|rest| rest.strip_prefix('_'))
                .and_then(|rest| rest.split_once('_'))
                .is_some_and(|(section, _)| SECTIONS.contains(&section))
        })
        .collect()
}

fn parse_override(entry: &str) -> std::result::Result<(String, String), ConfigError> {
    let Some((key, value)) = entry.split_once('=') else {
        return Err(ConfigError::InvalidOverride(entry.to_string()));
    };
    let key = key.trim().replace('/', ".");
    if key.is_empty() {
        return Err(ConfigError::InvalidOverride(entry.to_string()));
    }
    Ok((key, value.trim().to_string()))
}

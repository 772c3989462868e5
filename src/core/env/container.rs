// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable set.

use std::collections::BTreeMap;

use tracing::{Level, debug, enabled, trace};

/// A set of environment variables, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Parses `KEY=VALUE` records separated by NUL bytes, as printed by
    /// `env -0`.
    ///
    /// Values may contain newlines and `=`; records without `=` or with an
    /// empty key are skipped.
    #[must_use]
    pub fn from_nul_separated(output: &str) -> Self {
        let mut env = Self::new();

        for record in output.split('\0') {
            let record = record.trim_start_matches('\n');
            if record.is_empty() {
                continue;
            }

            if let Some((key, value)) = record.split_once('=')
                && !key.is_empty()
            {
                if enabled!(Level::TRACE) {
                    trace!(key = key, value = value, "captured env var");
                }
                env.set(key, value);
            }
        }

        debug!(count = env.len(), "Captured environment variables");
        env
    }

    /// Sets an environment variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

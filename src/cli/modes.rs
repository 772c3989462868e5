// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutually exclusive mode flags of each subcommand.
//!
//! ```text
//! build/rebuild/clean   -a|--all  -d|--debug  -r|--release     default: release
//! test                  -d|--debug  -r|--release               default: release
//! doc                   -i|--internal  -o|--official  -c|--clean  default: internal
//! ```

use clap::Args;

/// Mode flags of `build`, `rebuild` and `clean`.
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct BuildModeArgs {
    /// All build-types (release, then debug).
    #[arg(short, long)]
    pub all: bool,

    /// Debug build-type.
    #[arg(short, long)]
    pub debug: bool,

    /// Release build-type (default).
    #[arg(short, long)]
    pub release: bool,
}

impl BuildModeArgs {
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        if self.all {
            "all"
        } else if self.debug {
            "debug"
        } else {
            "release"
        }
    }
}

/// Mode flags of `test`.
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct TestModeArgs {
    /// Tests the debug build-type.
    #[arg(short, long)]
    pub debug: bool,

    /// Tests the release build-type (default).
    #[arg(short, long)]
    pub release: bool,
}

impl TestModeArgs {
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        if self.debug { "debug" } else { "release" }
    }
}

/// Mode flags of `doc`.
#[derive(Debug, Clone, Copy, Default, Args)]
#[group(multiple = false)]
pub struct DocModeArgs {
    /// Builds internal documentation for developers (default).
    #[arg(short, long)]
    pub internal: bool,

    /// Builds official documentation for end users.
    #[arg(short, long)]
    pub official: bool,

    /// Cleans all documentation build artifacts.
    #[arg(short, long)]
    pub clean: bool,
}

impl DocModeArgs {
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        if self.official {
            "official"
        } else if self.clean {
            "clean"
        } else {
            "internal"
        }
    }
}

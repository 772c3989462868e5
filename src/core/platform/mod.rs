// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Host platform descriptor.
//!
//! ```text
//! Platform::detect()   std::env::consts::{OS, ARCH}
//!     linux   --> HostOs::Linux    "Linux"
//!     macos   --> HostOs::Darwin   "Darwin"
//!     windows --> HostOs::Windows  "Windows"
//!     other   --> HostOs::Unknown  (name kept verbatim)
//!
//! target() --> "Linux/x86_64"
//! ```
//!
//! Built once in `main` and handed to the executor by value.

use std::fmt;

/// Operating system family of the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostOs {
    Linux,
    Darwin,
    Windows,
    /// An OS without a known family; carries the name it reported.
    Unknown(String),
}

impl HostOs {
    /// Classifies an OS name.
    ///
    /// Accepts Rust's `std::env::consts::OS` spelling (`macos`) as well as the
    /// kernel names (`Darwin`), case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "linux" => Self::Linux,
            "macos" | "darwin" => Self::Darwin,
            "windows" => Self::Windows,
            _ => Self::Unknown(name.to_string()),
        }
    }

    /// Returns the display name of this OS.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Linux => "Linux",
            Self::Darwin => "Darwin",
            Self::Windows => "Windows",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// OS and architecture of the machine running the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    os: HostOs,
    arch: String,
}

impl Platform {
    /// Creates a platform descriptor from an OS name and an architecture.
    #[must_use]
    pub fn new(os: &str, arch: impl Into<String>) -> Self {
        Self {
            os: HostOs::from_name(os),
            arch: arch.into(),
        }
    }

    /// Describes the platform this binary runs on.
    #[must_use]
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    #[must_use]
    pub const fn os(&self) -> &HostOs {
        &self.os
    }

    /// Returns `<os>/<arch>`, as shown in the banners.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests;

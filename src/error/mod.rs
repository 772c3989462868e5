// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        RaiseError (~16 bytes)
//!             |
//!     +-------+-------+
//!     |       |       |
//!     v       v       v
//!   Task   Process    Fs
//!   Box      Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Task     UnsupportedMode, AggregateTestMode,
//!            UnsupportedPlatform, UndetectablePlatform
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs       RemoveFailed
//!
//! exit_code(): NonZeroExit --> tool's own code
//!              ExecutableNotFound/SpawnFailed --> 127
//!              everything else --> 1
//!
//! ConfigError is only raised while loading the configuration, before any
//! task exists; it travels through `anyhow` to `main`, which exits with 1.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RaiseError`].
pub type RaiseResult<T> = std::result::Result<T, RaiseError>;

/// Exit code reported for any failure that carries no code of its own.
pub const FAILURE: i32 = 1;

/// Exit code reported when an external tool could not be started at all.
pub const COMMAND_NOT_FOUND: i32 = 127;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum RaiseError {
    /// Task validation or platform error.
    #[error(transparent)]
    Task(#[from] Box<TaskError>),

    /// Process execution error.
    #[error(transparent)]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

impl RaiseError {
    /// Returns the process exit code this error maps to.
    ///
    /// A failing external tool passes its own exit code through unchanged.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Process(err) => err.exit_code(),
            _ => FAILURE,
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RaiseError {
                fn from(err: $error) -> Self {
                    RaiseError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    TaskError => Task,
    ProcessError => Process,
    FsError => Fs,
}

// --- Task Errors ---

/// Errors raised before any external tool runs.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Mode is not a member of the subcommand's allowed set.
    #[error("Build-mode {mode} not supported or unknown")]
    UnsupportedMode { mode: String },

    /// `test` was asked to run both build types.
    #[error("Build-mode {mode} not supported for testing. Choose 'release' or 'debug'.")]
    AggregateTestMode { mode: String },

    /// No command sequence exists for this task on the host OS.
    #[error("No {task} task specified for {os}")]
    UnsupportedPlatform { task: &'static str, os: String },

    /// The host OS could not be classified.
    #[error("Unable to detect underlying platform/OS ({os})")]
    UndetectablePlatform { os: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

impl ProcessError {
    /// Returns the exit code for this failure.
    ///
    /// Signals and other codes outside `1..=255` collapse to [`FAILURE`].
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ExecutableNotFound { .. } | Self::SpawnFailed { .. } => COMMAND_NOT_FOUND,
            Self::NonZeroExit { code, .. } => {
                if *code > 0 && *code <= 255 {
                    *code
                } else {
                    FAILURE
                }
            }
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `--set` option was not of the form `key=value`.
    #[error("invalid override '{0}', expected KEY=VALUE")]
    InvalidOverride(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Recursive removal failed.
    #[error("failed to remove '{path}': {source}")]
    RemoveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;

// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! OS dispatch.
//!
//! ```text
//! Backend::select(&Platform)
//!   Linux          --> Reference     pipelines from `linux`
//!   Darwin/Windows --> Unsupported   "No <task> task specified for <os>"
//!   other          --> Undetectable  "Unable to detect underlying platform/OS (<os>)"
//! ```
//!
//! Every task asks the backend for permission first, so an unsupported host
//! never reaches the runner.

pub mod linux;


use tracing::{debug, info};

use crate::config::types::BuildType;
use crate::core::platform::{HostOs, Platform};
use crate::error::{RaiseResult, TaskError};
use crate::task::{DocMode, TaskContext};

/// Task family, as named in "No <task> task specified" messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// `build`, `rebuild` and `clean`.
    Build,
    Test,
    Documentation,
}

impl TaskKind {
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Test => "test",
            Self::Documentation => "documentation",
        }
    }
}

/// Command synthesis for the host OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Linux: the only OS with command sequences.
    Reference { os: String },
    /// A known OS without command sequences.
    Unsupported { os: String },
    /// An OS that could not be classified.
    Undetectable { os: String },
}

impl Backend {
    #[must_use]
    pub fn select(platform: &Platform) -> Self {
        let os = platform.os().name().to_string();
        let backend = match platform.os() {
            HostOs::Linux => Self::Reference { os },
            HostOs::Darwin | HostOs::Windows => Self::Unsupported { os },
            HostOs::Unknown(_) => Self::Undetectable { os },
        };
        debug!(backend = ?backend, "selected backend");
        backend
    }

    /// Checks that this backend has commands for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::UnsupportedPlatform` or
    /// `TaskError::UndetectablePlatform`.
    pub fn supports(&self, kind: TaskKind) -> RaiseResult<()> {
        match self {
            Self::Reference { os } if kind == TaskKind::Test => Err(unsupported(kind, os)),
            Self::Reference { .. } => Ok(()),
            Self::Unsupported { os } => Err(unsupported(kind, os)),
            Self::Undetectable { os } => {
                Err(TaskError::UndetectablePlatform { os: os.clone() }.into())
            }
        }
    }

    /// Configures and compiles one build tree.
    ///
    /// # Errors
    ///
    /// Returns a platform error or the first failing step's error.
    pub async fn build(&self, ctx: &TaskContext, build_type: BuildType) -> RaiseResult<()> {
        self.supports(TaskKind::Build)?;
        info!("Building {build_type}");
        linux::build_pipeline(ctx.config(), build_type)
            .run(ctx.runner())
            .await?;
        info!("Built {build_type}");
        Ok(())
    }

    /// Removes the build tree and conan folder of one build type.
    ///
    /// # Errors
    ///
    /// Returns a platform error or the first failing removal.
    pub async fn clean(&self, ctx: &TaskContext, build_type: BuildType) -> RaiseResult<()> {
        self.supports(TaskKind::Build)?;
        info!("Cleaning {build_type}");
        linux::clean_pipeline(ctx.config(), build_type)
            .run(ctx.runner())
            .await?;
        info!("Cleaned {build_type}");
        Ok(())
    }

    /// No OS defines a test task.
    ///
    /// # Errors
    ///
    /// Always returns a platform error.
    pub fn test(&self, build_type: BuildType) -> RaiseResult<()> {
        debug!(%build_type, "test requested");
        self.supports(TaskKind::Test)
    }

    /// Generates or removes the documentation.
    ///
    /// # Errors
    ///
    /// Returns a platform error or the first failing step's error.
    pub async fn doc(&self, ctx: &TaskContext, mode: DocMode) -> RaiseResult<()> {
        self.supports(TaskKind::Documentation)?;
        let (pipeline, start, done) = match mode {
            DocMode::Internal | DocMode::Official => (
                linux::doc_pipeline(ctx.config(), mode),
                format!("Building {} documentation", mode.name()),
                "Documentation built",
            ),
            DocMode::Clean => (
                linux::doc_clean_pipeline(ctx.config()),
                "Cleaning documentation".to_string(),
                "Documentation cleaned",
            ),
        };
        info!("{start}");
        pipeline.run(ctx.runner()).await?;
        info!("{done}");
        Ok(())
    }
}

fn unsupported(kind: TaskKind, os: &str) -> crate::error::RaiseError {
    TaskError::UnsupportedPlatform {
        task: kind.noun(),
        os: os.to_string(),
    }
    .into()
}

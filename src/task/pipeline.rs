// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered sequences of external steps.
//!
//! ```text
//! Pipeline "build Release" (Chain::And)
//!   Exec        conan install ...
//!   Activate    sh -c '. "$1" && env -0' sh ./conan/Release/conanbuild.sh
//!                 |  stdout parsed into Env
//!                 v
//!   Exec        cmake ./ ...          (runs with captured Env)
//!   Exec        cmake --build ...     (runs with captured Env)
//!   Deactivate  sh -c '. "$1"' sh ./conan/Release/deactivate_conanbuild.sh
//!                 |  Env dropped afterwards
//!
//! Chain::And          first failure stops the pipeline
//! Chain::Independent  every step runs; first failure is reported
//! ```

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::env::container::Env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{RaiseError, RaiseResult};
use crate::task::runner::Runner;

/// One external action of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run a program.
    Exec(ProcessBuilder),
    /// Run a command that prints an environment as `env -0` does; the result
    /// becomes the environment of every following step.
    Activate(ProcessBuilder),
    /// Run a command under the active environment, then drop that environment.
    Deactivate(ProcessBuilder),
    /// Recursively remove a directory.
    Remove(PathBuf),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exec(process) => write!(f, "exec {}", process.command_line()),
            Self::Activate(process) => write!(f, "activate {}", process.command_line()),
            Self::Deactivate(process) => write!(f, "deactivate {}", process.command_line()),
            Self::Remove(path) => write!(f, "remove {}", path.display()),
        }
    }
}

/// How step failures affect the rest of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chain {
    /// Stop at the first failing step.
    #[default]
    And,
    /// Attempt every step and report the first failure.
    Independent,
}

/// A named, ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    name: String,
    chain: Chain,
    steps: Vec<Step>,
}

impl Pipeline {
    /// Creates an empty pipeline whose steps are chained with AND.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chain: Chain::And,
            steps: Vec::new(),
        }
    }

    /// Creates an empty pipeline whose steps all run regardless of failures.
    #[must_use]
    pub fn independent(name: impl Into<String>) -> Self {
        Self {
            chain: Chain::Independent,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Runs the steps in order through `runner`.
    ///
    /// # Errors
    ///
    /// Returns the first step error. With [`Chain::And`] no step after it runs.
    pub async fn run(&self, runner: &dyn Runner) -> RaiseResult<()> {
        debug!(pipeline = %self.name, runner = runner.name(), steps = self.steps.len(), "start");

        let mut env: Option<Env> = None;
        let mut first_error: Option<RaiseError> = None;

        for step in &self.steps {
            debug!(pipeline = %self.name, %step, "step");

            if let Err(e) = run_step(step, runner, &mut env).await {
                match self.chain {
                    Chain::And => return Err(e),
                    Chain::Independent => {
                        warn!(pipeline = %self.name, %step, error = %e, "step failed");
                        first_error.get_or_insert(e);
                    }
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

async fn run_step(step: &Step, runner: &dyn Runner, env: &mut Option<Env>) -> RaiseResult<()> {
    match step {
        Step::Exec(process) => {
            runner.exec(&with_env(process, env.as_ref())).await?;
        }
        Step::Activate(process) => {
            let output = runner.exec(&with_env(process, env.as_ref())).await?;
            let captured = Env::from_nul_separated(output.stdout());
            // Dry runs capture nothing; keep inheriting the parent environment.
            if !captured.is_empty() {
                *env = Some(captured);
            }
        }
        Step::Deactivate(process) => {
            let result = runner.exec(&with_env(process, env.as_ref())).await;
            *env = None;
            result?;
        }
        Step::Remove(path) => runner.remove(path).await?,
    }
    Ok(())
}

fn with_env(process: &ProcessBuilder, env: Option<&Env>) -> ProcessBuilder {
    match env {
        Some(env) => process.clone().env(env.clone()),
        None => process.clone(),
    }
}

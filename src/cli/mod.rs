// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for raise-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! raise [global options] <command> [mode flag]
//! build   [-a|-d|-r]
//! rebuild [-a|-d|-r]
//! clean   [-a|-d|-r]
//! test    [-d|-r]
//! doc     [-i|-o|-c]
//! ```

pub mod global;
pub mod modes;


use crate::cli::global::GlobalOptions;
use crate::cli::modes::{BuildModeArgs, DocModeArgs, TestModeArgs};
use crate::task::{Invocation, Subcommand as Task};
use clap::{Parser, Subcommand};

/// Build task runner
///
/// Drives conan, cmake and doxygen for a C/C++ project.
#[derive(Debug, Parser)]
#[command(
    name = "raise",
    author,
    version,
    about = "'raise' is a Build-Tool to ease build-tasks on command line",
    long_about = "'raise' is a Build-Tool to ease build-tasks on command line.\n\n\
                  Dependencies are installed with conan into conan/<Type>, the\n\
                  project is configured and built with cmake into build/<Type>,\n\
                  and documentation is generated with doxygen into doc/.\n\
                  See `raise <command> --help` for the mode flags of a command.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// The subcommand build, aimed to compile, link, etc.
    Build(BuildModeArgs),

    /// The subcommand rebuild, aimed to clean and then build.
    Rebuild(BuildModeArgs),

    /// The subcommand clean, aimed to remove build artifacts.
    Clean(BuildModeArgs),

    /// The subcommand test, aimed to run the tests of a build.
    Test(TestModeArgs),

    /// The subcommand doc, aimed to build documentation.
    Doc(DocModeArgs),
}

impl Command {
    /// Returns the subcommand and its selected mode.
    #[must_use]
    pub fn invocation(&self) -> Invocation {
        match self {
            Self::Build(args) => Invocation::new(Task::Build, args.mode()),
            Self::Rebuild(args) => Invocation::new(Task::Rebuild, args.mode()),
            Self::Clean(args) => Invocation::new(Task::Clean, args.mode()),
            Self::Test(args) => Invocation::new(Task::Test, args.mode()),
            Self::Doc(args) => Invocation::new(Task::Doc, args.mode()),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

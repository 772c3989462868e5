// raise-rs: Build Task Runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pipelines of the reference platform.

use crate::config::Config;
use crate::config::types::BuildType;
use crate::task::DocMode;
use crate::task::pipeline::{Pipeline, Step};
use crate::task::tools::activation::ActivationScript;
use crate::task::tools::cmake::CmakeTool;
use crate::task::tools::conan::ConanTool;
use crate::task::tools::doxygen::DoxygenTool;
use crate::task::tools::make::MakeTool;
use crate::task::tools::{Tool, dot_relative};

/// conan install, activate, cmake configure, cmake build, deactivate.
#[must_use]
pub fn build_pipeline(config: &Config, build_type: BuildType) -> Pipeline {
    let conan_dir = config.paths.conan_dir(build_type);
    let build_dir = config.paths.build_dir(build_type);
    let toolchain = dot_relative(&conan_dir.join("conan_toolchain.cmake"));

    let configure = CmakeTool::new(&build_dir)
        .definition("CMAKE_BUILD_TYPE", build_type.to_string())
        .typed_definition("CMAKE_TOOLCHAIN_FILE", "PATH", &toolchain);
    let compile = CmakeTool::new(&build_dir).build_op();

    Pipeline::new(format!("build {build_type}"))
        .step(ConanTool::install(&conan_dir, build_type).step(config))
        .step(ActivationScript::conanbuild(&conan_dir).activate_step(config))
        .step(configure.step(config))
        .step(compile.step(config))
        .step(ActivationScript::deactivate_conanbuild(&conan_dir).deactivate_step(config))
}

/// Removes `build/<Type>` and `conan/<Type>`; both removals always run.
#[must_use]
pub fn clean_pipeline(config: &Config, build_type: BuildType) -> Pipeline {
    Pipeline::independent(format!("clean {build_type}"))
        .step(Step::Remove(config.paths.build_dir(build_type)))
        .step(Step::Remove(config.paths.conan_dir(build_type)))
}

/// doxygen, then make in the LaTeX output.
///
/// `internal` and `official` currently produce the same documentation.
#[must_use]
pub fn doc_pipeline(config: &Config, mode: DocMode) -> Pipeline {
    Pipeline::new(format!("doc {}", mode.name()))
        .step(DoxygenTool.step(config))
        .step(MakeTool::new(config.paths.latex_dir()).step(config))
}

#[must_use]
pub fn doc_clean_pipeline(config: &Config) -> Pipeline {
    Pipeline::new("doc clean").step(Step::Remove(config.paths.doc.clone()))
}

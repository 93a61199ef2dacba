// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for tecmod operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with tecmod Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during tecmod operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Module file does not exist at the given path
    #[error("Module file not found: {0:?}")]
    #[diagnostic(
        code(tecmod::module_not_found),
        help("Check that the module file path is correct and the file exists")
    )]
    ModuleNotFound(PathBuf),

    /// Bare module name not found on the search path
    #[error("No module named '{name}' on the search path")]
    #[diagnostic(
        code(tecmod::not_found_on_path),
        help("{}", searched_message(searched))
    )]
    NotFoundOnPath {
        name: String,
        searched: Vec<PathBuf>,
    },

    /// Failed to read module file
    #[error("Failed to read module file: {path:?}")]
    #[diagnostic(code(tecmod::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Invalid YAML in module file
    #[error("Invalid module file: {error}")]
    #[diagnostic(
        code(tecmod::invalid_yaml),
        help("Check YAML syntax and ensure 'api: tecmod/v0' is present")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Module conflicts with an already-active module
    #[error("Module '{module}' conflicts with active module '{active}'")]
    #[diagnostic(
        code(tecmod::conflict),
        help("Unload '{active}' before loading '{module}'")
    )]
    Conflict { module: String, active: String },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(tecmod::validation_failed))]
    ValidationFailed(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(tecmod::io_error))]
    Io(#[from] std::io::Error),
}

fn searched_message(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        "Set TECMOD_PATH or pass --path to add module directories".to_string()
    } else {
        format!(
            "Searched: {}",
            searched
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

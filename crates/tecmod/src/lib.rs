// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! tecmod - Environment-Module Loader Library
//!
//! This crate provides the core library for loading environment modules:
//! small declarative files that describe how a tool installation is exposed
//! to a shell session through environment variables.
//!
//! # Overview
//!
//! A module file lives next to (or points at, via a symlink alias) a tool
//! installation. Loading it resolves the file's real on-disk location, takes
//! the containing directory as the module root, and produces an ordered list
//! of environment mutations: the root variable is set, the root is prepended
//! to `PYTHONPATH`, and `<root>/bin` is prepended to `PATH`. The library
//! never mutates its own process environment; the caller applies the records,
//! typically by evaluating the generated startup script.
//!
//! # Example
//!
//! ```yaml
//! # a module file, e.g. modules/tec_util
//! api: tecmod/v0
//! description: "Tecplot data reduction utilities"
//!
//! # all optional; defaults derive from the module name
//! root_var: TEC_UTIL_ROOT
//! python_paths: ["."]
//! bin_paths: ["bin"]
//!
//! environment:
//!   - set: TEC_UTIL_DEBUG
//!     value: "0"
//! ```
//!
//! A module refuses to load while another module with the same name (or a
//! declared conflicting name) is active; the refusal happens before any
//! mutation is produced.

pub mod discovery;
pub mod environment;
pub mod error;
pub mod loader;
pub mod module;
pub mod resolve;
pub mod spec;

pub use discovery::{resolve_module_path, split_search_path, DiscoveryOptions};
pub use environment::{generate_startup_script, EnvOp};
pub use error::{Error, Result};
pub use loader::{load_module, ActiveModules, LoadOutcome};
pub use module::Module;
pub use resolve::{resolved_root, ModuleSource};
pub use spec::{ApiVersion, ModuleSpec};

/// Environment variable holding the colon-separated module search path.
pub const TECMOD_PATH_VAR: &str = "TECMOD_PATH";

/// Environment variable tracking the active module names.
pub const TECMOD_LOADED_VAR: &str = "TECMOD_LOADED";

/// Path-like variable receiving `<root>/bin` prepends.
pub const PATH_VAR: &str = "PATH";

/// Path-like variable receiving module root prepends.
pub const PYTHONPATH_VAR: &str = "PYTHONPATH";

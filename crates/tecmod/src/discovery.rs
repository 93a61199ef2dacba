// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Discovery of module files from module arguments.
//!
//! A module argument is either an explicit file path (absolute, relative,
//! or home-relative) or a bare module name looked up across the search
//! path directories.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./discovery_test.rs"]
mod discovery_test;

/// Options for module discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Directories from CLI flags (searched first).
    pub cli_paths: Vec<PathBuf>,

    /// Directories from the TECMOD_PATH environment variable.
    pub env_paths: Vec<PathBuf>,
}

impl DiscoveryOptions {
    /// All search directories in priority order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.cli_paths
            .iter()
            .chain(self.env_paths.iter())
            .cloned()
            .collect()
    }
}

/// Split a colon-separated search path value into directories.
///
/// Empty entries are skipped; `~/` entries are expanded.
pub fn split_search_path(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|entry| !entry.is_empty())
        .map(expand_home)
        .collect()
}

/// Resolve a module argument to a module file path.
///
/// An argument containing a path separator (or starting with `~`) is taken
/// as a file path; a bare name is searched across the discovery
/// directories. The file itself may still be a symlink alias, which the
/// resolver classifies later.
pub fn resolve_module_path(arg: &str, options: &DiscoveryOptions) -> crate::Result<PathBuf> {
    if arg.starts_with('~') {
        return Ok(expand_home(arg));
    }

    if arg.contains(std::path::MAIN_SEPARATOR) || Path::new(arg).is_absolute() {
        return Ok(PathBuf::from(arg));
    }

    // Bare name: first hit on the search path wins.
    let searched = options.search_dirs();
    for dir in &searched {
        let candidate = dir.join(arg);
        // symlink_metadata so a dangling alias still counts as a hit and
        // surfaces a resolution error instead of "not found on path".
        if std::fs::symlink_metadata(&candidate).is_ok() {
            tracing::debug!(module = arg, path = %candidate.display(), "found module on search path");
            return Ok(candidate);
        }
    }

    Err(crate::Error::NotFoundOnPath {
        name: arg.to_string(),
        searched,
    })
}

fn expand_home<S: AsRef<str>>(entry: S) -> PathBuf {
    let entry = entry.as_ref();
    if let Some(rel) = entry.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rel);
        }
    }
    PathBuf::from(entry)
}

// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Module file path resolution.
//!
//! A module file may be reached directly or through a symlink alias. The
//! resolver classifies the path up front instead of treating a failed
//! symlink read as control flow, and always derives the root from the real
//! on-disk file so that an alias and its target configure the same root.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./resolve_test.rs"]
mod resolve_test;

/// How a module file path refers to its on-disk file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleSource {
    /// The path names the module file itself.
    Direct(PathBuf),

    /// The path is a symlink alias for the module file.
    Symlink {
        /// The symlink as given.
        link: PathBuf,
        /// The raw link target, possibly relative to the link's directory.
        target: PathBuf,
    },
}

impl ModuleSource {
    /// Classify a module file path as a plain file or a symlink alias.
    ///
    /// Returns [`crate::Error::ModuleNotFound`] when nothing exists at the
    /// path at all.
    pub fn classify<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        // symlink_metadata does not follow the link, so a dangling alias
        // still classifies as a symlink.
        let meta = std::fs::symlink_metadata(path)
            .map_err(|_| crate::Error::ModuleNotFound(path.to_path_buf()))?;

        if meta.file_type().is_symlink() {
            let target = std::fs::read_link(path)?;
            tracing::debug!(link = %path.display(), target = %target.display(), "module file is a symlink");
            Ok(Self::Symlink {
                link: path.to_path_buf(),
                target,
            })
        } else {
            Ok(Self::Direct(path.to_path_buf()))
        }
    }

    /// The path as originally given (the alias for symlink sources).
    pub fn given_path(&self) -> &Path {
        match self {
            Self::Direct(path) => path,
            Self::Symlink { link, .. } => link,
        }
    }

    /// Resolve to the absolute canonical path of the real module file.
    ///
    /// A relative symlink target is interpreted relative to the link's own
    /// directory, so the result does not depend on the process working
    /// directory.
    pub fn real_file(&self) -> crate::Result<PathBuf> {
        let candidate = match self {
            Self::Direct(path) => path.clone(),
            Self::Symlink { link, target } => {
                if target.is_absolute() {
                    target.clone()
                } else {
                    let link_dir = link.parent().unwrap_or_else(|| Path::new("."));
                    link_dir.join(target)
                }
            }
        };

        dunce::canonicalize(&candidate)
            .map_err(|_| crate::Error::ModuleNotFound(candidate.clone()))
    }
}

/// Derive the module root: the directory holding the real module file.
///
/// This is the single source of truth for every path the module exposes,
/// regardless of whether it was loaded directly or via a symlink alias.
pub fn resolved_root<P: AsRef<Path>>(path: P) -> crate::Result<PathBuf> {
    let source = ModuleSource::classify(path)?;
    root_of(&source)
}

/// Root derivation for an already-classified source.
pub fn root_of(source: &ModuleSource) -> crate::Result<PathBuf> {
    let real = source.real_file()?;
    let root = real.parent().ok_or_else(|| {
        crate::Error::ValidationFailed(format!(
            "Module file has no parent directory: {}",
            real.display()
        ))
    })?;

    tracing::debug!(root = %root.display(), "resolved module root");
    Ok(root.to_path_buf())
}

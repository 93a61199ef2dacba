// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! A resolved module and its environment configurator.

use std::path::{Path, PathBuf};

use crate::environment::{CommentEnv, EnvOp, PrependEnv, SetEnv};
use crate::resolve::{root_of, ModuleSource};
use crate::spec::ModuleSpec;

#[cfg(test)]
#[path = "./module_test.rs"]
mod module_test;

/// A module file resolved to its on-disk root, ready to configure an
/// environment.
#[derive(Debug, Clone)]
pub struct Module {
    /// Module name: the file name of the path as given, so a symlink alias
    /// keeps its alias name.
    pub name: String,

    /// How the module file path referred to the file.
    pub source: ModuleSource,

    /// Absolute canonical directory holding the real module file.
    pub root: PathBuf,

    /// Parsed module file contents.
    pub spec: ModuleSpec,
}

impl Module {
    /// Resolve and parse a module file.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let source = ModuleSource::classify(path)?;
        let root = root_of(&source)?;

        // The alias keeps its own name even when the root comes from the
        // link target.
        let name = source
            .given_path()
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                crate::Error::ValidationFailed(format!(
                    "Cannot derive module name from path: {}",
                    path.display()
                ))
            })?
            .to_string();

        let spec = ModuleSpec::load(source.real_file()?)?;
        spec.validate()?;

        tracing::debug!(module = %name, root = %root.display(), "loaded module file");

        Ok(Self {
            name,
            source,
            root,
            spec,
        })
    }

    /// The variable set to this module's root.
    pub fn root_var(&self) -> String {
        self.spec.root_var_for(&self.name)
    }

    /// Every module name this module refuses to coexist with.
    ///
    /// The module's own name is always included.
    pub fn conflict_names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        names.extend(self.spec.conflicts.iter().map(String::as_str));
        names
    }

    /// Produce the ordered environment mutation records for this module.
    ///
    /// Pure with respect to the process environment: calling it any number
    /// of times yields the same records, and nothing is applied here. The
    /// records are emitted so that, once applied in order, the first listed
    /// python/bin path has the highest lookup priority.
    pub fn env_ops(&self) -> Vec<EnvOp> {
        let mut ops = Vec::new();

        if let Some(desc) = &self.spec.description {
            ops.push(EnvOp::Comment(CommentEnv {
                comment: format!("{}: {}", self.name, desc),
            }));
        }

        ops.push(EnvOp::Set(SetEnv {
            set: self.root_var(),
            value: self.root.display().to_string(),
        }));

        // A later prepend lands in front of an earlier one, so walk the
        // lists back to front to make listed order the precedence order.
        for rel in self.spec.python_paths.iter().rev() {
            ops.push(EnvOp::Prepend(PrependEnv {
                prepend: crate::PYTHONPATH_VAR.to_string(),
                value: root_join(&self.root, rel),
                separator: None,
            }));
        }

        for rel in self.spec.bin_paths.iter().rev() {
            ops.push(EnvOp::Prepend(PrependEnv {
                prepend: crate::PATH_VAR.to_string(),
                value: root_join(&self.root, rel),
                separator: None,
            }));
        }

        ops.extend(self.spec.environment.iter().cloned());

        ops
    }
}

/// Join a root-relative entry onto the root, with `.` meaning the root
/// itself.
fn root_join(root: &Path, rel: &str) -> String {
    if rel == "." {
        root.display().to_string()
    } else {
        root.join(rel).display().to_string()
    }
}

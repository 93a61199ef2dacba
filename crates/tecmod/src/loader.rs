// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Module loading: conflict enforcement and mutation assembly.

use crate::discovery::{resolve_module_path, DiscoveryOptions};
use crate::environment::{EnvOp, SetEnv};
use crate::module::Module;

#[cfg(test)]
#[path = "./loader_test.rs"]
mod loader_test;

/// The ordered set of currently active module names, as tracked in the
/// `TECMOD_LOADED` variable of the invoking shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveModules(Vec<String>);

impl ActiveModules {
    /// Parse from a colon-separated tracking value.
    pub fn from_env_value(value: &str) -> Self {
        Self(
            value
                .split(':')
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Render back to the colon-separated tracking value.
    pub fn to_env_value(&self) -> String {
        self.0.join(":")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|active| active == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A copy with the given module recorded as active.
    pub fn with(&self, name: &str) -> Self {
        let mut names = self.0.clone();
        names.push(name.to_string());
        Self(names)
    }
}

/// The result of loading a module: the mutations to apply and the updated
/// active set.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The resolved module.
    pub module: Module,

    /// Ordered mutations, including the tracking-variable update.
    pub ops: Vec<EnvOp>,

    /// Active set after this load.
    pub active: ActiveModules,
}

/// Load a module by argument and produce its environment mutations.
///
/// The conflict rule is enforced before any mutation is assembled: if the
/// module's name (or any name it declares a conflict with) is already
/// active, the load is refused and nothing is produced.
pub fn load_module(
    arg: &str,
    options: &DiscoveryOptions,
    active: &ActiveModules,
) -> crate::Result<LoadOutcome> {
    let path = resolve_module_path(arg, options)?;
    let module = Module::load(&path)?;

    for name in module.conflict_names() {
        if active.contains(name) {
            tracing::debug!(module = %module.name, conflict = name, "refusing conflicting load");
            return Err(crate::Error::Conflict {
                module: module.name.clone(),
                active: name.to_string(),
            });
        }
    }

    let mut ops = module.env_ops();

    // Keep the shell's tracking variable current so later loads see this
    // module as active.
    let active = active.with(&module.name);
    ops.push(EnvOp::Set(SetEnv {
        set: crate::TECMOD_LOADED_VAR.to_string(),
        value: active.to_env_value(),
    }));

    tracing::info!(module = %module.name, root = %module.root.display(), "module loaded");

    Ok(LoadOutcome {
        module,
        ops,
        active,
    })
}

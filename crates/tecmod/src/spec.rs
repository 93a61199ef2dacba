// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Module file parsing and data types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::environment::EnvOp;

#[cfg(test)]
#[path = "./spec_test.rs"]
mod spec_test;

/// API version for module files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "tecmod/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// A declarative module file.
///
/// Every field is optional; an empty file is a valid module whose behavior
/// is derived entirely from the module's name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModuleSpec {
    /// API version identifier.
    #[serde(default)]
    pub api: ApiVersion,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Variable set to the resolved root. Defaults to `<NAME>_ROOT` with
    /// the name upper-cased and non-identifier characters mapped to `_`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_var: Option<String>,

    /// Root-relative directories prepended to PYTHONPATH.
    #[serde(default = "default_python_paths")]
    pub python_paths: Vec<String>,

    /// Root-relative directories prepended to PATH.
    #[serde(default = "default_bin_paths")]
    pub bin_paths: Vec<String>,

    /// Extra conflicting module names. The module's own name always
    /// conflicts, whether listed here or not.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,

    /// Extra environment mutations, applied after the derived ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment: Vec<EnvOp>,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

fn default_python_paths() -> Vec<String> {
    vec![".".to_string()]
}

fn default_bin_paths() -> Vec<String> {
    vec!["bin".to_string()]
}

impl ModuleSpec {
    /// Parse a module spec from a YAML string.
    ///
    /// An empty document is accepted and yields the default spec, so a
    /// bare touched file is a working module.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // A comments-only document parses to null; treat it like an empty
        // file.
        if value.is_null() {
            return Ok(Self::default());
        }

        let with_version: ApiVersionMapping =
            serde_yaml::from_value(value.clone()).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => {
                serde_yaml::from_value(value).map_err(|e| crate::Error::InvalidYaml {
                    error: e,
                    yaml_content: yaml,
                })
            }
        }
    }

    /// Load a module spec from a file path.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut spec = Self::from_yaml(yaml)?;
        spec.source_path = Some(path.to_path_buf());
        Ok(spec)
    }

    /// Validate spec contents after loading.
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(var) = &self.root_var {
            if !is_valid_var_name(var) {
                return Err(crate::Error::ValidationFailed(format!(
                    "root_var is not a valid environment variable name: '{var}'"
                )));
            }
        }

        Ok(())
    }

    /// The root variable for a module with the given name, honoring an
    /// explicit `root_var:` when present.
    pub fn root_var_for(&self, name: &str) -> String {
        match &self.root_var {
            Some(var) => var.clone(),
            None => default_root_var(name),
        }
    }
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            description: None,
            root_var: None,
            python_paths: default_python_paths(),
            bin_paths: default_bin_paths(),
            conflicts: Vec::new(),
            environment: Vec::new(),
            source_path: None,
        }
    }
}

/// Derive the default root variable from a module name.
///
/// `tec_util` becomes `TEC_UTIL_ROOT`; any character that is not valid in
/// an environment variable name maps to `_`.
pub fn default_root_var(name: &str) -> String {
    let mut var: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    var.push_str("_ROOT");
    var
}

fn is_valid_var_name(var: &str) -> bool {
    let mut chars = var.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

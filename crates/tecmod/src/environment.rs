// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Environment mutation records and startup script generation.
//!
//! Loading a module never touches the loader's own environment. Instead the
//! configurator produces an ordered list of [`EnvOp`] records and the shell
//! integration applies them, typically by evaluating the script from
//! [`generate_startup_script`].

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;

/// Default separator for path-like variables.
const DEFAULT_SEPARATOR: &str = ":";

/// Set (overwrite) an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetEnv {
    /// Variable name.
    pub set: String,
    /// New value.
    pub value: String,
}

/// Prepend a value to a path-like environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrependEnv {
    /// Variable name.
    pub prepend: String,
    /// Value to place at the front.
    pub value: String,
    /// Separator between entries (defaults to `:`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// Append a value to a path-like environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppendEnv {
    /// Variable name.
    pub append: String,
    /// Value to place at the back.
    pub value: String,
    /// Separator between entries (defaults to `:`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

/// A comment line carried into the generated script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommentEnv {
    /// Comment text.
    pub comment: String,
}

/// A single environment mutation record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EnvOp {
    Set(SetEnv),
    Prepend(PrependEnv),
    Append(AppendEnv),
    Comment(CommentEnv),
}

impl EnvOp {
    /// The variable this operation touches, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::Set(op) => Some(&op.set),
            Self::Prepend(op) => Some(&op.prepend),
            Self::Append(op) => Some(&op.append),
            Self::Comment(_) => None,
        }
    }
}

/// Escape a value for inclusion inside a double-quoted shell word.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '"' | '$' | '`' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Render ordered mutation records as an eval-able POSIX shell script.
///
/// Prepends render as `export VAR="<value><sep>${VAR}"` so the new entry
/// takes lookup priority; appends mirror that at the back. No dedup is
/// performed, matching module-loader prepend semantics.
pub fn generate_startup_script(ops: &[EnvOp]) -> String {
    let mut script = String::new();

    for op in ops {
        match op {
            EnvOp::Comment(c) => {
                script.push_str(&format!("# {}\n", c.comment));
            }
            EnvOp::Set(s) => {
                script.push_str(&format!("export {}=\"{}\"\n", s.set, escape(&s.value)));
            }
            EnvOp::Prepend(p) => {
                let sep = p.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
                script.push_str(&format!(
                    "export {var}=\"{value}{sep}${{{var}}}\"\n",
                    var = p.prepend,
                    value = escape(&p.value),
                    sep = sep,
                ));
            }
            EnvOp::Append(a) => {
                let sep = a.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR);
                script.push_str(&format!(
                    "export {var}=\"${{{var}}}{sep}{value}\"\n",
                    var = a.append,
                    value = escape(&a.value),
                    sep = sep,
                ));
            }
        }
    }

    script
}

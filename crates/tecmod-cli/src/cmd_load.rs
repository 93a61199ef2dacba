// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `tecmod load` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use tecmod::environment::EnvOp;

/// Emit the shell script that loads a module
///
/// Intended to be applied by the shell integration:
/// `eval "$(tecmod load tec_util)"`.
#[derive(Debug, Args)]
pub struct CmdLoad {
    /// Module name or module file path
    pub module: String,

    /// Additional module directories (searched before TECMOD_PATH)
    #[clap(short = 'p', long = "path")]
    pub paths: Vec<PathBuf>,

    /// Show what would be loaded without emitting a script
    #[clap(long)]
    pub dry_run: bool,
}

impl CmdLoad {
    pub fn run(&mut self) -> Result<i32> {
        // Parse TECMOD_PATH into search directories
        let env_paths = std::env::var(tecmod::TECMOD_PATH_VAR)
            .ok()
            .map(|s| tecmod::split_search_path(&s))
            .unwrap_or_default();

        let options = tecmod::DiscoveryOptions {
            cli_paths: self.paths.clone(),
            env_paths,
        };

        // Conflict state comes from the invoking shell's tracking variable
        let active = std::env::var(tecmod::TECMOD_LOADED_VAR)
            .ok()
            .map(|s| tecmod::ActiveModules::from_env_value(&s))
            .unwrap_or_default();

        let outcome = tecmod::load_module(&self.module, &options, &active)?;

        if self.dry_run {
            self.show_summary(&outcome);
            return Ok(0);
        }

        // Stdout carries only the eval-able script
        print!("{}", tecmod::generate_startup_script(&outcome.ops));

        Ok(0)
    }

    fn show_summary(&self, outcome: &tecmod::LoadOutcome) {
        eprintln!("{} {}", "Would load:".bold(), outcome.module.name.cyan());
        eprintln!("  root: {}", outcome.module.root.display().to_string().green());
        eprintln!();

        for op in &outcome.ops {
            match op {
                EnvOp::Set(s) => {
                    eprintln!("  {} = {}", s.set.cyan(), s.value.green());
                }
                EnvOp::Prepend(p) => {
                    eprintln!("  {} = {} + ${}", p.prepend.cyan(), p.value.green(), p.prepend);
                }
                EnvOp::Append(a) => {
                    eprintln!("  {} = ${} + {}", a.append.cyan(), a.append, a.value.green());
                }
                EnvOp::Comment(c) => {
                    eprintln!("  # {}", c.comment.dimmed());
                }
            }
        }
    }
}

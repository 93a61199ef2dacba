// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Verify that a module file parses and resolves.

use clap::Args;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

/// Verify that a module file parses and resolves
#[derive(Debug, Args)]
pub struct CmdCheck {
    /// Module name or module file path
    pub module: String,

    /// Additional module directories (searched before TECMOD_PATH)
    #[clap(short = 'p', long = "path")]
    pub paths: Vec<PathBuf>,

    /// Suppress success output
    #[clap(short, long)]
    pub quiet: bool,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let env_paths = std::env::var(tecmod::TECMOD_PATH_VAR)
            .ok()
            .map(|s| tecmod::split_search_path(&s))
            .unwrap_or_default();

        let options = tecmod::DiscoveryOptions {
            cli_paths: self.paths.clone(),
            env_paths,
        };

        let path = match tecmod::resolve_module_path(&self.module, &options) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                return Ok(1);
            }
        };

        match tecmod::Module::load(&path) {
            Ok(module) => {
                if !self.quiet {
                    println!(
                        "{} Module '{}' resolves to {}",
                        "✓".green(),
                        module.name,
                        module.root.display()
                    );
                }
                Ok(0)
            }
            Err(e) => {
                eprintln!("{} {}", "✗".red(), e);
                Ok(1)
            }
        }
    }
}

// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `tecmod show` command.

use clap::Args;
use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use tecmod::environment::EnvOp;
use tecmod::resolve::ModuleSource;

/// Display a module's resolution and mutations
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Module name or module file path
    pub module: String,

    /// Additional module directories (searched before TECMOD_PATH)
    #[clap(short = 'p', long = "path")]
    pub paths: Vec<PathBuf>,

    /// Output format: table, yaml
    #[clap(long, default_value = "table")]
    pub format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let env_paths = std::env::var(tecmod::TECMOD_PATH_VAR)
            .ok()
            .map(|s| tecmod::split_search_path(&s))
            .unwrap_or_default();

        let options = tecmod::DiscoveryOptions {
            cli_paths: self.paths.clone(),
            env_paths,
        };

        let path = tecmod::resolve_module_path(&self.module, &options)?;
        let module = tecmod::Module::load(&path)?;
        let ops = module.env_ops();

        if self.format == "yaml" {
            self.show_yaml(&module, &ops);
        } else {
            self.show_table(&module, &ops);
        }

        Ok(0)
    }

    fn show_table(&self, module: &tecmod::Module, ops: &[EnvOp]) {
        println!("{}", "Module:".bold());
        println!();
        println!("  name: {}", module.name.cyan());

        match &module.source {
            ModuleSource::Direct(path) => {
                println!("  file: {}", path.display().to_string().green());
            }
            ModuleSource::Symlink { link, target } => {
                println!(
                    "  file: {} {} {}",
                    link.display().to_string().green(),
                    "->".dimmed(),
                    target.display().to_string().yellow()
                );
            }
        }

        println!("  root: {}", module.root.display().to_string().green());

        if let Some(desc) = &module.spec.description {
            println!("  {}", desc.dimmed());
        }

        println!();
        println!("{}", "Environment Mutations:".bold());
        println!();

        for (i, op) in ops.iter().enumerate() {
            match op {
                EnvOp::Set(s) => {
                    println!("  {}. {} = {}", i + 1, s.set.cyan(), s.value.green());
                }
                EnvOp::Prepend(p) => {
                    println!(
                        "  {}. {} = {} + ${}",
                        i + 1,
                        p.prepend.cyan(),
                        p.value.green(),
                        p.prepend
                    );
                }
                EnvOp::Append(a) => {
                    println!(
                        "  {}. {} = ${} + {}",
                        i + 1,
                        a.append.cyan(),
                        a.append,
                        a.value.green()
                    );
                }
                EnvOp::Comment(c) => {
                    println!("  # {}", c.comment.dimmed());
                }
            }
        }

        let mut vars: Vec<&str> = ops.iter().filter_map(|op| op.variable()).collect();
        vars.sort_unstable();
        vars.dedup();

        println!();
        println!("Total: {} mutation(s) across {} variable(s)", ops.len(), vars.len());
    }

    fn show_yaml(&self, module: &tecmod::Module, ops: &[EnvOp]) {
        println!("# Module: {}", module.name);
        println!("# Root: {}", module.root.display());
        println!();

        println!("environment:");
        for op in ops {
            match op {
                EnvOp::Set(s) => {
                    println!("  - set: {}", s.set);
                    println!("    value: {}", s.value);
                }
                EnvOp::Prepend(p) => {
                    println!("  - prepend: {}", p.prepend);
                    println!("    value: {}", p.value);
                    if let Some(sep) = &p.separator {
                        println!("    separator: {}", sep);
                    }
                }
                EnvOp::Append(a) => {
                    println!("  - append: {}", a.append);
                    println!("    value: {}", a.value);
                    if let Some(sep) = &a.separator {
                        println!("    separator: {}", sep);
                    }
                }
                EnvOp::Comment(c) => {
                    println!("  - comment: {}", c.comment);
                }
            }
        }
    }
}

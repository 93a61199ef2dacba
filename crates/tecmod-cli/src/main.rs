// Copyright (c) Contributors to the tecmod project.
// SPDX-License-Identifier: Apache-2.0

//! tecmod - Environment-Module Loader CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_check;
mod cmd_load;
mod cmd_show;

use cmd_check::CmdCheck;
use cmd_load::CmdLoad;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "tecmod",
    about = "Environment-Module Loader",
    version,
    long_about = "Load declarative module files and emit the shell environment mutations that expose a tool on PATH and PYTHONPATH"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Emit the shell script that loads a module
    Load(CmdLoad),

    /// Display a module's resolution and mutations
    Show(CmdShow),

    /// Verify that a module file parses and resolves
    Check(CmdCheck),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging on stderr; stdout is reserved for eval-able output
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Load(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{
    loops::{self, LoopsArgs},
    psi4::{self, Psi4Args},
};

#[derive(Parser, Debug)]
#[command(name = "nrx-sim", about = "Symbolic psi4 assembly and loop-nest emission")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble psi4 and print its JSON report.
    Psi4(Psi4Args),
    /// Print the header and footer of a loop nest.
    Loops(LoopsArgs),
}

impl Cli {
    pub fn run(&self) -> Result<(), Box<dyn Error>> {
        match &self.command {
            Command::Psi4(args) => psi4::run(args),
            Command::Loops(args) => loops::run(args),
        }
    }
}

/// Filter from `RUST_LOG` when it holds valid directives, else from the `-v` count.
pub fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

//! Command implementations behind the `nrx-sim` binary.
//!
//! Every command renders its output to a value; `run` prints it.

pub mod cli;
pub mod commands;

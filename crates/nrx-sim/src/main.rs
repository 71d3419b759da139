use std::error::Error;

use clap::Parser;
use nrx_sim::cli::{log_filter, Cli};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}

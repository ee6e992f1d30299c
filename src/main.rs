//! The main entry point for the Skema CLI.

#![warn(missing_docs)]

use std::process::ExitCode;

use clap::Parser;
use skema::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    let Args { log, .. } = args;

    let _guard = cli::init_global_subscriber(log);

    if let Err(e) = cli::run(args) {
        skema::fatal!(e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

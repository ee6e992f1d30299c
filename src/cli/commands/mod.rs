//! This module defines the subcommands for the Skema CLI.
//!
//! Each subcommand is implemented in its own module and is responsible for
//! handling its own arguments and logic. The `run` function in this module
//! dispatches to the appropriate subcommand based on the parsed arguments.

use clap::Subcommand;

use super::Args;

mod inspect;

//================================================================================================
// Types
//================================================================================================

/// The subcommands for the Skema CLI.
#[derive(Subcommand)]
pub(super) enum Commands {
    /// Resolve a source ref and print its fully typed form.
    ///
    /// A source ref names where an input or output artifact lives: a local
    /// directory, an archive, a git repository, a single serialized file, or
    /// a remote module, optionally qualified by `#key=value` options. This
    /// command runs the same resolution the fetching commands run and prints
    /// the result without touching the filesystem or the network.
    Inspect(inspect::Args),
}

//================================================================================================
// Functions
//================================================================================================

/// The main entry point for the Skema CLI.
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Inspect(args) => inspect::run(args),
    }
}

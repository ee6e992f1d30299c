//! This module defines the `inspect` subcommand.
//!
//! The `inspect` subcommand resolves a source ref string exactly the way the
//! fetching commands do and prints the resulting typed reference, making the
//! dense ref grammar easy to debug without fetching anything.

use anyhow::Result;
use clap::Parser;
use fetch::{Format, RefParser};

//================================================================================================
// Types
//================================================================================================

/// The `inspect` subcommand.
#[derive(Parser, Debug)]
#[command(arg_required_else_help = true, next_help_heading = "Inspect Options")]
pub struct Args {
    /// The source ref to resolve.
    #[clap(value_name = "REF")]
    r#ref: String,

    /// Restrict which formats the ref may resolve to.
    ///
    /// Accepts a comma-separated list of format tokens (e.g. `dir,tar,git`).
    /// By default every format is allowed.
    #[clap(long, value_delimiter = ',', value_name = "FORMAT")]
    formats: Vec<Format>,

    /// Print the resolved ref as JSON instead of the debug rendering.
    #[clap(long)]
    json: bool,
}

//================================================================================================
// Functions
//================================================================================================

/// The main entry point for the `inspect` subcommand.
pub(super) fn run(args: Args) -> Result<()> {
    let allowed = if args.formats.is_empty() {
        Format::ALL
    } else {
        args.formats.as_slice()
    };

    tracing::debug!(value = %args.r#ref, formats = allowed.len(), "resolving source ref");
    let parsed = RefParser::new().parse(&args.r#ref, allowed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        println!("{parsed:#?}");
    }
    Ok(())
}

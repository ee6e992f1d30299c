//! Skema, a command-line toolchain for protocol-buffer sources.
//!
//! The binary is a thin shell: argument parsing, logging setup, and command
//! dispatch live under [`cli`], while the source-ref resolution engine lives
//! in the `fetch` crate and the module-identity grammar in `modref`.

#![warn(missing_docs)]

pub mod cli;

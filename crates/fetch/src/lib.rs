//! # Fetch Crate
//!
//! The `fetch` crate provides the reference-parsing core of the Skema CLI.
//! Every command that reads or writes protocol-buffer artifacts accepts a
//! single *source ref* string which conflates three things:
//!
//! - a **location**: a local path, an `http(s)`/`ssh`/`git` URL, stdio (`-`),
//!   the platform null device, or a remote module identity;
//! - an artifact **format**: a directory, a tar or zip archive, a git
//!   repository, a single serialized file, or a module;
//! - per-format **options** after a `#`, such as compression, archive strip
//!   depth, or git branch/tag/ref/depth selection.
//!
//! This crate resolves that one string into a fully typed, validated
//! [`ParsedRef`] that fetcher implementations can consume without further
//! interpretation. Resolution is purely lexical: no filesystem access, no
//! network access, no content sniffing.
//!
//! ## Architecture
//!
//! - [`parse`] - the [`RefParser`] entry point, scheme detection, and format
//!   inference
//! - [`refs`] - the typed ref model and its invariants
//! - [`error`] - the single error taxonomy with deterministic messages
//! - [`normpath`] - OS-agnostic lexical path normalization
//!
//! Module-identity validation is delegated to the `modref` crate through the
//! [`IdentityResolver`] seam, so the grammar lives in exactly one place.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fetch::{Format, ParsedRef, RefParser};
//!
//! let parser = RefParser::new();
//!
//! match parser.parse("ssh://user@host:repo.git#branch=main", Format::ALL).unwrap() {
//!     ParsedRef::Git(git) => assert_eq!(git.depth, 1),
//!     _ => unreachable!(),
//! }
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod normpath;
pub mod parse;
pub mod refs;

mod options;

pub use error::ParseError;
pub use parse::{IdentityResolver, NULL_DEVICE, RefParser, RegistryResolver};
pub use refs::{
    ArchiveRef, ArchiveType, CompressionType, DirRef, FileScheme, Format, GitRef, GitScheme,
    GitTarget, ModuleRef, ParsedRef, SingleFileRef,
};

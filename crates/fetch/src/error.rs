//! # Ref Parsing Errors
//!
//! The single error taxonomy surfaced by [`crate::parse::RefParser`]. Each
//! variant captures the offending input, and the rendered messages are
//! deterministic: callers may match on the variant or on the message text,
//! and equal inputs always fail identically.

use thiserror::Error;

use crate::refs::Format;

//================================================================================================
// Types
//================================================================================================

/// An error encountered while resolving a source ref string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A compression option was given for a zip archive, which is never
    /// compressed at the archive level.
    #[error("cannot specify compression for zip archives")]
    CannotSpecifyCompressionForZip,
    /// Both a branch and a tag were requested for a git ref.
    #[error(r#""branch" and "tag" cannot both be specified"#)]
    CannotSpecifyGitBranchAndTag,
    /// Both a tag and an arbitrary ref were requested for a git ref.
    #[error(r#""tag" cannot be specified with "ref""#)]
    CannotSpecifyTagWithRef,
    /// The compression option named an unknown algorithm.
    #[error("unknown compression: {0:?} (valid values are \"none\", \"gzip\", \"zstd\")")]
    CompressionUnknown(String),
    /// The depth option was not an unsigned integer.
    #[error(r#"could not parse "depth" value: {0:?}"#)]
    DepthParseError(String),
    /// A git clone depth of zero was requested.
    #[error(r#""depth" must be greater than zero"#)]
    DepthZero,
    /// A format override was given for the null device, which always behaves
    /// as a binary discard sink.
    #[error(r#""format" may not be specified when the path is {0}"#)]
    FormatOverrideNotAllowedForDevNull(String),
    /// The format was not recognized, or is not allowed for this invocation.
    #[error("unknown format: {0:?}")]
    FormatUnknown(String),
    /// The path is not usable for the resolved format.
    #[error("invalid {format} path: {path:?}")]
    InvalidPath {
        /// The format the ref resolved to.
        format: Format,
        /// The offending path.
        path: String,
    },
    /// The module identity validator rejected the ref.
    #[error(transparent)]
    Module(#[from] modref::IdentityError),
    /// The recurse_submodules option was neither `true` nor `false`.
    #[error(r#"could not parse "recurse_submodules" value: {0:?}"#)]
    OptionsCouldNotParseRecurseSubmodules(String),
    /// The strip_components option was not an unsigned integer.
    #[error(r#"could not parse "strip_components" value: {0:?}"#)]
    OptionsCouldNotParseStripComponents(String),
    /// An option key appeared more than once.
    #[error("duplicate option key: {0:?}")]
    OptionsDuplicateKey(String),
    /// The options section was empty or not a `k=v,k=v` list.
    #[error("invalid options: {0:?}")]
    OptionsInvalid(String),
    /// A recognized option key is not legal for the resolved format.
    #[error("options invalid for format {format}: {value:?}")]
    OptionsInvalidForFormat {
        /// The format the ref resolved to.
        format: Format,
        /// The full ref value, options included.
        value: String,
    },
    /// An option key is not recognized at all.
    #[error("invalid option key: {0:?}")]
    OptionsInvalidKey(String),
    /// The path has a bare `.gz` suffix that implies no known format.
    #[error("path {0:?} has a .gz suffix with an unknown format")]
    PathUnknownGz(String),
    /// The ref value, or its path portion, was empty.
    #[error("a source ref cannot be empty")]
    ValueEmpty,
}

//! # Parsed Source References
//!
//! The typed model a source ref resolves into. A raw ref string conflates a
//! location, an artifact kind, and per-kind options; the types here keep each
//! kind's fields and invariants adjacent so downstream fetchers can consume a
//! [`ParsedRef`] without any further interpretation.
//!
//! A [`ParsedRef`] is constructed exactly once by [`crate::parse::RefParser`]
//! and is immutable thereafter.

use std::fmt;
use std::str::FromStr;

use modref::ModuleIdentity;
use serde::Serialize;

use crate::error::ParseError;


//================================================================================================
// Constants
//================================================================================================

/// The clone depth used when no git target, a branch, or a tag is requested.
pub const DEFAULT_GIT_DEPTH: u32 = 1;

/// The clone depth used when an arbitrary git ref must be resolved.
///
/// Arbitrary refs are not generally reachable from a shallow tip, so a much
/// deeper fetch is required to find them.
pub const DEFAULT_GIT_REF_DEPTH: u32 = 50;

//================================================================================================
// Types
//================================================================================================

/// The artifact kind a source ref denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// A single serialized binary file.
    Bin,
    /// A local directory of sources.
    Dir,
    /// A git repository.
    Git,
    /// A single serialized JSON file.
    Json,
    /// A remote module identity.
    Mod,
    /// A tar archive.
    Tar,
    /// A gzipped tar archive. Accepted as an explicit override token; suffix
    /// inference reports plain [`Format::Tar`] with gzip compression instead.
    Targz,
    /// A zip archive.
    Zip,
}

/// Where a file-like artifact lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileScheme {
    /// A path on the local filesystem, with any `file://` prefix stripped.
    Local,
    /// A `http://` URL.
    Http,
    /// A `https://` URL.
    Https,
    /// Standard input or output.
    Stdio,
    /// The platform null device.
    Null,
}

/// Where a git repository lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GitScheme {
    /// A repository on the local filesystem.
    Local,
    /// A `http://` remote.
    Http,
    /// A `https://` remote.
    Https,
    /// An `ssh://` remote.
    Ssh,
    /// A `git://` remote.
    Git,
}

/// The container format of an archive ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    /// A tar archive.
    Tar,
    /// A zip archive.
    Zip,
}

/// The compression applied to an archive or single-file artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionType {
    /// No compression.
    None,
    /// Gzip compression.
    Gzip,
    /// Zstandard compression.
    Zstd,
}

/// What a git ref should check out.
///
/// Branch and tag are mutually exclusive, as are tag and ref; a branch *may*
/// accompany a ref, which is its own variant because the default clone depth
/// depends on the distinction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum GitTarget {
    /// Use the remote's default HEAD.
    None,
    /// Check out the named branch.
    Branch(String),
    /// Check out the named tag.
    Tag(String),
    /// Resolve an arbitrary ref.
    Ref(String),
    /// Resolve an arbitrary ref on the named branch.
    RefWithBranch {
        /// The ref to resolve.
        reference: String,
        /// The branch the ref lives on.
        branch: String,
    },
}

/// A fully resolved, validated source ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsedRef {
    /// A local directory of sources.
    Dir(DirRef),
    /// A tar or zip archive.
    Archive(ArchiveRef),
    /// A git repository.
    Git(GitRef),
    /// A single serialized file.
    Single(SingleFileRef),
    /// A remote module.
    Module(ModuleRef),
}

/// A local directory of sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirRef {
    /// The normalized directory path.
    pub path: String,
}

/// A tar or zip archive, local or remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveRef {
    /// The format token the ref resolved to, one of `tar`, `targz`, or `zip`.
    pub format: Format,
    /// The normalized archive path, empty for stdio.
    pub path: String,
    /// Where the archive lives.
    pub file_scheme: FileScheme,
    /// The container format.
    pub archive_type: ArchiveType,
    /// The compression applied to the archive. Always
    /// [`CompressionType::None`] for zip archives.
    pub compression: CompressionType,
    /// The number of leading path components to strip on extraction.
    pub strip_components: u32,
    /// The directory within the archive to treat as the logical root, empty
    /// for the archive root itself.
    pub subdir: String,
}

/// A git repository to clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRef {
    /// The normalized repository path or remote URL without its scheme.
    pub path: String,
    /// Where the repository lives.
    pub git_scheme: GitScheme,
    /// What to check out.
    pub target: GitTarget,
    /// Whether to recursively initialize submodules.
    pub recurse_submodules: bool,
    /// The clone depth, always at least one.
    pub depth: u32,
    /// The directory within the repository to treat as the logical root,
    /// empty for the repository root itself.
    pub subdir: String,
}

/// A single serialized file, local or remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleFileRef {
    /// The format token the ref resolved to, one of `bin` or `json`.
    pub format: Format,
    /// The normalized file path, empty for stdio and the null device.
    pub path: String,
    /// Where the file lives.
    pub file_scheme: FileScheme,
    /// The compression applied to the file.
    pub compression: CompressionType,
}

/// A module hosted on a remote registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRef {
    /// The validated module identity.
    pub identity: ModuleIdentity,
}

//================================================================================================
// Impls
//================================================================================================

impl Format {
    /// Every format, the default allowed set for [`crate::parse::RefParser`].
    pub const ALL: &'static [Format] = &[
        Format::Bin,
        Format::Dir,
        Format::Git,
        Format::Json,
        Format::Mod,
        Format::Tar,
        Format::Targz,
        Format::Zip,
    ];

    /// The option keys legal for this format, beyond the universally accepted
    /// `format` key itself.
    pub(crate) fn allowed_keys(&self) -> &'static [&'static str] {
        match self {
            Format::Dir | Format::Mod => &[],
            Format::Tar | Format::Targz => &["compression", "strip_components", "subdir"],
            Format::Zip => &["strip_components", "subdir"],
            Format::Git => &[
                "branch",
                "depth",
                "recurse_submodules",
                "ref",
                "subdir",
                "tag",
            ],
            Format::Bin | Format::Json => &["compression"],
        }
    }

    /// The token this format is written as in a `format=` option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Bin => "bin",
            Format::Dir => "dir",
            Format::Git => "git",
            Format::Json => "json",
            Format::Mod => "mod",
            Format::Tar => "tar",
            Format::Targz => "targz",
            Format::Zip => "zip",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bin" => Ok(Format::Bin),
            "dir" => Ok(Format::Dir),
            "git" => Ok(Format::Git),
            "json" => Ok(Format::Json),
            "mod" => Ok(Format::Mod),
            "tar" => Ok(Format::Tar),
            "targz" => Ok(Format::Targz),
            "zip" => Ok(Format::Zip),
            _ => Err(ParseError::FormatUnknown(s.to_owned())),
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CompressionType::None => "none",
            CompressionType::Gzip => "gzip",
            CompressionType::Zstd => "zstd",
        })
    }
}

impl FromStr for CompressionType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(CompressionType::None),
            "gzip" => Ok(CompressionType::Gzip),
            "zstd" => Ok(CompressionType::Zstd),
            _ => Err(ParseError::CompressionUnknown(s.to_owned())),
        }
    }
}

impl GitTarget {
    /// Combines the `branch`, `tag`, and `ref` options into a target,
    /// enforcing their mutual-exclusion rules.
    pub fn new(
        branch: Option<String>,
        tag: Option<String>,
        reference: Option<String>,
    ) -> Result<Self, ParseError> {
        if branch.is_some() && tag.is_some() {
            return Err(ParseError::CannotSpecifyGitBranchAndTag);
        }
        if tag.is_some() && reference.is_some() {
            return Err(ParseError::CannotSpecifyTagWithRef);
        }
        if let Some(tag) = tag {
            return Ok(GitTarget::Tag(tag));
        }
        Ok(match (branch, reference) {
            (None, None) => GitTarget::None,
            (Some(branch), None) => GitTarget::Branch(branch),
            (None, Some(reference)) => GitTarget::Ref(reference),
            (Some(branch), Some(reference)) => GitTarget::RefWithBranch { reference, branch },
        })
    }

    /// The clone depth to use when the ref does not specify one.
    pub fn default_depth(&self) -> u32 {
        match self {
            GitTarget::Ref(_) | GitTarget::RefWithBranch { .. } => DEFAULT_GIT_REF_DEPTH,
            _ => DEFAULT_GIT_DEPTH,
        }
    }
}

impl ParsedRef {
    /// The format this ref resolved to.
    pub fn format(&self) -> Format {
        match self {
            ParsedRef::Dir(_) => Format::Dir,
            ParsedRef::Archive(archive) => archive.format,
            ParsedRef::Git(_) => Format::Git,
            ParsedRef::Single(single) => single.format,
            ParsedRef::Module(_) => Format::Mod,
        }
    }

    /// The stored path, if this kind of ref carries one.
    ///
    /// Stdio and null-device refs report an empty path; module refs have
    /// none at all.
    pub fn path(&self) -> Option<&str> {
        match self {
            ParsedRef::Dir(dir) => Some(&dir.path),
            ParsedRef::Archive(archive) => Some(&archive.path),
            ParsedRef::Git(git) => Some(&git.path),
            ParsedRef::Single(single) => Some(&single.path),
            ParsedRef::Module(_) => None,
        }
    }
}

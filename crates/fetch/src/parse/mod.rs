//! # Source Ref Resolution
//!
//! The entry point that turns a raw ref string into a [`ParsedRef`]. A ref
//! value conflates a location, an artifact format, and per-format options:
//!
//! ```text
//! value    = path [ "#" options ]
//! options  = pair { "," pair }
//! pair     = key "=" val
//! path     = "-" | null_device | [ scheme "://" ] raw
//! scheme   = "file" | "http" | "https" | "ssh" | "git"
//! ```
//!
//! Resolution is strictly linear: tokenize, detect the scheme, infer the
//! format, validate options for that format, normalize the path, construct
//! the typed ref. The first violation wins, and equal inputs always resolve
//! identically; nothing here touches the filesystem or the network.
//!
//! ## Format inference
//!
//! An explicit `format=` option is authoritative. Otherwise the path suffix
//! decides (`.tar.gz`, `.tgz`, `.tar.zst`, `.tar`, `.zip`, `.git`, `.bin`,
//! `.bin.gz`, `.bin.zst`, `.json`, `.json.gz`, `.json.zst`); any other `.gz`
//! suffix is an error rather than a guess. Suffixless http(s) URLs default to
//! a downloadable binary file, suffixless `ssh://`/`git://` URLs to a git
//! remote, and anything else to a directory, after first offering the path
//! to the module-identity validator.
//!
//! ## Usage
//!
//! ```rust
//! use fetch::{Format, ParsedRef, RefParser};
//!
//! let parser = RefParser::new();
//! let parsed = parser.parse("path/to/file.tar.gz#strip_components=1", Format::ALL).unwrap();
//! assert!(matches!(parsed, ParsedRef::Archive(_)));
//! ```

use std::collections::BTreeMap;

use modref::{IdentityError, ModuleIdentity};

use crate::error::ParseError;
use crate::normpath::normalize;
use crate::options::{self, GitOptions};
use crate::refs::{
    ArchiveRef, ArchiveType, CompressionType, DirRef, FileScheme, Format, GitRef, GitScheme,
    ModuleRef, ParsedRef, SingleFileRef,
};

#[cfg(test)]
mod tests;

//================================================================================================
// Constants
//================================================================================================

/// The platform null device, a ref to a discard sink.
pub const NULL_DEVICE: &str = if cfg!(windows) { "NUL" } else { "/dev/null" };

//================================================================================================
// Types
//================================================================================================

/// Validates candidate module identity strings.
///
/// The ref parser treats the module grammar as opaque: it hands the raw path
/// to the resolver and passes any error through to its caller unchanged.
pub trait IdentityResolver {
    /// Verifies that `raw` is a well-formed module identity.
    fn validate(&self, raw: &str) -> Result<ModuleIdentity, IdentityError>;
}

/// The [`IdentityResolver`] backed by the registry module grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryResolver;

/// Resolves raw source ref strings into [`ParsedRef`] values.
///
/// The parser is pure and synchronous; a single instance may be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct RefParser<R = RegistryResolver> {
    resolver: R,
}

/// The URI-style prefix split off a raw path, with `file://` already
/// collapsed into the local scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawScheme {
    Local,
    Http,
    Https,
    Ssh,
    Git,
}

//================================================================================================
// Impls
//================================================================================================

impl IdentityResolver for RegistryResolver {
    fn validate(&self, raw: &str) -> Result<ModuleIdentity, IdentityError> {
        raw.parse()
    }
}

impl RefParser<RegistryResolver> {
    /// Creates a parser that validates module identities against the
    /// registry grammar.
    pub fn new() -> Self {
        RefParser {
            resolver: RegistryResolver,
        }
    }
}

impl<R: IdentityResolver> RefParser<R> {
    /// Creates a parser with a custom module-identity resolver.
    pub fn with_resolver(resolver: R) -> Self {
        RefParser { resolver }
    }

    /// Resolves `value` into a typed ref, accepting only the given formats.
    ///
    /// `allowed_formats` restricts which artifact kinds the calling command
    /// accepts; a ref resolving to anything else fails with
    /// [`ParseError::FormatUnknown`]. Module classification is only ever
    /// attempted when [`Format::Mod`] is in the set.
    pub fn parse(&self, value: &str, allowed_formats: &[Format]) -> Result<ParsedRef, ParseError> {
        if value.is_empty() {
            return Err(ParseError::ValueEmpty);
        }
        let raw = options::tokenize(value)?;
        let format_override = raw
            .options
            .get("format")
            .map(|name| name.parse::<Format>())
            .transpose()?;

        tracing::trace!(path = %raw.path, options = raw.options.len(), "tokenized source ref");

        if raw.path == "-" {
            return stdio_ref(value, format_override, &raw.options, allowed_formats);
        }
        if raw.path == NULL_DEVICE {
            return null_ref(value, format_override, &raw.options, allowed_formats);
        }

        let (scheme, rest) = detect_scheme(&raw.path);

        let (format, suffix_compression) = match format_override {
            Some(format) => (format, None),
            None => match infer_from_suffix(&raw.path)? {
                Some((format, compression)) => (format, Some(compression)),
                None => match scheme {
                    RawScheme::Http | RawScheme::Https => (Format::Bin, None),
                    RawScheme::Ssh | RawScheme::Git => (Format::Git, None),
                    RawScheme::Local => {
                        if allowed_formats.contains(&Format::Mod) {
                            if let Ok(identity) = self.resolver.validate(rest) {
                                options::check_keys(Format::Mod, value, &raw.options)?;
                                return Ok(ParsedRef::Module(ModuleRef { identity }));
                            }
                        }
                        (Format::Dir, None)
                    },
                },
            },
        };

        ensure_allowed(format, allowed_formats)?;
        options::check_keys(format, value, &raw.options)?;

        tracing::trace!(%format, ?scheme, "inferred ref format");

        match format {
            Format::Dir => {
                if scheme != RawScheme::Local {
                    return Err(ParseError::InvalidPath {
                        format,
                        path: raw.path,
                    });
                }
                Ok(ParsedRef::Dir(DirRef {
                    path: normalize(rest),
                }))
            },
            Format::Tar | Format::Targz | Format::Zip => {
                let file_scheme = file_scheme(format, scheme, &raw.path)?;
                let opts = options::archive(&raw.options)?;
                Ok(ParsedRef::Archive(ArchiveRef {
                    format,
                    path: normalize(rest),
                    file_scheme,
                    archive_type: archive_type(format),
                    compression: archive_compression(format, opts.compression, suffix_compression),
                    strip_components: opts.strip_components,
                    subdir: opts.subdir,
                }))
            },
            Format::Git => git_ref(scheme, rest, options::git(&raw.options)?),
            Format::Bin | Format::Json => {
                let file_scheme = file_scheme(format, scheme, &raw.path)?;
                let compression = options::compression(&raw.options)?
                    .or(suffix_compression)
                    .unwrap_or(CompressionType::None);
                Ok(ParsedRef::Single(SingleFileRef {
                    format,
                    path: normalize(rest),
                    file_scheme,
                    compression,
                }))
            },
            Format::Mod => {
                if scheme != RawScheme::Local {
                    return Err(ParseError::InvalidPath {
                        format,
                        path: raw.path,
                    });
                }
                let identity = self.resolver.validate(rest)?;
                Ok(ParsedRef::Module(ModuleRef { identity }))
            },
        }
    }
}

//================================================================================================
// Functions
//================================================================================================

fn detect_scheme(path: &str) -> (RawScheme, &str) {
    if let Some(rest) = path.strip_prefix("file://") {
        return (RawScheme::Local, rest);
    }
    if let Some(rest) = path.strip_prefix("http://") {
        return (RawScheme::Http, rest);
    }
    if let Some(rest) = path.strip_prefix("https://") {
        return (RawScheme::Https, rest);
    }
    if let Some(rest) = path.strip_prefix("ssh://") {
        return (RawScheme::Ssh, rest);
    }
    if let Some(rest) = path.strip_prefix("git://") {
        return (RawScheme::Git, rest);
    }
    (RawScheme::Local, path)
}

/// Infers a format and default compression from the path suffix.
///
/// Longest suffixes match first, so `.tar.gz` never classifies as a bare
/// `.gz`. A `.gz` suffix outside the known table is an error rather than a
/// directory fallback; a stray `.zst` carries no such rule and falls
/// through.
fn infer_from_suffix(path: &str) -> Result<Option<(Format, CompressionType)>, ParseError> {
    let inferred = if path.ends_with(".tar.gz") || path.ends_with(".tgz") {
        (Format::Tar, CompressionType::Gzip)
    } else if path.ends_with(".tar.zst") {
        (Format::Tar, CompressionType::Zstd)
    } else if path.ends_with(".tar") {
        (Format::Tar, CompressionType::None)
    } else if path.ends_with(".zip") {
        (Format::Zip, CompressionType::None)
    } else if path.ends_with(".git") {
        (Format::Git, CompressionType::None)
    } else if path.ends_with(".bin.gz") {
        (Format::Bin, CompressionType::Gzip)
    } else if path.ends_with(".bin.zst") {
        (Format::Bin, CompressionType::Zstd)
    } else if path.ends_with(".bin") {
        (Format::Bin, CompressionType::None)
    } else if path.ends_with(".json.gz") {
        (Format::Json, CompressionType::Gzip)
    } else if path.ends_with(".json.zst") {
        (Format::Json, CompressionType::Zstd)
    } else if path.ends_with(".json") {
        (Format::Json, CompressionType::None)
    } else if path.ends_with(".gz") {
        return Err(ParseError::PathUnknownGz(path.to_owned()));
    } else {
        return Ok(None);
    };
    Ok(Some(inferred))
}

fn ensure_allowed(format: Format, allowed_formats: &[Format]) -> Result<(), ParseError> {
    if allowed_formats.contains(&format) {
        Ok(())
    } else {
        Err(ParseError::FormatUnknown(format.to_string()))
    }
}

fn archive_type(format: Format) -> ArchiveType {
    if format == Format::Zip {
        ArchiveType::Zip
    } else {
        ArchiveType::Tar
    }
}

/// Resolves archive compression from the explicit option, the suffix
/// default, and the format's own implications, in that order of precedence.
fn archive_compression(
    format: Format,
    explicit: Option<CompressionType>,
    suffix: Option<CompressionType>,
) -> CompressionType {
    match format {
        Format::Zip => CompressionType::None,
        Format::Targz => explicit.unwrap_or(CompressionType::Gzip),
        _ => explicit.or(suffix).unwrap_or(CompressionType::None),
    }
}

fn file_scheme(format: Format, scheme: RawScheme, path: &str) -> Result<FileScheme, ParseError> {
    match scheme {
        RawScheme::Local => Ok(FileScheme::Local),
        RawScheme::Http => Ok(FileScheme::Http),
        RawScheme::Https => Ok(FileScheme::Https),
        // ssh:// and git:// locate git remotes, never plain files
        RawScheme::Ssh | RawScheme::Git => Err(ParseError::InvalidPath {
            format,
            path: path.to_owned(),
        }),
    }
}

fn git_ref(scheme: RawScheme, rest: &str, opts: GitOptions) -> Result<ParsedRef, ParseError> {
    let git_scheme = match scheme {
        RawScheme::Local => GitScheme::Local,
        RawScheme::Http => GitScheme::Http,
        RawScheme::Https => GitScheme::Https,
        RawScheme::Ssh => GitScheme::Ssh,
        RawScheme::Git => GitScheme::Git,
    };
    let depth = opts.depth.unwrap_or_else(|| opts.target.default_depth());
    Ok(ParsedRef::Git(GitRef {
        path: normalize(rest),
        git_scheme,
        target: opts.target,
        recurse_submodules: opts.recurse_submodules,
        depth,
        subdir: opts.subdir,
    }))
}

/// Builds the ref for the `-` sentinel: artifact content flows over stdio,
/// defaulting to a binary file when no format override is given.
fn stdio_ref(
    value: &str,
    format_override: Option<Format>,
    opts: &BTreeMap<String, String>,
    allowed_formats: &[Format],
) -> Result<ParsedRef, ParseError> {
    let format = format_override.unwrap_or(Format::Bin);
    if matches!(format, Format::Dir | Format::Git | Format::Mod) {
        return Err(ParseError::InvalidPath {
            format,
            path: "-".to_owned(),
        });
    }
    ensure_allowed(format, allowed_formats)?;
    options::check_keys(format, value, opts)?;
    match format {
        Format::Tar | Format::Targz | Format::Zip => {
            let archive = options::archive(opts)?;
            Ok(ParsedRef::Archive(ArchiveRef {
                format,
                path: String::new(),
                file_scheme: FileScheme::Stdio,
                archive_type: archive_type(format),
                compression: archive_compression(format, archive.compression, None),
                strip_components: archive.strip_components,
                subdir: archive.subdir,
            }))
        },
        _ => {
            let compression = options::compression(opts)?.unwrap_or(CompressionType::None);
            Ok(ParsedRef::Single(SingleFileRef {
                format,
                path: String::new(),
                file_scheme: FileScheme::Stdio,
                compression,
            }))
        },
    }
}

/// Builds the ref for the platform null device, which always behaves as a
/// binary discard sink and therefore admits no format override at all.
fn null_ref(
    value: &str,
    format_override: Option<Format>,
    opts: &BTreeMap<String, String>,
    allowed_formats: &[Format],
) -> Result<ParsedRef, ParseError> {
    if format_override.is_some() {
        return Err(ParseError::FormatOverrideNotAllowedForDevNull(
            NULL_DEVICE.to_owned(),
        ));
    }
    ensure_allowed(Format::Bin, allowed_formats)?;
    options::check_keys(Format::Bin, value, opts)?;
    let compression = options::compression(opts)?.unwrap_or(CompressionType::None);
    Ok(ParsedRef::Single(SingleFileRef {
        format: Format::Bin,
        path: String::new(),
        file_scheme: FileScheme::Null,
        compression,
    }))
}

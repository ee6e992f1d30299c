//! # Ref Tokenization and Options
//!
//! Splits a raw ref value into its path and options at the `#` boundary,
//! parses the `k=v,k=v` options section, and validates option values against
//! the format the ref resolved to. Keys must belong to the closed global set
//! regardless of format; which of them are *legal* for a given format is
//! decided by [`Format::allowed_keys`] once inference has run.

use std::collections::BTreeMap;

use nom::IResult;
use nom::bytes::complete::{tag, take_until};
use nom::combinator::{map, opt};
use nom::sequence::tuple;

use crate::error::ParseError;
use crate::normpath::normalize_subdir;
use crate::refs::{CompressionType, Format, GitTarget};


//================================================================================================
// Constants
//================================================================================================

/// Every option key the ref grammar recognizes, for any format.
const RECOGNIZED_KEYS: &[&str] = &[
    "branch",
    "compression",
    "depth",
    "format",
    "recurse_submodules",
    "ref",
    "strip_components",
    "subdir",
    "tag",
];

//================================================================================================
// Types
//================================================================================================

/// A ref value split at the `#` boundary, options parsed but not yet
/// validated against a format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRef {
    /// The path portion, exactly as written.
    pub(crate) path: String,
    /// The parsed options, keyed deterministically.
    pub(crate) options: BTreeMap<String, String>,
}

/// Validated option values for an archive ref.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ArchiveOptions {
    pub(crate) compression: Option<CompressionType>,
    pub(crate) strip_components: u32,
    pub(crate) subdir: String,
}

/// Validated option values for a git ref.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct GitOptions {
    pub(crate) target: GitTarget,
    pub(crate) recurse_submodules: bool,
    pub(crate) depth: Option<u32>,
    pub(crate) subdir: String,
}

//================================================================================================
// Functions
//================================================================================================

fn hash_split(input: &str) -> IResult<&str, Option<&str>> {
    opt(map(tuple((take_until("#"), tag("#"))), |(path, _)| path))(input)
}

/// Splits a ref value into its raw path and options.
///
/// The value splits at the first `#`; later `#` characters land verbatim
/// inside option values. Option values are taken verbatim with no quoting
/// or escaping.
pub(crate) fn tokenize(value: &str) -> Result<RawRef, ParseError> {
    let (path, options_str) = match hash_split(value) {
        Ok((rest, Some(path))) => (path, Some(rest)),
        _ => (value, None),
    };
    if path.is_empty() {
        return Err(ParseError::ValueEmpty);
    }

    let mut options = BTreeMap::new();
    if let Some(raw) = options_str {
        if raw.is_empty() {
            return Err(ParseError::OptionsInvalid(raw.to_owned()));
        }
        for pair in raw.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ParseError::OptionsInvalid(raw.to_owned()))?;
            if key.is_empty() || value.is_empty() {
                return Err(ParseError::OptionsInvalid(raw.to_owned()));
            }
            if !RECOGNIZED_KEYS.contains(&key) {
                return Err(ParseError::OptionsInvalidKey(key.to_owned()));
            }
            if options.insert(key.to_owned(), value.to_owned()).is_some() {
                return Err(ParseError::OptionsDuplicateKey(key.to_owned()));
            }
        }
    }

    Ok(RawRef {
        path: path.to_owned(),
        options,
    })
}

/// Rejects option keys that are not legal for the resolved format.
///
/// The `format` key itself is always accepted; it was consumed by format
/// inference before this check runs. Zip archives get a dedicated error for
/// the `compression` key, whose mere presence is the violation.
pub(crate) fn check_keys(
    format: Format,
    value: &str,
    options: &BTreeMap<String, String>,
) -> Result<(), ParseError> {
    if format == Format::Zip && options.contains_key("compression") {
        return Err(ParseError::CannotSpecifyCompressionForZip);
    }
    let allowed = format.allowed_keys();
    for key in options.keys() {
        if key == "format" {
            continue;
        }
        if !allowed.contains(&key.as_str()) {
            return Err(ParseError::OptionsInvalidForFormat {
                format,
                value: value.to_owned(),
            });
        }
    }
    Ok(())
}

/// Parses the option values legal for archive refs.
pub(crate) fn archive(options: &BTreeMap<String, String>) -> Result<ArchiveOptions, ParseError> {
    let compression = compression(options)?;
    let strip_components = match options.get("strip_components") {
        Some(value) => value
            .parse()
            .map_err(|_| ParseError::OptionsCouldNotParseStripComponents(value.clone()))?,
        None => 0,
    };
    let subdir = subdir(options);
    Ok(ArchiveOptions {
        compression,
        strip_components,
        subdir,
    })
}

/// Parses the option values legal for git refs.
pub(crate) fn git(options: &BTreeMap<String, String>) -> Result<GitOptions, ParseError> {
    let target = GitTarget::new(
        options.get("branch").cloned(),
        options.get("tag").cloned(),
        options.get("ref").cloned(),
    )?;
    let depth = match options.get("depth") {
        Some(value) => {
            let depth: u32 = value
                .parse()
                .map_err(|_| ParseError::DepthParseError(value.clone()))?;
            if depth == 0 {
                return Err(ParseError::DepthZero);
            }
            Some(depth)
        },
        None => None,
    };
    let recurse_submodules = match options.get("recurse_submodules").map(String::as_str) {
        Some("true") => true,
        Some("false") | None => false,
        Some(other) => {
            return Err(ParseError::OptionsCouldNotParseRecurseSubmodules(
                other.to_owned(),
            ));
        },
    };
    let subdir = subdir(options);
    Ok(GitOptions {
        target,
        recurse_submodules,
        depth,
        subdir,
    })
}

/// Parses an explicit `compression=` option, if present.
pub(crate) fn compression(
    options: &BTreeMap<String, String>,
) -> Result<Option<CompressionType>, ParseError> {
    options.get("compression").map(|v| v.parse()).transpose()
}

fn subdir(options: &BTreeMap<String, String>) -> String {
    options
        .get("subdir")
        .map(|s| normalize_subdir(s))
        .unwrap_or_default()
}

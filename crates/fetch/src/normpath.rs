//! # Lexical Path Normalization
//!
//! OS-agnostic path canonicalization for ref paths: consecutive separators
//! collapse, `.` and `..` components resolve lexically, platform separators
//! become forward slashes, and trailing slashes are trimmed (except for the
//! root itself). Normalization never touches the filesystem, so it is safe
//! for paths that do not exist and for remote URL remainders.

use std::path::MAIN_SEPARATOR;

use path_clean::clean;


//================================================================================================
// Functions
//================================================================================================

/// Normalizes a path string to its lexically cleaned, slash-separated form.
///
/// An empty input normalizes to `"."`, and `..` components that would escape
/// the path's root are preserved rather than resolved.
pub fn normalize(path: &str) -> String {
    let cleaned = clean(path);
    let cleaned = cleaned.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        cleaned.into_owned()
    } else {
        cleaned.replace(MAIN_SEPARATOR, "/")
    }
}

/// Normalizes a subdir option value.
///
/// A subdir denoting the root itself carries no information, so a value that
/// normalizes to `"."` is stored as the empty string.
pub(crate) fn normalize_subdir(path: &str) -> String {
    let normalized = normalize(path);
    if normalized == "." { String::new() } else { normalized }
}

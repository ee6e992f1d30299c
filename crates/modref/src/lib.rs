//! # Module Identities
//!
//! This crate owns the grammar for remote module identities, the strings used
//! to name a module hosted on a registry:
//!
//! ```text
//! remote/owner/name[:reference]
//! ```
//!
//! ### Components
//!
//! - **remote** - The registry hostname (e.g. `registry.example.com`). It must
//!   contain at least one interior dot, which is what keeps ordinary relative
//!   paths such as `foo/bar/baz` from ever classifying as module identities.
//! - **owner** - The organization or user owning the module.
//! - **name** - The module's name within the owner's namespace.
//! - **reference** - An optional tag, branch, or commit disambiguating which
//!   revision of the module is meant. When absent, consumers choose their own
//!   default.
//!
//! The ref parser in the `fetch` crate treats this grammar as opaque: it hands
//! a candidate string to [`ModuleIdentity::from_str`] and passes any
//! [`IdentityError`] through to its caller unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use modref::ModuleIdentity;
//!
//! let identity: ModuleIdentity = "registry.example.com/acme/payments:v3".parse().unwrap();
//! assert_eq!(identity.remote(), "registry.example.com");
//! assert_eq!(identity.owner(), "acme");
//! assert_eq!(identity.name(), "payments");
//! assert_eq!(identity.reference(), Some("v3"));
//! ```

#![deny(missing_docs)]

use std::fmt;
use std::str::FromStr;

use lazy_regex::regex_is_match;
use serde::Serialize;
use thiserror::Error;


//================================================================================================
// Types
//================================================================================================

/// An error produced while validating a module identity string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// The module name component is not a valid name.
    #[error("invalid module name: {0:?}")]
    InvalidName(String),
    /// The owner component is not a valid owner.
    #[error("invalid module owner: {0:?}")]
    InvalidOwner(String),
    /// The reference component is not a valid reference.
    #[error("invalid module reference: {0:?}")]
    InvalidReference(String),
    /// The remote component is not a valid registry hostname.
    #[error("invalid module remote: {0:?}")]
    InvalidRemote(String),
    /// The string does not have the `remote/owner/name[:reference]` shape.
    #[error("a module identity must take the form remote/owner/name[:reference]: {0:?}")]
    Malformed(String),
}

/// A validated module identity.
///
/// Constructed through [`FromStr`]; the fields are guaranteed to satisfy the
/// component grammars documented at the crate level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleIdentity {
    remote: String,
    owner: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
}

//================================================================================================
// Impls
//================================================================================================

impl ModuleIdentity {
    /// Builds an identity from its components, validating each one.
    pub fn new(
        remote: impl Into<String>,
        owner: impl Into<String>,
        name: impl Into<String>,
        reference: Option<String>,
    ) -> Result<Self, IdentityError> {
        let (remote, owner, name) = (remote.into(), owner.into(), name.into());
        Self::validate_remote(&remote)?;
        if !Self::validate_segment(&owner) {
            return Err(IdentityError::InvalidOwner(owner));
        }
        if !Self::validate_segment(&name) {
            return Err(IdentityError::InvalidName(name));
        }
        if let Some(reference) = &reference {
            Self::validate_reference(reference)?;
        }
        Ok(ModuleIdentity {
            remote,
            owner,
            name,
            reference,
        })
    }

    /// Returns the registry hostname this identity points at.
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Returns the owner namespace within the remote.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the module name within the owner's namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the revision reference, if one was given.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    fn validate_remote(s: &str) -> Result<(), IdentityError> {
        if regex_is_match!(r"^[a-z0-9][a-z0-9-]*(\.[a-z0-9][a-z0-9-]*)+$", s) {
            Ok(())
        } else {
            Err(IdentityError::InvalidRemote(s.to_owned()))
        }
    }

    fn validate_segment(s: &str) -> bool {
        regex_is_match!(r"^[a-z0-9][a-z0-9-]*$", s)
    }

    fn validate_reference(s: &str) -> Result<(), IdentityError> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_graphic()) {
            Ok(())
        } else {
            Err(IdentityError::InvalidReference(s.to_owned()))
        }
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.remote, self.owner, self.name)?;
        if let Some(reference) = &self.reference {
            write!(f, ":{}", reference)?;
        }
        Ok(())
    }
}

impl FromStr for ModuleIdentity {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, reference) = match s.split_once(':') {
            Some((path, reference)) => (path, Some(reference)),
            None => (s, None),
        };

        let mut segments = path.split('/');
        let (remote, owner, name) = match (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) {
            (Some(remote), Some(owner), Some(name), None) => (remote, owner, name),
            _ => return Err(IdentityError::Malformed(s.to_owned())),
        };

        Self::new(remote, owner, name, reference.map(ToOwned::to_owned))
    }
}

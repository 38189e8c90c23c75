//! Pre-release and build metadata identifiers

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IdentifierKind, Result, VersionError};
use crate::grammar;

/// A single dot-separated pre-release identifier
///
/// Numeric identifiers always order before alphanumeric ones. Two numeric
/// identifiers compare by value, two alphanumeric identifiers compare by
/// their ASCII bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// All digits, no leading zero (e.g. "11")
    Numeric(&'a str),
    /// Contains at least one letter or hyphen (e.g. "beta", "01a")
    AlphaNumeric(&'a str),
}

impl<'a> Identifier<'a> {
    fn classify(raw: &'a str) -> Self {
        if raw.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(raw)
        } else {
            Identifier::AlphaNumeric(raw)
        }
    }

    /// The identifier as written
    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::AlphaNumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // No leading zeros, so more digits means a larger value.
            (Identifier::Numeric(a), Identifier::Numeric(b)) => {
                a.len().cmp(&b.len()).then_with(|| a.cmp(b))
            }
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => {
                a.as_bytes().cmp(b.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated pre-release suffix (the part after `-`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prerelease {
    raw: String,
}

impl Prerelease {
    /// Validate a pre-release string such as `"alpha.1"`
    pub fn new(value: &str) -> Result<Self> {
        if !grammar::is_valid_pre_release(value) {
            tracing::debug!(value, "rejected pre-release");
            return Err(VersionError::InvalidIdentifier {
                kind: IdentifierKind::PreRelease,
                value: value.to_string(),
            });
        }
        Ok(Self {
            raw: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The dot-separated identifiers, left to right
    pub fn identifiers(&self) -> impl Iterator<Item = Identifier<'_>> + '_ {
        self.raw.split('.').map(Identifier::classify)
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.raw == other.raw {
            return Ordering::Equal;
        }
        // Iterator::cmp treats a strict prefix as lesser.
        self.identifiers().cmp(other.identifiers())
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Validated build metadata (the part after `+`)
///
/// Carried for rendering and structural equality only, never for precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildMetadata {
    raw: String,
}

impl BuildMetadata {
    /// Validate a build metadata string such as `"build.007"`
    pub fn new(value: &str) -> Result<Self> {
        if !grammar::is_valid_build_metadata(value) {
            tracing::debug!(value, "rejected build metadata");
            return Err(VersionError::InvalidIdentifier {
                kind: IdentifierKind::BuildMetadata,
                value: value.to_string(),
            });
        }
        Ok(Self {
            raw: value.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.split('.')
    }
}

macro_rules! impl_text {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.raw)
            }
        }

        impl FromStr for $ty {
            type Err = VersionError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.raw
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.raw == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.raw == *other
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.raw)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::new(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text!(Prerelease);
impl_text!(BuildMetadata);

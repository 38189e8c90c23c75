//! The semantic version value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Component, NumericFault, Result, VersionError};
use crate::grammar;
use crate::identifier::{BuildMetadata, Prerelease};

/// An immutable, validated SemVer 2.0.0 version
///
/// Equality and hashing are structural over all five fields, build metadata
/// included. Precedence, as defined by SemVer, ignores build metadata; use
/// [`Version::cmp_precedence`] for it. The [`Ord`] impl orders by precedence
/// first and breaks ties on build metadata, so it agrees with `==`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Prerelease>,
    build_metadata: Option<BuildMetadata>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Create a version from all five components
    ///
    /// `pre_release` and `build_metadata` are validated against their
    /// grammars; `Some("01")` as a pre-release fails just as parsing
    /// `"1.2.3-01"` does.
    pub fn with_identifiers(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<&str>,
        build_metadata: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            major,
            minor,
            patch,
            pre_release: pre_release.map(Prerelease::new).transpose()?,
            build_metadata: build_metadata.map(BuildMetadata::new).transpose()?,
        })
    }

    /// Start building a version from loosely typed components
    pub fn builder() -> VersionBuilder {
        VersionBuilder::default()
    }

    /// Parse a strict SemVer 2.0.0 string such as `"1.0.0-rc.1+build.5"`
    pub fn parse(input: &str) -> Result<Self> {
        let Some(caps) = grammar::split(input) else {
            tracing::debug!(input, "rejected malformed version");
            return Err(VersionError::malformed(input));
        };

        let number = |digits: &str| {
            digits.parse::<u64>().map_err(|_| {
                tracing::debug!(input, digits, "numeric component out of range");
                VersionError::malformed(input)
            })
        };

        let version = Self::with_identifiers(
            number(caps.major)?,
            number(caps.minor)?,
            number(caps.patch)?,
            caps.pre_release,
            caps.build_metadata,
        )?;
        tracing::trace!(%version, "parsed version");
        Ok(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&Prerelease> {
        self.pre_release.as_ref()
    }

    pub fn build_metadata(&self) -> Option<&BuildMetadata> {
        self.build_metadata.as_ref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Copy with a different major component
    pub fn with_major(&self, major: u64) -> Self {
        Self {
            major,
            ..self.clone()
        }
    }

    /// Copy with a different minor component
    pub fn with_minor(&self, minor: u64) -> Self {
        Self {
            minor,
            ..self.clone()
        }
    }

    /// Copy with a different patch component
    pub fn with_patch(&self, patch: u64) -> Self {
        Self {
            patch,
            ..self.clone()
        }
    }

    /// Copy with a different pre-release; `None` makes it a release
    pub fn with_pre_release<'a>(&self, pre_release: impl Into<Option<&'a str>>) -> Result<Self> {
        Ok(Self {
            pre_release: pre_release.into().map(Prerelease::new).transpose()?,
            ..self.clone()
        })
    }

    /// Copy with different build metadata; `None` removes it
    pub fn with_build_metadata<'a>(
        &self,
        build_metadata: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        Ok(Self {
            build_metadata: build_metadata.into().map(BuildMetadata::new).transpose()?,
            ..self.clone()
        })
    }

    /// Bump major, zero minor and patch, drop pre-release and build metadata
    ///
    /// The reset is unconditional: `2.0.0-rc.1` bumps to `3.0.0`, not `2.0.0`.
    pub fn increment_major(&self) -> Result<Self> {
        Ok(Self::new(bump(self.major, Component::Major)?, 0, 0))
    }

    /// Bump minor, zero patch, drop pre-release and build metadata
    pub fn increment_minor(&self) -> Result<Self> {
        Ok(Self::new(self.major, bump(self.minor, Component::Minor)?, 0))
    }

    /// Bump patch, drop pre-release and build metadata
    pub fn increment_patch(&self) -> Result<Self> {
        Ok(Self::new(self.major, self.minor, bump(self.patch, Component::Patch)?))
    }

    /// Compare by SemVer precedence, ignoring build metadata
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (&self.pre_release, &other.pre_release) {
                (None, None) => Ordering::Equal,
                // A release outranks any pre-release of the same core.
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

fn bump(value: u64, component: Component) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        tracing::debug!(%component, value, "increment overflow");
        VersionError::InvalidNumericComponent {
            component,
            fault: NumericFault::Overflow,
        }
    })
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Builder for versions whose numeric components arrive as signed, possibly
/// absent values
///
/// ```
/// use semantic_version::Version;
///
/// let v = Version::builder()
///     .major(3)
///     .minor(17)
///     .patch(4)
///     .pre_release("beta12-3.4")
///     .build()
///     .unwrap();
/// assert_eq!(v.to_string(), "3.17.4-beta12-3.4");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    major: Option<i64>,
    minor: Option<i64>,
    patch: Option<i64>,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl VersionBuilder {
    pub fn major(mut self, major: i64) -> Self {
        self.major = Some(major);
        self
    }

    pub fn minor(mut self, minor: i64) -> Self {
        self.minor = Some(minor);
        self
    }

    pub fn patch(mut self, patch: i64) -> Self {
        self.patch = Some(patch);
        self
    }

    pub fn pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = Some(pre_release.into());
        self
    }

    pub fn build_metadata(mut self, build_metadata: impl Into<String>) -> Self {
        self.build_metadata = Some(build_metadata.into());
        self
    }

    /// Validate every component and produce the version
    pub fn build(self) -> Result<Version> {
        Version::with_identifiers(
            required(self.major, Component::Major)?,
            required(self.minor, Component::Minor)?,
            required(self.patch, Component::Patch)?,
            self.pre_release.as_deref(),
            self.build_metadata.as_deref(),
        )
    }
}

fn required(value: Option<i64>, component: Component) -> Result<u64> {
    let Some(value) = value else {
        tracing::debug!(%component, "missing version component");
        return Err(VersionError::MissingComponent { component });
    };
    u64::try_from(value).map_err(|_| {
        tracing::debug!(%component, value, "negative version component");
        VersionError::InvalidNumericComponent {
            component,
            fault: NumericFault::Negative(value),
        }
    })
}

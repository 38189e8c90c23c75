//! Error types for version parsing and construction

use std::fmt;

use thiserror::Error;

/// Result type for version operations
pub type Result<T> = std::result::Result<T, VersionError>;

/// Version errors
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("{input} is not valid semver")]
    MalformedInput { input: String },

    #[error("{component} version component is required")]
    MissingComponent { component: Component },

    #[error("invalid {component} version component: {fault}")]
    InvalidNumericComponent {
        component: Component,
        fault: NumericFault,
    },

    #[error("{kind} {value:?} doesn't match the identifier grammar")]
    InvalidIdentifier { kind: IdentifierKind, value: String },

    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}

impl VersionError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
        }
    }
}

/// One of the three numeric version components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        })
    }
}

/// Why a numeric component was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFault {
    /// A negative value was supplied
    Negative(i64),
    /// Incrementing would exceed `u64::MAX`
    Overflow,
}

impl fmt::Display for NumericFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericFault::Negative(value) => write!(f, "{value} is negative"),
            NumericFault::Overflow => f.write_str("value would overflow"),
        }
    }
}

/// Which textual field an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    PreRelease,
    BuildMetadata,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IdentifierKind::PreRelease => "pre-release",
            IdentifierKind::BuildMetadata => "build metadata",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_carries_input() {
        let err = VersionError::malformed("a3.17.4-beta12-3.4+1build17");
        assert_eq!(err.to_string(), "a3.17.4-beta12-3.4+1build17 is not valid semver");
    }

    #[test]
    fn test_numeric_messages() {
        let err = VersionError::InvalidNumericComponent {
            component: Component::Minor,
            fault: NumericFault::Negative(-3),
        };
        assert_eq!(err.to_string(), "invalid minor version component: -3 is negative");

        let err = VersionError::MissingComponent {
            component: Component::Patch,
        };
        assert_eq!(err.to_string(), "patch version component is required");
    }

    #[test]
    fn test_identifier_message() {
        let err = VersionError::InvalidIdentifier {
            kind: IdentifierKind::PreRelease,
            value: "01".to_string(),
        };
        assert_eq!(err.to_string(), "pre-release \"01\" doesn't match the identifier grammar");
    }
}

//! Semantic Versioning
//!
//! Parsing, validation, construction and precedence ordering of
//! [SemVer 2.0.0](https://semver.org) version identifiers.
//!
//! ## Features
//!
//! - **Strict Grammar**: Leading zeros, empty identifiers and stray characters are rejected
//! - **Immutable Values**: Every update returns a new [`Version`]
//! - **Precedence**: Numeric-aware pre-release ordering, build metadata ignored
//! - **Serde**: Versions serialize as their canonical string
//! - **Interop**: Conversions to and from [`semver::Version`]
//!
//! ## Example
//!
//! ```
//! use std::cmp::Ordering;
//! use semantic_version::Version;
//!
//! let rc = Version::parse("1.0.0-rc.1+build.5").unwrap();
//! let release = rc.with_pre_release(None).unwrap();
//!
//! assert_eq!(release.to_string(), "1.0.0+build.5");
//! assert_eq!(rc.cmp_precedence(&release), Ordering::Less);
//! assert_eq!(rc.increment_minor().unwrap().to_string(), "1.1.0");
//! ```

pub mod config;
pub mod error;
mod grammar;
pub mod identifier;
mod interop;
pub mod parser;
pub mod version;

pub use config::{ParseConfig, VersionConfig};
pub use error::{Component, IdentifierKind, NumericFault, Result, VersionError};
pub use identifier::{BuildMetadata, Identifier, Prerelease};
pub use parser::VersionParser;
pub use version::{Version, VersionBuilder};

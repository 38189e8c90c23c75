//! Configured version parser

use crate::config::{ParseConfig, VersionConfig};
use crate::error::{Result, VersionError};
use crate::version::Version;

/// Parses versions after applying a [`ParseConfig`] normalisation
///
/// Errors always report the caller's original input, not the normalised
/// form.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    config: ParseConfig,
}

impl VersionParser {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Strict SemVer 2.0.0, same as [`Version::parse`]
    pub fn strict() -> Self {
        Self::new(ParseConfig::STRICT)
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn parse(&self, input: &str) -> Result<Version> {
        let normalized = self.config.normalize(input);
        Version::parse(normalized).map_err(|err| match err {
            VersionError::MalformedInput { .. } => VersionError::malformed(input),
            other => other,
        })
    }

    /// Parse every input, stopping at the first failure
    pub fn parse_all<'a, I>(&self, inputs: I) -> Result<Vec<Version>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs.into_iter().map(|input| self.parse(input)).collect()
    }
}

impl From<&VersionConfig> for VersionParser {
    fn from(config: &VersionConfig) -> Self {
        Self::new(config.parse)
    }
}

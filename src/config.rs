//! Configuration for version parsing
//!
//! Supports loading configuration from:
//! - Default values (strict SemVer 2.0.0)
//! - Config file (semver.toml) in the user config dir and the working directory
//! - An explicit config file
//! - Environment variables (SEMVER__*)
//!
//! ## Example config file (semver.toml):
//! ```toml
//! [parse]
//! strip_v_prefix = true
//! trim_whitespace = true
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Parser settings
    #[serde(default)]
    pub parse: ParseConfig,
}

/// Input normalisation applied before the strict grammar is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Accept a single leading `v` or `V` (e.g. git tags like "v1.2.3")
    #[serde(default)]
    pub strip_v_prefix: bool,

    /// Ignore surrounding whitespace
    #[serde(default)]
    pub trim_whitespace: bool,
}

impl ParseConfig {
    /// Strict SemVer: nothing is stripped
    pub const STRICT: Self = Self {
        strip_v_prefix: false,
        trim_whitespace: false,
    };

    /// Accept tag-style input such as `" v1.2.3 "`
    pub const LENIENT: Self = Self {
        strip_v_prefix: true,
        trim_whitespace: true,
    };

    /// Apply the configured normalisation to raw input
    pub fn normalize<'a>(&self, input: &'a str) -> &'a str {
        let mut s = input;
        if self.trim_whitespace {
            s = s.trim();
        }
        if self.strip_v_prefix {
            s = s.strip_prefix(['v', 'V']).unwrap_or(s);
        }
        s
    }
}

/// File name looked up in the user config dir and the working directory
pub const CONFIG_FILE_NAME: &str = "semver.toml";

/// Prefix for environment overrides, e.g. `SEMVER__PARSE__STRIP_V_PREFIX=true`
pub const ENV_PREFIX: &str = "SEMVER";

impl VersionConfig {
    /// Optional config files, lowest priority first: the user-wide file in
    /// the platform config dir, then `semver.toml` in the working directory.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dirs) = directories::ProjectDirs::from("dev", "semver", "semantic-version") {
            paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, additionally reading a specific file
    ///
    /// Later sources win: search paths, then `config_path`, then
    /// `SEMVER__*` environment variables.
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        for path in Self::search_paths() {
            builder = builder.add_source(File::from(path).required(false));
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(?loaded, "loaded version config");
        Ok(loaded)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

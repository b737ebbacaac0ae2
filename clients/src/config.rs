//! `shapec.toml` configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shapec_shapes::DecodeOptions;

/// Name of the configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shapec.toml";

/// Compiler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language allow-list for labels, comments, and names.
    pub languages: Vec<String>,
    /// Skip `rdf:type` checks when decoding shapes.
    pub ignore_rdf_type: bool,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            ignore_rdf_type: false,
            pretty: true,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] when
    /// no path is given. A missing default file yields the defaults; a
    /// missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The decoding options this configuration selects.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            languages: self.languages.clone(),
            ignore_rdf_type: self.ignore_rdf_type,
        }
    }
}

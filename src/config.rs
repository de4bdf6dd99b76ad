//! YAML chain files.
//!
//! A chain file names any number of replacement chains so an application can
//! keep its normalization rules next to the rest of its configuration and
//! build them once at start-up.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "signup form"
//!
//! chains:
//!   display_name:
//!     preset: whitespace
//!
//!   phone:
//!     rules:
//!       - pattern: "[^0-9+]"
//!         replacement: ""
//!       - pattern: "^00"
//!         replacement: "+"
//! ```
//!
//! Each chain is either a `preset` or a `rules` list. Every chain is compiled
//! while the file is loaded, so a bad pattern fails the load instead of the
//! first request that uses it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chain::{ChainConfig, ConfigurationError, ReplacementChain, RuleConfig, whitespace_normalizer};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when loading chain files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("chain `{name}` is misconfigured: {source}")]
    Chain {
        name: String,
        #[source]
        source: ConfigurationError,
    },

    #[error("no chain named `{0}`")]
    UnknownChain(String),
}

/// Built-in chains a definition can refer to by name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    Whitespace,
}

impl Preset {
    pub fn build(self) -> ReplacementChain {
        match self {
            Preset::Whitespace => whitespace_normalizer(),
        }
    }
}

/// One named chain: a preset or an explicit rule list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Option<RuleConfig>>>,
}

impl ChainDefinition {
    fn build(&self, name: &str) -> Result<ReplacementChain, ConfigLoadError> {
        match (self.preset, &self.rules) {
            (Some(_), Some(_)) => Err(ConfigLoadError::Validation(format!(
                "chains.{name} sets both `preset` and `rules`"
            ))),
            (Some(preset), None) => Ok(preset.build()),
            (None, rules) => {
                let cfg = ChainConfig {
                    rules: rules.clone(),
                };
                ReplacementChain::from_config(&cfg).map_err(|source| ConfigLoadError::Chain {
                    name: name.to_string(),
                    source,
                })
            }
        }
    }
}

/// Top-level chain file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChainFileConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub chains: BTreeMap<String, ChainDefinition>,
}

impl ChainFileConfig {
    /// Load a YAML chain file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML chain file
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: ChainFileConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        info!(
            name = ?config.name,
            chains = config.chains.len(),
            "chain_file_loaded"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        for (name, definition) in &self.chains {
            definition.build(name)?;
        }
        Ok(())
    }

    /// Build the chain registered under `name`.
    pub fn build(&self, name: &str) -> Result<ReplacementChain, ConfigLoadError> {
        self.chains
            .get(name)
            .ok_or_else(|| ConfigLoadError::UnknownChain(name.to_string()))?
            .build(name)
    }

    /// Build every chain in the file, keyed by name.
    pub fn build_all(&self) -> Result<BTreeMap<String, ReplacementChain>, ConfigLoadError> {
        self.chains
            .iter()
            .map(|(name, definition)| Ok((name.clone(), definition.build(name)?)))
            .collect()
    }
}

impl Default for ChainFileConfig {
    fn default() -> Self {
        let mut chains = BTreeMap::new();
        chains.insert(
            "whitespace".to_string(),
            ChainDefinition {
                preset: Some(Preset::Whitespace),
                rules: None,
            },
        );
        Self {
            version: "1.0".to_string(),
            name: None,
            chains,
        }
    }
}

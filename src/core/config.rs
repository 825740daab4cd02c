use serde::Deserialize;
use std::collections::HashMap;

use crate::ciphers::{Algorithm, CipherError};

/// Configuration for a single registry entry loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct CipherConfig {
    /// Canonical algorithm name, e.g. "Caesar Cipher"
    pub algorithm: String,
    /// Short human-readable description
    #[serde(default)]
    pub description: String,
    /// Describes the expected key format
    #[serde(default)]
    pub key_hint: String,
    /// Stored key used when none is given on the command line
    #[serde(default)]
    pub key: Option<String>,
}

impl CipherConfig {
    /// Parses the entry's algorithm name.
    pub fn algorithm(&self) -> Result<Algorithm, CipherError> {
        Algorithm::from_name(&self.algorithm)
    }
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Strip one trailing line ending from CLI input before ciphering
    /// (default: true)
    #[serde(default)]
    pub strip_newline: Option<bool>,
}

impl Settings {
    pub fn strip_newline(&self) -> bool {
        self.strip_newline.unwrap_or(true)
    }
}

/// Collection of cipher configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CipherRegistry {
    /// Map of cipher aliases to their configurations
    #[serde(default)]
    pub ciphers: HashMap<String, CipherConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CipherRegistry {
    /// Parses cipher configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in cipher configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../ciphers.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in ciphers (from library)
    /// 2. `~/.config/classic-cipher/ciphers.toml` (user overrides)
    /// 3. `./ciphers.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching aliases.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("classic-cipher").join("ciphers.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("ciphers.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("loaded cipher overrides from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("failed to load cipher config from {:?}: {}", path, e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Entries from `other` override entries with the same alias in `self`.
    pub fn merge(&mut self, other: CipherRegistry) {
        for (name, cipher) in other.ciphers {
            self.ciphers.insert(name, cipher);
        }
        if other.settings.strip_newline.is_some() {
            self.settings.strip_newline = other.settings.strip_newline;
        }
    }

    /// Retrieves a cipher configuration by alias.
    pub fn get_cipher(&self, name: &str) -> Option<&CipherConfig> {
        self.ciphers.get(name)
    }

    /// Sorted aliases.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ciphers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Resolves a registry alias or a canonical algorithm name.
    ///
    /// The registry entry is returned as well when `name` is an alias.
    pub fn resolve(&self, name: &str) -> Result<(Algorithm, Option<&CipherConfig>), CipherError> {
        if let Some(entry) = self.get_cipher(name) {
            return Ok((entry.algorithm()?, Some(entry)));
        }

        if let Ok(algorithm) = Algorithm::from_name(name) {
            return Ok((algorithm, None));
        }

        let mut known = self.names();
        known.extend(Algorithm::canonical_names());
        Err(CipherError::unsupported(name, &known))
    }
}

//! Resolver configuration, loadable from TOML
//!
//! ```toml
//! data-dir = "lists"
//! fallback-domain = "example.org"
//! unresolved = "keep-marker"
//!
//! [lists]
//! words = "vocabulary.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::lists::ListPaths;
use crate::recipient::{DEFAULT_DOMAIN, DEFAULT_LOCAL_PART};

/// What to write in place of a marker that has no data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
    /// Replace the marker with nothing
    #[default]
    Empty,
    /// Leave the marker text in the output
    KeepMarker,
}

/// Configuration options for a [`Resolver`](crate::Resolver)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ResolverConfig {
    /// Base directory for relative list paths
    pub data_dir: Option<PathBuf>,

    /// Lookup list files
    pub lists: ListPaths,

    /// Local part used when the recipient has none
    pub fallback_name: String,

    /// Domain used when the recipient has none
    pub fallback_domain: String,

    pub unresolved: UnresolvedPolicy,

    /// Largest N accepted in `##numN##` and friends
    pub max_token_length: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            lists: ListPaths::default(),
            fallback_name: DEFAULT_LOCAL_PART.to_string(),
            fallback_domain: DEFAULT_DOMAIN.to_string(),
            unresolved: UnresolvedPolicy::Empty,
            max_token_length: 4096,
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `data-dir` is taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;
        if let Some(parent) = path.parent() {
            config.data_dir = Some(match config.data_dir.take() {
                Some(dir) if dir.is_relative() => parent.join(dir),
                Some(dir) => dir,
                None => parent.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// List paths with `data_dir` applied
    pub fn list_paths(&self) -> ListPaths {
        match &self.data_dir {
            Some(dir) => self.lists.relative_to(dir),
            None => self.lists.clone(),
        }
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_fallbacks(mut self, name: impl Into<String>, domain: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self.fallback_domain = domain.into();
        self
    }

    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    pub fn with_max_token_length(mut self, max: usize) -> Self {
        self.max_token_length = max;
        self
    }
}

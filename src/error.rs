//! Error types for list loading, configuration and marker resolution

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::lists::ListKind;

/// Errors that can occur while reading a lookup list
#[derive(Error, Debug)]
pub enum ListError {
    #[error("failed to read list file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when loading or parsing a resolver config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Why a marker could not be given a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingData {
    /// The lookup list backing the marker has no entries
    EmptyList(ListKind),
    /// The recipient domain has no label after the first `.`
    NoDomainSuffix,
    /// The numeric argument of a parameterized marker is unusable
    CountOutOfRange { requested: String, max: usize },
}

impl fmt::Display for MissingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingData::EmptyList(kind) => write!(f, "{} list is empty", kind),
            MissingData::NoDomainSuffix => f.write_str("recipient domain has no second label"),
            MissingData::CountOutOfRange { requested, max } => {
                write!(f, "length {} is outside 0..={}", requested, max)
            }
        }
    }
}

/// A marker occurrence that was left without data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// The literal marker text, e.g. `##randomfname##`
    pub marker: String,
    pub reason: MissingData,
}

impl Unresolved {
    pub fn new(marker: impl Into<String>, reason: MissingData) -> Self {
        Self {
            marker: marker.into(),
            reason,
        }
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.marker, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_display() {
        let u = Unresolved::new("##words##", MissingData::EmptyList(ListKind::Words));
        assert_eq!(u.to_string(), "##words##: words list is empty");
    }

    #[test]
    fn test_count_out_of_range_display() {
        let reason = MissingData::CountOutOfRange {
            requested: "99999".to_string(),
            max: 4096,
        };
        assert!(reason.to_string().contains("99999"));
        assert!(reason.to_string().contains("4096"));
    }

    #[test]
    fn test_list_error_names_path() {
        let err = ListError::Read {
            path: PathBuf::from("missing/words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing/words.txt"));
    }
}

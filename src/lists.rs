//! Lookup lists and round-robin rotation
//!
//! Lists are plain text, one entry per line. They are read once when a
//! [`LookupLists`] is built and never change afterwards; only the cursors in
//! [`RoundRobin`] move.

use std::fmt;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::ListError;

/// The five externally supplied lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    FirstNames,
    LastNames,
    Companies,
    Words,
    Links,
}

impl ListKind {
    /// File name used when no path is configured
    pub fn default_file_name(self) -> &'static str {
        match self {
            ListKind::FirstNames => "fnames.txt",
            ListKind::LastNames => "lnames.txt",
            ListKind::Companies => "companyNames.txt",
            ListKind::Words => "words.txt",
            ListKind::Links => "links.txt",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListKind::FirstNames => "first-names",
            ListKind::LastNames => "last-names",
            ListKind::Companies => "companies",
            ListKind::Words => "words",
            ListKind::Links => "links",
        })
    }
}

/// File locations of the lookup lists
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ListPaths {
    pub first_names: PathBuf,
    pub last_names: PathBuf,
    pub companies: PathBuf,
    pub words: PathBuf,
    pub links: PathBuf,
}

impl Default for ListPaths {
    fn default() -> Self {
        Self {
            first_names: ListKind::FirstNames.default_file_name().into(),
            last_names: ListKind::LastNames.default_file_name().into(),
            companies: ListKind::Companies.default_file_name().into(),
            words: ListKind::Words.default_file_name().into(),
            links: ListKind::Links.default_file_name().into(),
        }
    }
}

impl ListPaths {
    pub fn get(&self, kind: ListKind) -> &Path {
        match kind {
            ListKind::FirstNames => &self.first_names,
            ListKind::LastNames => &self.last_names,
            ListKind::Companies => &self.companies,
            ListKind::Words => &self.words,
            ListKind::Links => &self.links,
        }
    }

    /// Resolve relative paths against `base`
    pub fn relative_to(&self, base: &Path) -> Self {
        let join = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        Self {
            first_names: join(&self.first_names),
            last_names: join(&self.last_names),
            companies: join(&self.companies),
            words: join(&self.words),
            links: join(&self.links),
        }
    }
}

/// Split list text into trimmed, non-empty lines
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a list file, reporting I/O failures
pub fn read_list(path: &Path) -> Result<Vec<String>, ListError> {
    let content = std::fs::read_to_string(path).map_err(|source| ListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_list(&content))
}

/// Read a list file, degrading to an empty list on failure
pub fn load_list(path: &Path) -> Vec<String> {
    match read_list(path) {
        Ok(items) => {
            tracing::debug!(path = %path.display(), entries = items.len(), "loaded list");
            items
        }
        Err(e) => {
            tracing::error!("{}", e);
            Vec::new()
        }
    }
}

/// All lookup lists used by the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupLists {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub companies: Vec<String>,
    pub words: Vec<String>,
    pub links: Vec<String>,
}

impl LookupLists {
    /// Eagerly load every list; unreadable files become empty lists
    pub fn load(paths: &ListPaths) -> Self {
        Self {
            first_names: load_list(paths.get(ListKind::FirstNames)),
            last_names: load_list(paths.get(ListKind::LastNames)),
            companies: load_list(paths.get(ListKind::Companies)),
            words: load_list(paths.get(ListKind::Words)),
            links: load_list(paths.get(ListKind::Links)),
        }
    }

    pub fn get(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::FirstNames => &self.first_names,
            ListKind::LastNames => &self.last_names,
            ListKind::Companies => &self.companies,
            ListKind::Words => &self.words,
            ListKind::Links => &self.links,
        }
    }

    pub fn with_list<I, S>(mut self, kind: ListKind, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        match kind {
            ListKind::FirstNames => self.first_names = items,
            ListKind::LastNames => self.last_names = items,
            ListKind::Companies => self.companies = items,
            ListKind::Words => self.words = items,
            ListKind::Links => self.links = items,
        }
        self
    }
}

/// Cursor serving list entries in order, wrapping at the end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundRobin {
    cursor: usize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the next entry to serve
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the entry at the cursor and advance it.
    ///
    /// An empty list yields `None` and leaves the cursor where it is.
    pub fn next<'a>(&mut self, list: &'a [String]) -> Option<&'a str> {
        if list.is_empty() {
            return None;
        }
        // The list may have been swapped for a shorter one
        let index = self.cursor % list.len();
        self.cursor = (index + 1) % list.len();
        Some(list[index].as_str())
    }
}

/// Uniform draw with replacement
pub fn pick_random<'a, R: Rng + ?Sized>(list: &'a [String], rng: &mut R) -> Option<&'a str> {
    list.choose(rng).map(String::as_str)
}

//! Placeholder Resolver - per-recipient expansion of `##marker##` templates
//!
//! This library expands message templates for one recipient at a time. It
//! recognises fixed markers such as `##victimemail##` or `##date##`, and
//! parameterized markers such as `##num5##`. It draws names and words from
//! line-delimited lookup lists.
//!
//! # Example
//!
//! ```rust
//! use placeholder_resolver::{ListKind, LookupLists, Resolver, ResolverConfig};
//!
//! let lists = LookupLists::default().with_list(ListKind::Words, ["alpha", "beta"]);
//! let mut resolver = Resolver::new(lists, ResolverConfig::default());
//!
//! let out = resolver.resolve("Hello ##victimname## (##words##)", "ann@example.com");
//! assert_eq!(out.text, "Hello Ann (alpha)");
//! assert!(out.is_complete());
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod lists;
pub mod marker;
pub mod recipient;
pub mod resolver;

pub use config::{ResolverConfig, UnresolvedPolicy};
pub use error::{ConfigError, ListError, MissingData, Unresolved};
pub use lists::{load_list, read_list, ListKind, ListPaths, LookupLists, RoundRobin};
pub use marker::{Family, Marker, Rule, RULES};
pub use recipient::Recipient;
pub use resolver::{Resolution, Resolver, SharedResolver};

/// Expand a template once with a resolver built from `config`.
///
/// The lists are loaded on every call, so the rotation cursors always start
/// at the first entry. Keep a [`Resolver`] around to rotate across calls.
///
/// # Example
///
/// ```rust
/// use placeholder_resolver::{resolve_once, ResolverConfig};
///
/// let config = ResolverConfig::new().with_data_dir("/nonexistent");
/// let out = resolve_once("##victimdomain2##", "ops@example.org", config);
/// assert_eq!(out.text, "EXAMPLE");
/// ```
pub fn resolve_once(template: &str, recipient: &str, config: ResolverConfig) -> Resolution {
    Resolver::from_config(config).resolve(template, recipient)
}

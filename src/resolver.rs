//! Placeholder resolution
//!
//! A [`Resolver`] owns the lookup lists, the two rotation cursors and the
//! random source. Each call to [`Resolver::resolve`] expands one template
//! for one recipient:
//!
//! 1. If the template contains `##link##`, the next link template is taken
//!    from the links list and its own recipient markers are expanded.
//! 2. The rules in [`RULES`] are applied in order, each to the output of the
//!    previous one: the parameterized families, then the fixed keys.
//!
//! Markers whose data is missing are reported in [`Resolution::unresolved`]
//! and filled according to [`UnresolvedPolicy`].

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Captures;

use crate::config::{ResolverConfig, UnresolvedPolicy};
use crate::error::{MissingData, Unresolved};
use crate::generate::{
    encode_recipient, random_base64_chars, random_digits, random_letters, Case, Timestamps,
};
use crate::lists::{pick_random, ListKind, LookupLists, RoundRobin};
use crate::marker::{Family, Marker, Rule, RULES};
use crate::recipient::Recipient;

/// Output of a single resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The expanded template
    pub text: String,
    /// Markers that had no data, in the order they were met
    pub unresolved: Vec<Unresolved>,
}

impl Resolution {
    /// True when every marker received a value
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Expands templates for recipients, keeping rotation state between calls
#[derive(Debug)]
pub struct Resolver<R = StdRng> {
    lists: LookupLists,
    words: RoundRobin,
    links: RoundRobin,
    rng: R,
    config: ResolverConfig,
}

impl Resolver<StdRng> {
    pub fn new(lists: LookupLists, config: ResolverConfig) -> Self {
        Self::with_rng(lists, config, StdRng::from_entropy())
    }

    /// Load the lists named by `config` and build a resolver over them
    pub fn from_config(config: ResolverConfig) -> Self {
        let lists = LookupLists::load(&config.list_paths());
        Self::new(lists, config)
    }
}

impl<R: Rng> Resolver<R> {
    pub fn with_rng(lists: LookupLists, config: ResolverConfig, rng: R) -> Self {
        Self {
            lists,
            words: RoundRobin::new(),
            links: RoundRobin::new(),
            rng,
            config,
        }
    }

    pub fn lists(&self) -> &LookupLists {
        &self.lists
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Current positions of the words and links cursors
    pub fn cursors(&self) -> (usize, usize) {
        (self.words.cursor(), self.links.cursor())
    }

    /// Expand `template` for `recipient` using the current time
    pub fn resolve(&mut self, template: &str, recipient: &str) -> Resolution {
        self.resolve_at(template, recipient, Utc::now())
    }

    /// Expand untyped input.
    ///
    /// A template that is not UTF-8 text yields an empty resolution. A
    /// recipient that is not UTF-8 is converted lossily.
    pub fn resolve_raw(&mut self, template: &[u8], recipient: &[u8]) -> Resolution {
        let Ok(template) = std::str::from_utf8(template) else {
            tracing::error!("template is not UTF-8 text, nothing to resolve");
            return Resolution::default();
        };
        let recipient = match std::str::from_utf8(recipient) {
            Ok(r) => Cow::Borrowed(r),
            Err(_) => {
                tracing::warn!("recipient is not UTF-8 text, converting lossily");
                String::from_utf8_lossy(recipient)
            }
        };
        self.resolve(template, &recipient)
    }

    /// Expand `template` with date and time markers taken from `now`
    pub fn resolve_at(&mut self, template: &str, recipient: &str, now: DateTime<Utc>) -> Resolution {
        let recipient = Recipient::parse_with_fallbacks(
            recipient,
            &self.config.fallback_name,
            &self.config.fallback_domain,
        );
        let mut unresolved = Vec::new();

        let link = if template.contains(Marker::Link.key()) {
            self.next_link(&recipient, &mut unresolved)
        } else {
            Ok(String::new())
        };
        let timestamps = Timestamps::at(now);

        let mut text = template.to_string();
        for rule in RULES.iter() {
            match *rule {
                Rule::Family(family) => {
                    text = expand_family(
                        &text,
                        family,
                        &mut self.rng,
                        &self.config,
                        &mut unresolved,
                    );
                }
                Rule::Fixed(marker) => {
                    let key = marker.key();
                    if !text.contains(key) {
                        continue;
                    }
                    match self.fixed_value(marker, &recipient, &timestamps, &link) {
                        Ok(value) => text = text.replace(key, &value),
                        Err(reason) => {
                            tracing::debug!(marker = key, %reason, "marker left unresolved");
                            if self.config.unresolved == UnresolvedPolicy::Empty {
                                text = text.replace(key, "");
                            }
                            unresolved.push(Unresolved::new(key, reason));
                        }
                    }
                }
            }
        }

        Resolution { text, unresolved }
    }

    fn fixed_value(
        &mut self,
        marker: Marker,
        recipient: &Recipient,
        timestamps: &Timestamps,
        link: &Result<String, MissingData>,
    ) -> Result<String, MissingData> {
        let value = match marker {
            Marker::DateTime => timestamps.date_time.clone(),
            Marker::Iso => timestamps.iso.clone(),
            Marker::LongDate => timestamps.long_date.clone(),
            Marker::Time => timestamps.time.clone(),
            Marker::TimeShort => timestamps.time_short.clone(),
            Marker::TimeGmt => timestamps.time_gmt.clone(),
            Marker::RandomFirstName => self.pick(ListKind::FirstNames)?,
            Marker::RandomLastName => self.pick(ListKind::LastNames)?,
            Marker::RandomCompany => self.pick(ListKind::Companies)?,
            Marker::RecipientBase64 => encode_recipient(recipient.address()),
            Marker::Words => self
                .words
                .next(&self.lists.words)
                .map(str::to_string)
                .ok_or(MissingData::EmptyList(ListKind::Words))?,
            Marker::RecipientEmail => recipient.address().to_string(),
            Marker::RecipientName => recipient.display_name(),
            Marker::Domain => recipient.domain().to_string(),
            Marker::DomainTitle => recipient.domain_title(),
            Marker::DomainUpper => recipient.domain_upper(),
            Marker::DomainLabelPair => recipient.domain_label_pair()?,
            Marker::DomainLower => recipient.domain_lower(),
            Marker::Link => link.clone()?,
        };
        Ok(value)
    }

    fn pick(&mut self, kind: ListKind) -> Result<String, MissingData> {
        pick_random(self.lists.get(kind), &mut self.rng)
            .map(str::to_string)
            .ok_or(MissingData::EmptyList(kind))
    }

    /// Take the next link template and expand the recipient markers inside it
    fn next_link(
        &mut self,
        recipient: &Recipient,
        unresolved: &mut Vec<Unresolved>,
    ) -> Result<String, MissingData> {
        let Some(template) = self.links.next(&self.lists.links) else {
            tracing::warn!("links list is empty, ##link## has no value");
            return Err(MissingData::EmptyList(ListKind::Links));
        };
        let link = template
            .replace(
                Marker::RecipientBase64.key(),
                &encode_recipient(recipient.address()),
            )
            .replace(Marker::RecipientEmail.key(), recipient.address());
        Ok(expand_family(
            &link,
            Family::Base64Random,
            &mut self.rng,
            &self.config,
            unresolved,
        ))
    }
}

fn generate<R: Rng + ?Sized>(family: Family, n: usize, rng: &mut R) -> String {
    match family {
        Family::Num => random_digits(n, rng),
        Family::StringLower => random_letters(n, Case::Lower, rng),
        Family::StringUpper => random_letters(n, Case::Upper, rng),
        Family::Base64Random => random_base64_chars(n, rng),
    }
}

/// Replace every occurrence of one family, each with a fresh random value
fn expand_family<R: Rng + ?Sized>(
    text: &str,
    family: Family,
    rng: &mut R,
    config: &ResolverConfig,
    unresolved: &mut Vec<Unresolved>,
) -> String {
    let max = config.max_token_length;
    family
        .pattern()
        .replace_all(text, |caps: &Captures| {
            match caps[1].parse::<usize>().ok().filter(|n| *n <= max) {
                Some(n) => generate(family, n, rng),
                None => {
                    let reason = MissingData::CountOutOfRange {
                        requested: caps[1].to_string(),
                        max,
                    };
                    tracing::debug!(marker = &caps[0], %reason, "marker left unresolved");
                    unresolved.push(Unresolved::new(&caps[0], reason));
                    match config.unresolved {
                        UnresolvedPolicy::Empty => String::new(),
                        UnresolvedPolicy::KeepMarker => caps[0].to_string(),
                    }
                }
            }
        })
        .into_owned()
}

/// A resolver that can be shared between threads.
///
/// Calls are serialised, so the rotation order seen across all callers is
/// the same as for a single caller.
#[derive(Debug)]
pub struct SharedResolver<R = StdRng> {
    inner: Arc<Mutex<Resolver<R>>>,
}

impl<R> Clone for SharedResolver<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Rng> SharedResolver<R> {
    pub fn new(resolver: Resolver<R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(resolver)),
        }
    }

    pub fn resolve(&self, template: &str, recipient: &str) -> Resolution {
        self.inner.lock().resolve(template, recipient)
    }

    pub fn resolve_at(&self, template: &str, recipient: &str, now: DateTime<Utc>) -> Resolution {
        self.inner.lock().resolve_at(template, recipient, now)
    }
}

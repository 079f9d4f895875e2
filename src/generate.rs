//! Value generators for markers: random tokens, encodings and timestamps

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character set of `##base64randomN##`. Output is drawn from it, not encoded with it.
pub const BASE64_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Letter case for alphabetic tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

fn sample<R: Rng + ?Sized>(alphabet: &[u8], n: usize, rng: &mut R) -> String {
    (0..n)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// `n` decimal digits, zero padded.
///
/// Independent uniform digits give the same distribution as a uniform draw
/// from `[0, 10^n)` and work for any `n`.
pub fn random_digits<R: Rng + ?Sized>(n: usize, rng: &mut R) -> String {
    sample(DIGITS, n, rng)
}

pub fn random_letters<R: Rng + ?Sized>(n: usize, case: Case, rng: &mut R) -> String {
    match case {
        Case::Lower => sample(LOWER, n, rng),
        Case::Upper => sample(UPPER, n, rng),
    }
}

pub fn random_base64_chars<R: Rng + ?Sized>(n: usize, rng: &mut R) -> String {
    sample(BASE64_ALPHABET, n, rng)
}

/// Standard base64 of the recipient address
pub fn encode_recipient(recipient: &str) -> String {
    STANDARD.encode(recipient.as_bytes())
}

/// Date and time renderings, all taken from one instant in UTC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps {
    /// `2024-01-02T03:04:05.678Z`
    pub iso: String,
    /// `1/2/2024, 3:04:05 AM`
    pub date_time: String,
    /// `January 2, 2024`
    pub long_date: String,
    /// `03:04:05 AM`
    pub time: String,
    /// `03:04 AM`
    pub time_short: String,
    /// `03:04:05 AM GMT`
    pub time_gmt: String,
}

impl Timestamps {
    pub fn at(now: DateTime<Utc>) -> Self {
        let time = now.format("%I:%M:%S %p").to_string();
        Self {
            iso: now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            date_time: now.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            long_date: now.format("%B %-d, %Y").to_string(),
            time_short: now.format("%I:%M %p").to_string(),
            time_gmt: format!("{} GMT", time),
            time,
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

//! Marker vocabulary and the order substitutions are applied in

use std::sync::LazyLock;

use regex::Regex;

/// Markers with a fixed literal key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    DateTime,
    Iso,
    LongDate,
    Time,
    TimeShort,
    TimeGmt,
    RandomFirstName,
    RandomLastName,
    RandomCompany,
    RecipientBase64,
    Words,
    RecipientEmail,
    RecipientName,
    Domain,
    DomainTitle,
    DomainUpper,
    DomainLabelPair,
    DomainLower,
    Link,
}

const FIXED: [Marker; 19] = [
    Marker::DateTime,
    Marker::Iso,
    Marker::LongDate,
    Marker::Time,
    Marker::TimeShort,
    Marker::TimeGmt,
    Marker::RandomFirstName,
    Marker::RandomLastName,
    Marker::RandomCompany,
    Marker::RecipientBase64,
    Marker::Words,
    Marker::RecipientEmail,
    Marker::RecipientName,
    Marker::Domain,
    Marker::DomainTitle,
    Marker::DomainUpper,
    Marker::DomainLabelPair,
    Marker::DomainLower,
    Marker::Link,
];

impl Marker {
    pub fn key(self) -> &'static str {
        match self {
            Marker::DateTime => "##date1##",
            Marker::Iso => "##date##",
            Marker::LongDate => "##date2##",
            Marker::Time => "##time##",
            Marker::TimeShort => "##time1##",
            Marker::TimeGmt => "##time2##",
            Marker::RandomFirstName => "##randomfname##",
            Marker::RandomLastName => "##randomlname##",
            Marker::RandomCompany => "##randomcompany##",
            Marker::RecipientBase64 => "##victimb64email##",
            Marker::Words => "##words##",
            Marker::RecipientEmail => "##victimemail##",
            Marker::RecipientName => "##victimname##",
            Marker::Domain => "##victimdomain##",
            Marker::DomainTitle => "##victimdomain1##",
            Marker::DomainUpper => "##victimdomain2##",
            Marker::DomainLabelPair => "##victimdomain3##",
            Marker::DomainLower => "##victimdomain4##",
            Marker::Link => "##link##",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Marker::DateTime => "date and time, e.g. 1/2/2024, 3:04:05 AM",
            Marker::Iso => "ISO-8601 timestamp in UTC",
            Marker::LongDate => "long date, e.g. January 2, 2024",
            Marker::Time => "time with seconds",
            Marker::TimeShort => "time without seconds",
            Marker::TimeGmt => "time with seconds and GMT suffix",
            Marker::RandomFirstName => "random entry from the first-names list",
            Marker::RandomLastName => "random entry from the last-names list",
            Marker::RandomCompany => "random entry from the companies list",
            Marker::RecipientBase64 => "base64 of the recipient address",
            Marker::Words => "next entry of the words list, in rotation",
            Marker::RecipientEmail => "recipient address",
            Marker::RecipientName => "local part, first letter uppercased",
            Marker::Domain => "recipient domain",
            Marker::DomainTitle => "first domain label, first letter uppercased",
            Marker::DomainUpper => "first domain label, uppercased",
            Marker::DomainLabelPair => "Label.SUFFIX from the first two domain labels",
            Marker::DomainLower => "recipient domain, lowercased",
            Marker::Link => "next entry of the links list, in rotation, expanded",
        }
    }

    /// Fixed markers in substitution order
    pub fn all() -> &'static [Marker] {
        &FIXED
    }
}

/// Markers carrying a numeric length, e.g. `##num5##`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Num,
    StringLower,
    StringUpper,
    Base64Random,
}

static NUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##num(\d+)##").expect("valid marker pattern"));
static LOWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##stringlower(\d+)##").expect("valid marker pattern"));
static UPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##stringupper(\d+)##").expect("valid marker pattern"));
static BASE64_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"##base64random(\d+)##").expect("valid marker pattern"));

const FAMILIES: [Family; 4] = [
    Family::Num,
    Family::StringLower,
    Family::StringUpper,
    Family::Base64Random,
];

impl Family {
    /// Pattern with the length as capture group 1
    pub fn pattern(self) -> &'static Regex {
        match self {
            Family::Num => &*NUM_RE,
            Family::StringLower => &*LOWER_RE,
            Family::StringUpper => &*UPPER_RE,
            Family::Base64Random => &*BASE64_RE,
        }
    }

    /// Display form, with `N` for the length
    pub fn template(self) -> &'static str {
        match self {
            Family::Num => "##numN##",
            Family::StringLower => "##stringlowerN##",
            Family::StringUpper => "##stringupperN##",
            Family::Base64Random => "##base64randomN##",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Family::Num => "N random digits, zero padded",
            Family::StringLower => "N random lowercase letters",
            Family::StringUpper => "N random uppercase letters",
            Family::Base64Random => "N random characters from A-Za-z0-9+/",
        }
    }

    pub fn all() -> &'static [Family] {
        &FAMILIES
    }
}

/// One substitution step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Family(Family),
    Fixed(Marker),
}

/// Substitution order: parameterized families first, then the fixed keys.
///
/// Later rules see the output of earlier ones.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    Family::all()
        .iter()
        .copied()
        .map(Rule::Family)
        .chain(Marker::all().iter().copied().map(Rule::Fixed))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_markers() {
        let keys: HashSet<_> = Marker::all().iter().map(|m| m.key()).collect();
        assert_eq!(keys.len(), Marker::all().len());
        for key in keys {
            assert!(key.starts_with("##") && key.ends_with("##"), "{}", key);
        }
    }

    #[test]
    fn test_no_key_is_matched_by_a_family() {
        for marker in Marker::all() {
            for family in Family::all() {
                assert!(!family.pattern().is_match(marker.key()));
            }
        }
    }

    #[test]
    fn test_family_captures_length() {
        let caps = Family::StringUpper.pattern().captures("x ##stringupper12## y").unwrap();
        assert_eq!(&caps[1], "12");
        assert!(Family::Num.pattern().captures("##num##").is_none());
        assert!(Family::Num.pattern().captures("##numx##").is_none());
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(RULES.len(), 23);
        assert_eq!(RULES[0], Rule::Family(Family::Num));
        assert_eq!(RULES[3], Rule::Family(Family::Base64Random));
        assert_eq!(RULES[4], Rule::Fixed(Marker::DateTime));
        assert_eq!(RULES[22], Rule::Fixed(Marker::Link));
    }
}

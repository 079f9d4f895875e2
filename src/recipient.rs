//! Fields derived from a recipient address

use crate::error::MissingData;

pub const DEFAULT_LOCAL_PART: &str = "defaultname";
pub const DEFAULT_DOMAIN: &str = "defaultdomain.com";

/// A recipient address split into the parts markers refer to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    address: String,
    local_part: String,
    domain: String,
}

impl Recipient {
    /// Split on the first `@`, using the default fallbacks for missing parts
    pub fn parse(address: &str) -> Self {
        Self::parse_with_fallbacks(address, DEFAULT_LOCAL_PART, DEFAULT_DOMAIN)
    }

    /// Split on the first `@`.
    ///
    /// An empty local part or domain is replaced by the matching fallback.
    /// Anything after a second `@` is discarded from the domain.
    pub fn parse_with_fallbacks(address: &str, fallback_local: &str, fallback_domain: &str) -> Self {
        let mut parts = address.split('@');
        let local = parts.next().filter(|s| !s.is_empty());
        let domain = parts.next().filter(|s| !s.is_empty());
        Self {
            address: address.to_string(),
            local_part: local.unwrap_or(fallback_local).to_string(),
            domain: domain.unwrap_or(fallback_domain).to_string(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn domain_parts(&self) -> impl Iterator<Item = &str> {
        self.domain.split('.')
    }

    fn first_label(&self) -> &str {
        self.domain_parts().next().unwrap_or_default()
    }

    /// Local part with its first character uppercased
    pub fn display_name(&self) -> String {
        capitalize(&self.local_part)
    }

    /// First domain label, first character uppercased
    pub fn domain_title(&self) -> String {
        capitalize(self.first_label())
    }

    /// First domain label, uppercased
    pub fn domain_upper(&self) -> String {
        self.first_label().to_uppercase()
    }

    /// `Example.COM` style: title-cased first label and uppercased second label
    pub fn domain_label_pair(&self) -> Result<String, MissingData> {
        let mut labels = self.domain_parts();
        let first = labels.next().unwrap_or_default();
        match labels.next() {
            Some(second) => Ok(format!("{}.{}", capitalize(first), second.to_uppercase())),
            None => Err(MissingData::NoDomainSuffix),
        }
    }

    /// Whole domain, lowercased
    pub fn domain_lower(&self) -> String {
        self.domain.to_lowercase()
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_address() {
        let r = Recipient::parse("alice@Example.COM");
        assert_eq!(r.local_part(), "alice");
        assert_eq!(r.domain(), "Example.COM");
        assert_eq!(r.display_name(), "Alice");
        assert_eq!(r.domain_title(), "Example");
        assert_eq!(r.domain_upper(), "EXAMPLE");
        assert_eq!(r.domain_label_pair(), Ok("Example.COM".to_string()));
        assert_eq!(r.domain_lower(), "example.com");
    }

    #[test]
    fn test_parse_without_at_uses_default_domain() {
        let r = Recipient::parse("alice");
        assert_eq!(r.local_part(), "alice");
        assert_eq!(r.domain(), DEFAULT_DOMAIN);
        assert_eq!(r.address(), "alice");
    }

    #[test]
    fn test_parse_empty_local_part() {
        let r = Recipient::parse("@example.org");
        assert_eq!(r.local_part(), DEFAULT_LOCAL_PART);
        assert_eq!(r.display_name(), "Defaultname");
    }

    #[test]
    fn test_custom_fallbacks() {
        let r = Recipient::parse_with_fallbacks("", "friend", "example.net");
        assert_eq!(r.local_part(), "friend");
        assert_eq!(r.domain(), "example.net");
    }

    #[test]
    fn test_domain_without_dot_has_no_suffix() {
        let r = Recipient::parse("root@localhost");
        assert_eq!(r.domain_title(), "Localhost");
        assert_eq!(r.domain_label_pair(), Err(MissingData::NoDomainSuffix));
    }

    #[test]
    fn test_subdomain_uses_first_two_labels() {
        let r = Recipient::parse("ops@mail.example.co.uk");
        assert_eq!(r.domain_label_pair(), Ok("Mail.EXAMPLE".to_string()));
    }

    #[test]
    fn test_capitalize_keeps_rest() {
        assert_eq!(capitalize("mcDonald"), "McDonald");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }
}

//! Integration tests for template expansion behaviour

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use placeholder_resolver::generate::BASE64_ALPHABET;
use placeholder_resolver::{
    ListKind, LookupLists, Marker, MissingData, Resolver, ResolverConfig,
};

fn seeded(lists: LookupLists) -> Resolver<StdRng> {
    Resolver::with_rng(lists, ResolverConfig::default(), StdRng::seed_from_u64(2024))
}

fn full_lists() -> LookupLists {
    LookupLists::default()
        .with_list(ListKind::FirstNames, ["Ada", "Grace"])
        .with_list(ListKind::LastNames, ["Lovelace", "Hopper"])
        .with_list(ListKind::Companies, ["Initech", "Globex"])
        .with_list(ListKind::Words, ["alpha", "beta", "gamma"])
        .with_list(ListKind::Links, ["https://x.test/##victimb64email##"])
}

#[test]
fn test_every_fixed_marker_is_replaced() {
    let template: String = Marker::all()
        .iter()
        .map(|m| m.key())
        .collect::<Vec<_>>()
        .join("|");
    let mut resolver = seeded(full_lists());
    let out = resolver.resolve(&template, "carol@example.com");

    assert!(out.is_complete(), "unresolved: {:?}", out.unresolved);
    assert!(!out.text.contains("##"), "left markers in {}", out.text);
    assert_eq!(out.text.split('|').count(), Marker::all().len());
}

#[test]
fn test_parameterized_lengths() {
    let mut resolver = seeded(LookupLists::default());
    for n in 1..=20 {
        let template = format!(
            "##num{n}##|##stringlower{n}##|##stringupper{n}##|##base64random{n}##"
        );
        let out = resolver.resolve(&template, "x@example.com");
        let parts: Vec<&str> = out.text.split('|').collect();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.len() == n), "n={} got {:?}", n, parts);
        assert!(parts[0].bytes().all(|b| b.is_ascii_digit()));
        assert!(parts[1].bytes().all(|b| b.is_ascii_lowercase()));
        assert!(parts[2].bytes().all(|b| b.is_ascii_uppercase()));
        assert!(parts[3].bytes().all(|b| BASE64_ALPHABET.contains(&b)));
    }
}

#[test]
fn test_words_round_robin() {
    let lists = LookupLists::default().with_list(ListKind::Words, ["a", "b", "c"]);
    let mut resolver = seeded(lists);
    let served: Vec<String> = (0..4)
        .map(|_| resolver.resolve("##words##", "x@example.com").text)
        .collect();
    assert_eq!(served, vec!["a", "b", "c", "a"]);
}

#[test]
fn test_link_carries_encoded_recipient() {
    let lists = LookupLists::default().with_list(ListKind::Links, ["http://x.test/##victimb64email##"]);
    let mut resolver = seeded(lists);
    let out = resolver.resolve("Click ##link##", "bob@example.com");
    assert_eq!(out.text, "Click http://x.test/Ym9iQGV4YW1wbGUuY29t");
}

#[test]
fn test_domain_derivation() {
    let mut resolver = seeded(LookupLists::default());
    let out = resolver.resolve(
        "##victimdomain##;##victimname##;##victimdomain4##",
        "alice@Example.COM",
    );
    assert_eq!(out.text, "Example.COM;Alice;example.com");
}

#[test]
fn test_non_text_template_gives_empty_output() {
    let mut resolver = seeded(full_lists());
    let out = resolver.resolve_raw(&[0xc3, 0x28, 0xa0], b"bob@example.com");
    assert_eq!(out.text, "");
    assert!(out.unresolved.is_empty());
    // Nothing was consumed
    assert_eq!(resolver.cursors(), (0, 0));
}

#[test]
fn test_domain_without_suffix_is_flagged() {
    let mut resolver = seeded(LookupLists::default());
    let out = resolver.resolve("[##victimdomain3##]", "admin@intranet");
    assert_eq!(out.text, "[]");
    assert_eq!(out.unresolved.len(), 1);
    assert_eq!(out.unresolved[0].reason, MissingData::NoDomainSuffix);
}

#[test]
fn test_families_expand_before_fixed_markers() {
    // A word containing a family marker is inserted after the families ran,
    // so it comes through literally.
    let lists = LookupLists::default().with_list(ListKind::Words, ["##num3##"]);
    let mut resolver = seeded(lists);
    let out = resolver.resolve("##words## ##num3##", "x@example.com");
    let (word, digits) = out.text.split_once(' ').unwrap();
    assert_eq!(word, "##num3##");
    assert_eq!(digits.len(), 3);
}

#[test]
fn test_date_markers_share_one_instant() {
    let now = Utc.with_ymd_and_hms(2025, 7, 4, 23, 59, 58).unwrap();
    let mut resolver = seeded(LookupLists::default());
    let out = resolver.resolve_at(
        "##date1## / ##time## / ##time2##",
        "x@example.com",
        now,
    );
    assert_eq!(out.text, "7/4/2025, 11:59:58 PM / 11:59:58 PM / 11:59:58 PM GMT");
}

#[test]
fn test_lists_loaded_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("fnames.txt"), "Only\n\n").unwrap();
    std::fs::write(dir.path().join("links.txt"), "https://a.test/##victimemail##\n").unwrap();

    let config = ResolverConfig::new().with_data_dir(dir.path());
    let mut resolver = Resolver::from_config(config);
    assert_eq!(resolver.lists().first_names, vec!["Only".to_string()]);
    assert!(resolver.lists().words.is_empty());

    let out = resolver.resolve("##randomfname## ##link##", "dan@example.com");
    assert_eq!(out.text, "Only https://a.test/dan@example.com");
}

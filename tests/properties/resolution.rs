//! Property tests for region-name resolution.

use std::collections::BTreeSet;

use proptest::prelude::*;

use gridclear::domain::services::resolve;
use gridclear::domain::value_objects::RegionNamePattern;
use gridclear::infrastructure::{InMemoryCache, InMemoryRegion};

fn region_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

fn cache_with(names: &BTreeSet<String>) -> InMemoryCache {
    let mut cache = InMemoryCache::new();
    for name in names {
        cache.add_region(InMemoryRegion::new(name.clone(), None));
    }
    cache
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Literal names resolve to exactly their deduplicated set.
    #[test]
    fn property_literals_resolve_to_deduplicated_input(
        names in proptest::collection::vec(region_name(), 0..16)
    ) {
        // Empty catalog: literals are never checked against it.
        let cache = InMemoryCache::new();
        let resolution = resolve(&cache, &names);

        let expected: BTreeSet<String> = names.iter().cloned().collect();
        prop_assert_eq!(resolution.regions, expected);
        prop_assert!(resolution.failures.is_empty());
    }

    /// PROPERTY: Mixed input resolves to literals plus catalog matches.
    #[test]
    fn property_mixed_input_is_union_of_literals_and_matches(
        catalog in proptest::collection::btree_set(region_name(), 0..16),
        literals in proptest::collection::vec(region_name(), 0..8),
        prefixes in proptest::collection::vec("[a-z]{1,2}", 1..4),
    ) {
        let cache = cache_with(&catalog);

        let mut names: Vec<String> = literals.clone();
        names.extend(prefixes.iter().map(|p| format!("{p}*")));
        names.extend(prefixes.iter().map(|p| format!("{p}*")));

        let resolution = resolve(&cache, &names);

        let mut expected: BTreeSet<String> = literals.into_iter().collect();
        expected.extend(
            catalog
                .iter()
                .filter(|r| prefixes.iter().any(|p| r.starts_with(p.as_str())))
                .cloned(),
        );
        prop_assert_eq!(resolution.regions, expected);
        prop_assert!(resolution.failures.is_empty());
    }

    /// PROPERTY: `prefix*` matches any extension of the prefix and nothing
    /// that merely contains it later.
    #[test]
    fn property_star_is_anchored_prefix_match(
        prefix in "[a-z]{1,6}",
        suffix in "[a-z0-9_]{0,8}",
    ) {
        let matcher = RegionNamePattern::parse(format!("{prefix}*")).compile().unwrap();

        let extended = format!("{prefix}{suffix}");
        let embedded = format!("#{prefix}{suffix}");
        prop_assert!(matcher.matches(&extended));
        prop_assert!(!matcher.matches(&embedded));
    }

    /// PROPERTY: `?` stands for at most one character.
    #[test]
    fn property_question_mark_is_single_character(
        stem in "[a-z]{1,6}",
        tail in "[a-z]{2,4}",
    ) {
        let matcher = RegionNamePattern::parse(format!("{stem}?")).compile().unwrap();

        let one_more = format!("{stem}{}", &tail[..1]);
        let too_many = format!("{stem}{tail}");
        prop_assert!(matcher.matches(&one_more));
        prop_assert!(!matcher.matches(&too_many));
    }
}

//! Edit distance and similarity, checked against `strsim` as an oracle.

use proptest::prelude::*;
use sokoni::{is_similar, levenshtein_distance, levenshtein_within, similarity};

fn word() -> impl Strategy<Value = String> {
    // Mix in a couple of non-ASCII letters so char counting is exercised
    proptest::string::string_regex("[a-eé ü]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_distance_matches_strsim(a in word(), b in word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_symmetric(a in word(), b in word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn prop_zero_iff_equal(a in word(), b in word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_within_agrees_with_distance(a in word(), b in word(), max in 0usize..6) {
        prop_assert_eq!(
            levenshtein_within(&a, &b, max),
            levenshtein_distance(&a, &b) <= max
        );
    }

    #[test]
    fn prop_similarity_in_unit_range(a in word(), b in word()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn prop_is_similar_agrees_with_similarity(
        a in word(),
        b in word(),
        threshold in prop::sample::select(vec![0.0, 0.5, 0.7, 0.75, 0.8, 0.9, 1.0]),
    ) {
        prop_assert_eq!(is_similar(&a, &b, threshold), similarity(&a, &b) > threshold);
    }
}

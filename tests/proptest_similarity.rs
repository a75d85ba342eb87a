//! Property-based tests for the Damerau-Levenshtein distance and the
//! similarity scores derived from it.
//!
//! The distance is cross validated against `strsim`, which implements the same
//! unrestricted Damerau-Levenshtein distance independently.

use damerau_similarity::distance::damerau_levenshtein;
use damerau_similarity::{similarity, similarity_percentage, SimilarityError};
use proptest::prelude::*;

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,12}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..16).prop_map(|chars| chars.into_iter().collect())
}

fn arb_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,16}").unwrap()
}

fn arb_blank() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn distance_matches_strsim(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(
            strsim::damerau_levenshtein(&a, &b),
            damerau_levenshtein::distance(a.chars(), b.chars())
        );
    }

    #[test]
    fn distance_matches_strsim_unicode(a in arb_unicode_string(), b in arb_unicode_string()) {
        prop_assert_eq!(
            strsim::damerau_levenshtein(&a, &b),
            damerau_levenshtein::distance(a.chars(), b.chars())
        );
    }

    #[test]
    fn distance_chars_and_bytes_agree(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(
            damerau_levenshtein::distance(a.chars(), b.chars()),
            damerau_levenshtein::distance(a.bytes(), b.bytes())
        );
    }

    #[test]
    fn distance_identity(a in arb_unicode_string()) {
        prop_assert_eq!(0, damerau_levenshtein::distance(a.chars(), a.chars()));
    }

    #[test]
    fn distance_symmetric(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(
            damerau_levenshtein::distance(a.chars(), b.chars()),
            damerau_levenshtein::distance(b.chars(), a.chars())
        );
    }

    #[test]
    fn distance_triangle_inequality(a in arb_string(), b in arb_string(), c in arb_string()) {
        let d_ac = damerau_levenshtein::distance(a.chars(), c.chars());
        let d_ab = damerau_levenshtein::distance(a.chars(), b.chars());
        let d_bc = damerau_levenshtein::distance(b.chars(), c.chars());
        prop_assert!(d_ac <= d_ab + d_bc);
    }

    #[test]
    fn distance_bounded_by_lengths(a in arb_string(), b in arb_string()) {
        let len1 = a.chars().count();
        let len2 = b.chars().count();
        let dist = damerau_levenshtein::distance(a.chars(), b.chars());
        prop_assert!(dist >= len1.abs_diff(len2));
        prop_assert!(dist <= len1.max(len2));
    }

    #[test]
    fn adjacent_swap_is_one_edit(a in arb_word(), pos in any::<prop::sample::Index>()) {
        let mut chars: Vec<char> = a.chars().collect();
        prop_assume!(chars.len() >= 2);
        let i = pos.index(chars.len() - 1);
        prop_assume!(chars[i] != chars[i + 1]);
        chars.swap(i, i + 1);

        prop_assert_eq!(1, damerau_levenshtein::distance(a.chars(), chars.iter().copied()));
    }

    #[test]
    fn similarity_in_range(a in arb_word(), b in arb_word(), case_sensitive in any::<bool>()) {
        let sim = similarity(a.as_str(), b.as_str(), case_sensitive).unwrap();
        prop_assert!((0.0..=1.0).contains(&sim));
    }

    #[test]
    fn similarity_symmetric(a in arb_word(), b in arb_word(), case_sensitive in any::<bool>()) {
        prop_assert_eq!(
            similarity(a.as_str(), b.as_str(), case_sensitive),
            similarity(b.as_str(), a.as_str(), case_sensitive)
        );
    }

    #[test]
    fn similarity_of_identical_strings(a in arb_word()) {
        prop_assert_eq!(Ok(1.0), similarity(a.as_str(), a.as_str(), true));
    }

    #[test]
    fn similarity_ignores_case_by_default(a in arb_word()) {
        prop_assert_eq!(Ok(1.0), similarity(a.to_uppercase().as_str(), a.to_lowercase().as_str(), false));
    }

    #[test]
    fn similarity_matches_strsim_when_case_sensitive(a in arb_word(), b in arb_word()) {
        let expected = strsim::normalized_damerau_levenshtein(&a, &b);
        let sim = similarity(a.as_str(), b.as_str(), true).unwrap();
        prop_assert!((expected - sim).abs() < 1e-12);
    }

    #[test]
    fn percentage_is_scaled_similarity(a in arb_word(), b in arb_word(), case_sensitive in any::<bool>()) {
        let sim = similarity(a.as_str(), b.as_str(), case_sensitive).unwrap();
        prop_assert_eq!(Ok(sim * 100.0), similarity_percentage(a.as_str(), b.as_str(), case_sensitive));
    }

    #[test]
    fn blank_input_is_rejected(blank in arb_blank(), word in arb_word(), case_sensitive in any::<bool>()) {
        prop_assert_eq!(
            Err(SimilarityError::InvalidInput),
            similarity(blank.as_str(), word.as_str(), case_sensitive)
        );
        prop_assert_eq!(
            Err(SimilarityError::InvalidInput),
            similarity_percentage(word.as_str(), blank.as_str(), case_sensitive)
        );
    }
}

//! Property-based tests for the stateless helpers.

use proptest::prelude::*;
use stringkit::{
    BASE62, CaseTransformOptions, PadDirection, PadOptions, StringKit, count_occurrences,
    escape_html, pad, random_string, to_camel_case, to_constant_case, to_kebab_case,
    to_pascal_case, to_snake_case, unescape_html,
};

fn direction() -> impl Strategy<Value = PadDirection> {
    prop_oneof![
        Just(PadDirection::Left),
        Just(PadDirection::Right),
        Just(PadDirection::Both),
    ]
}

#[test]
fn empty_input_is_identity_for_case_converters() {
    assert_eq!(to_camel_case("", &CaseTransformOptions::default()), "");
    assert_eq!(to_pascal_case(""), "");
    assert_eq!(to_kebab_case(""), "");
    assert_eq!(to_snake_case(""), "");
    assert_eq!(to_constant_case(""), "");
}

proptest! {
    #[test]
    fn pad_reaches_target_and_keeps_input(s in "[a-z ]{0,20}", target in 0usize..40, dir in direction()) {
        let padded = pad(&s, target, &PadOptions::default().direction(dir).fill('#'));
        prop_assert_eq!(padded.chars().count(), target.max(s.chars().count()));
        prop_assert!(padded.contains(s.as_str()));
    }

    #[test]
    fn pad_both_puts_smaller_half_left(s in "[a-z]{0,10}", target in 0usize..30) {
        let padded = pad(&s, target, &PadOptions::default().direction(PadDirection::Both).fill('#'));
        let left = padded.chars().take_while(|c| *c == '#').count();
        let right = padded.chars().rev().take_while(|c| *c == '#').count();
        prop_assert!(left <= right);
        prop_assert!(right - left <= 1);
    }

    #[test]
    fn count_occurrences_is_bounded(hay in "[ab]{0,30}", needle in "[ab]{1,3}") {
        let count = count_occurrences(&hay, &needle);
        prop_assert!(count * needle.len() <= hay.len());
    }

    #[test]
    fn html_escape_round_trips(s in "[&<>\"' a-z]{0,30}") {
        prop_assert_eq!(unescape_html(&escape_html(&s)), s);
    }

    #[test]
    fn random_string_respects_length_and_charset(len in 0usize..64) {
        let out = random_string(len, BASE62);
        prop_assert_eq!(out.chars().count(), len);
        prop_assert!(out.chars().all(|c| BASE62.contains(c)));
    }

    #[test]
    fn snake_and_kebab_agree(s in "[a-zA-Z _-]{0,24}") {
        prop_assert_eq!(to_snake_case(&s).replace('_', "-"), to_kebab_case(&s));
    }

    #[test]
    fn builder_receiver_is_unchanged(s in ".{0,20}") {
        let kit = StringKit::of(s.clone());
        let _ = kit.reverse().to_kebab_case().slugify();
        prop_assert_eq!(kit.as_str(), s.as_str());
    }
}

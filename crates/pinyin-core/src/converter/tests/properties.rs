//! Property-based tests for the conversion pipeline.
//!
//! Inputs mix dictionary ideographs with characters that have no entry, so
//! every run exercises both the lookup and the drop path.

use proptest::prelude::*;

use super::*;
use crate::tone::strip_tones;

fn arb_char() -> impl Strategy<Value = char> {
    prop_oneof![
        4 => prop::sample::select(vec!['中', '国', '张', '诚', '我', '们', '绿', '的']),
        1 => prop::sample::select(vec!['a', 'Z', ' ', ',', '，', '。', '1', '字']),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_char(), 0..24).prop_map(|cs| cs.into_iter().collect())
}

fn arb_separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", " ", "-", "'", "||"]).prop_map(String::from)
}

fn convert(res: &Resources, text: &str, mode: Mode) -> Vec<String> {
    res.converter(text).with_mode(mode).syllables().unwrap()
}

proptest! {
    #[test]
    fn tone_mode_is_dictionary_form(text in arb_text()) {
        let res = test_resources();
        let dict = res.dictionary().unwrap();
        let expected: Vec<String> = text
            .chars()
            .filter_map(|c| dict.get(c).map(str::to_string))
            .collect();
        prop_assert_eq!(convert(&res, &text, Mode::Tone), expected);
    }

    #[test]
    fn without_tone_strips_tone_form(text in arb_text()) {
        let res = test_resources();
        let toned = convert(&res, &text, Mode::Tone);
        let plain = convert(&res, &text, Mode::WithoutTone);
        let stripped: Vec<String> = toned.iter().map(|s| strip_tones(s)).collect();
        prop_assert_eq!(plain, stripped);
    }

    #[test]
    fn capitals_upper_case_first_char(text in arb_text()) {
        let res = test_resources();
        let plain = convert(&res, &text, Mode::WithoutTone);
        let caps = convert(&res, &text, Mode::InitialsInCapitals);
        prop_assert_eq!(plain.len(), caps.len());
        for (p, c) in plain.iter().zip(&caps) {
            let mut p_chars = p.chars();
            let mut c_chars = c.chars();
            let (p0, c0) = (p_chars.next().unwrap(), c_chars.next().unwrap());
            prop_assert_eq!(c0, p0.to_ascii_uppercase());
            prop_assert_eq!(p_chars.as_str(), c_chars.as_str());
        }
    }

    #[test]
    fn separator_count(text in arb_text(), sep in arb_separator()) {
        prop_assume!(!sep.is_empty());
        let res = test_resources();
        let syllables = convert(&res, &text, Mode::WithoutTone);
        let joined = res.converter(&text).with_separator(sep.clone()).convert().unwrap();
        let expected = syllables.len().saturating_sub(1);
        prop_assert_eq!(joined.matches(sep.as_str()).count(), expected);
    }

    #[test]
    fn convert_is_idempotent(text in arb_text(), sep in arb_separator()) {
        let res = test_resources();
        for mode in Mode::ALL {
            let conv = res.converter(&text).with_separator(sep.clone()).with_mode(mode);
            prop_assert_eq!(conv.convert().unwrap(), conv.convert().unwrap());
        }
    }

    #[test]
    fn uninitialized_always_fails(text in arb_text()) {
        let res: Resources = Resources::unavailable();
        for mode in Mode::ALL {
            prop_assert_eq!(
                res.converter(&text).with_mode(mode).convert(),
                Err(ConvertError::Uninitialized)
            );
        }
    }
}

//! Property-based tests for the codec laws
//!
//! Round-tripping through every tier and output encoding, and identity on
//! text without references.

use markup_entities::{escape, unescape, unescape_strict, Charset, EscapeOptions, EscapeTier};
use proptest::prelude::*;

fn any_tier() -> impl Strategy<Value = EscapeTier> {
    prop_oneof![
        Just(EscapeTier::Restricted),
        Just(EscapeTier::Base),
        Just(EscapeTier::Extended),
    ]
}

fn any_charset() -> impl Strategy<Value = Option<Charset>> {
    prop_oneof![
        Just(None),
        Just(Some(Charset::Ascii)),
        Just(Some(Charset::Latin1)),
        Just(Some(Charset::Utf8)),
    ]
}

fn options(tier: EscapeTier, charset: Option<Charset>) -> EscapeOptions {
    let options = EscapeOptions::new().with_tier(tier);
    match charset {
        Some(charset) => options.with_charset(charset),
        None => options,
    }
}

proptest! {
    #[test]
    fn prop_round_trip_any_text(text in any::<String>(), tier in any_tier(), charset in any_charset()) {
        let escaped = escape(&text, &options(tier, charset));
        prop_assert_eq!(unescape(&escaped), text.as_str());
        prop_assert_eq!(unescape_strict(&escaped), text.as_str());
    }

    #[test]
    fn prop_round_trip_markup_heavy(text in "[&;#a-z0-9<>\"' éα€😀]{0,40}", tier in any_tier()) {
        let escaped = escape(&text, &options(tier, Some(Charset::Ascii)));
        prop_assert!(escaped.is_ascii());
        prop_assert_eq!(unescape(&escaped), text.as_str());
    }

    #[test]
    fn prop_unescape_identity_without_ampersand(text in "[^&]*") {
        prop_assert_eq!(unescape(&text), text.as_str());
        prop_assert_eq!(unescape_strict(&text), text.as_str());
    }

    #[test]
    fn prop_escaped_output_has_no_raw_markup(text in any::<String>(), tier in any_tier()) {
        let escaped = escape(&text, &options(tier, None));
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn prop_unescape_never_grows(text in "[&;#xX0-9a-zA-Z ]{0,40}") {
        prop_assert!(unescape(&text).len() <= text.len());
    }

    #[test]
    fn prop_numeric_forms_agree(code in 0u32..=0x10FFFF) {
        let decimal = format!("&#{code};");
        let hex = format!("&#x{code:x};");
        let upper = format!("&#X{code:X};");
        match char::from_u32(code) {
            Some(ch) => {
                let expected = ch.to_string();
                prop_assert_eq!(unescape(&decimal), expected.as_str());
                prop_assert_eq!(unescape(&hex), expected.as_str());
                prop_assert_eq!(unescape(&upper), expected.as_str());
            }
            None => {
                prop_assert_eq!(unescape(&decimal), decimal.as_str());
                prop_assert_eq!(unescape(&hex), hex.as_str());
            }
        }
    }
}

use markup_entities::{
    escape, escape_into, unescape, unescape_strict, unescape_with, Charset, EscapeConfig,
    EscapeOptions, EscapeTier,
};
use std::borrow::Cow;

#[test]
fn test_escape_with_different_tiers() {
    let input = "<Hello & World>";

    for tier in EscapeTier::ALL {
        let escaped = escape(input, &EscapeOptions::new().with_tier(tier));
        println!("{tier}: {escaped}");
        assert_eq!(escaped, "&lt;Hello &amp; World&gt;");
    }
}

#[test]
fn test_escape_base_symbols() {
    let escaped = escape("© 2023 <test> & \"quotes\"", &EscapeOptions::new());
    assert_eq!(escaped, "&copy; 2023 &lt;test&gt; &amp; &quot;quotes&quot;");
}

#[test]
fn test_no_escape_needed_borrows() {
    let input = "plain text without special characters";
    let escaped = escape(input, &EscapeOptions::restricted());
    assert_eq!(escaped, input);
    assert!(matches!(escaped, Cow::Borrowed(_)));
}

#[test]
fn test_non_encodable_character() {
    let options = EscapeOptions::new().with_charset(Charset::Ascii);
    let escaped = escape("normal\u{FFFF}text", &options);
    assert_eq!(escaped, "normal&#65535;text");
}

#[test]
fn test_tiers_under_ascii_output() {
    let text = "naïve café – α→β";
    let ascii = EscapeOptions::new().with_charset(Charset::Ascii);

    assert_eq!(
        escape(text, &ascii.with_tier(EscapeTier::Restricted)),
        "na&#239;ve caf&#233; &#8211; &#945;&#8594;&#946;"
    );
    assert_eq!(
        escape(text, &ascii.with_tier(EscapeTier::Base)),
        "na&iuml;ve caf&eacute; &#8211; &#945;&#8594;&#946;"
    );
    assert_eq!(
        escape(text, &ascii.with_tier(EscapeTier::Extended)),
        "na&iuml;ve caf&eacute; &ndash; &alpha;&rarr;&beta;"
    );
}

#[test]
fn test_round_trip_mixed_text() {
    let text = "Tom & Jerry's \"show\" <b>© 2024</b> — 😀 ∑ x²";
    for tier in EscapeTier::ALL {
        for options in [
            EscapeOptions::new().with_tier(tier),
            EscapeOptions::new().with_tier(tier).with_charset(Charset::Ascii),
            EscapeOptions::new().with_tier(tier).with_charset(Charset::Latin1),
        ] {
            let escaped = escape(text, &options);
            assert_eq!(unescape(&escaped), text, "lenient, {options:?}");
            assert_eq!(unescape_strict(&escaped), text, "strict, {options:?}");
        }
    }
}

#[test]
fn test_escape_into_builds_document() {
    let options = EscapeOptions::restricted();
    let mut html = String::from("<a title=\"");
    escape_into(&mut html, "\"quoted\" & more", &options);
    html.push_str("\">");
    escape_into(&mut html, "1 < 2", &options);
    html.push_str("</a>");

    assert_eq!(
        html,
        "<a title=\"&quot;quoted&quot; &amp; more\">1 &lt; 2</a>"
    );
}

#[test]
fn test_unescape_mixed_entities() {
    let unescaped = unescape("Price: &pound;100 &#x20AC;200 &euro;300");
    assert_eq!(unescaped, "Price: £100 €200 €300");
}

#[test]
fn test_unescape_invalid_entities_untouched() {
    let input = "test &invalid; &another &";
    assert_eq!(unescape(input), input);
    assert_eq!(unescape_strict(input), input);
}

#[test]
fn test_strict_and_lenient_modes() {
    let with_semicolon = "&amp;&lt;&gt;";
    let without_semicolon = "&amp&lt&gt";

    assert_eq!(unescape_with(without_semicolon, true), without_semicolon);
    assert_eq!(unescape_with(without_semicolon, false), "&<>");
    assert_eq!(unescape_with(with_semicolon, true), "&<>");
    assert_eq!(unescape_with(with_semicolon, false), "&<>");
}

#[test]
fn test_query_string_in_text() {
    // `copy` is a name, `lan` is not and has no base name as a prefix
    let url = "?a=1&copy=2&lan=en";
    assert_eq!(unescape(url), "?a=1©=2&lan=en");
    assert_eq!(unescape_strict(url), url);
}

#[test]
fn test_config_from_json() {
    let config: EscapeConfig =
        serde_json::from_str(r#"{"tier": "restricted", "charset": "US-ASCII"}"#).unwrap();
    assert_eq!(config.tier, EscapeTier::Restricted);
    assert_eq!(config.charset, Some(Charset::Ascii));

    let options = EscapeOptions::from(config);
    assert_eq!(escape("<é>", &options), "&lt;&#233;&gt;");
}

#[test]
fn test_config_defaults_from_json() {
    let config: EscapeConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, EscapeConfig::default());
    assert_eq!(config.tier, EscapeTier::Base);
    assert_eq!(config.charset, None);
}

#[test]
fn test_config_rejects_unknown_values() {
    assert!(serde_json::from_str::<EscapeConfig>(r#"{"tier": "xhtml"}"#).is_err());

    let err = serde_json::from_str::<EscapeConfig>(r#"{"charset": "ebcdic"}"#).unwrap_err();
    assert!(err.to_string().contains("ebcdic"));
}

#[test]
fn test_config_serializes_canonical_names() {
    let config = EscapeConfig {
        tier: EscapeTier::Extended,
        charset: Some(Charset::Latin1),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"tier":"extended","charset":"iso-8859-1"}"#);
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("<{i}> café & ∑");
                let options = EscapeOptions::extended().with_charset(Charset::Ascii);
                let escaped = escape(&text, &options).into_owned();
                assert_eq!(unescape(&escaped), text);
                escaped
            })
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[3], "&lt;3&gt; caf&eacute; &amp; &sum;");
}

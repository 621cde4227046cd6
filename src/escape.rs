//! Escaping raw text into markup-safe text.
//!
//! Every character goes through a fixed three-step policy ([`classify`]):
//!
//! 1. If the active tier names it, write `&name;`
//! 2. Otherwise, if the output encoding can carry it, write it unchanged
//! 3. Otherwise write a decimal numeric reference `&#N;`
//!
//! Escaping is total: every character has an encoding, so there is no error
//! path. References are always closed with `;`, whatever a decoder would
//! tolerate, so the output re-parses unambiguously.

use crate::options::EscapeOptions;
use crate::table::ReferenceTable;
use std::borrow::Cow;
use std::fmt::Write;

/// How a single character is written by the escaper.
///
/// # Examples
///
/// ```rust
/// use markup_entities::{classify, Charset, EscapeOptions, Substitution};
///
/// let options = EscapeOptions::new().with_charset(Charset::Ascii);
/// assert_eq!(classify('a', &options), Substitution::Literal);
/// assert_eq!(classify('é', &options), Substitution::Named("eacute"));
/// assert_eq!(classify('€', &options), Substitution::Numeric(0x20AC));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Substitution {
    /// Written as-is.
    Literal,
    /// Written as `&name;`.
    Named(&'static str),
    /// Written as `&#N;` with the decimal code point.
    Numeric(u32),
}

/// Decides how `c` is written under `options`.
#[must_use]
pub fn classify(c: char, options: &EscapeOptions) -> Substitution {
    classify_in(ReferenceTable::global(), c, options)
}

#[inline]
fn classify_in(table: &ReferenceTable, c: char, options: &EscapeOptions) -> Substitution {
    if let Some(name) = table.char_to_name(c, options.tier()) {
        Substitution::Named(name)
    } else if options.encodability().can_encode(c) {
        Substitution::Literal
    } else {
        Substitution::Numeric(u32::from(c))
    }
}

/// Escapes `text`, borrowing it unchanged when nothing needs a reference.
///
/// # Examples
///
/// ```rust
/// use markup_entities::{escape, EscapeOptions};
/// use std::borrow::Cow;
///
/// let options = EscapeOptions::restricted();
/// assert_eq!(escape("a < b && c", &options), "a &lt; b &amp;&amp; c");
/// assert!(matches!(escape("plain", &options), Cow::Borrowed("plain")));
/// ```
#[must_use]
pub fn escape<'a>(text: &'a str, options: &EscapeOptions) -> Cow<'a, str> {
    let table = ReferenceTable::global();
    let first = text
        .char_indices()
        .find(|&(_, c)| classify_in(table, c, options) != Substitution::Literal);

    match first {
        None => Cow::Borrowed(text),
        Some((start, _)) => {
            let mut out = String::with_capacity(text.len() + text.len() / 4 + 8);
            out.push_str(&text[..start]);
            write_escaped(table, &mut out, &text[start..], options);
            Cow::Owned(out)
        }
    }
}

/// Appends the escaped form of `text` to `out`.
///
/// # Examples
///
/// ```rust
/// use markup_entities::{escape_into, EscapeOptions};
///
/// let mut html = String::from("<p>");
/// escape_into(&mut html, "Fish & Chips", &EscapeOptions::new());
/// html.push_str("</p>");
/// assert_eq!(html, "<p>Fish &amp; Chips</p>");
/// ```
pub fn escape_into(out: &mut String, text: &str, options: &EscapeOptions) {
    write_escaped(ReferenceTable::global(), out, text, options);
}

fn write_escaped(table: &ReferenceTable, out: &mut String, text: &str, options: &EscapeOptions) {
    out.reserve(text.len());
    for c in text.chars() {
        match classify_in(table, c, options) {
            Substitution::Literal => out.push(c),
            Substitution::Named(name) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            Substitution::Numeric(code) => {
                // writing into a String cannot fail
                let _ = write!(out, "&#{code};");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Charset, EscapeTier};

    fn ascii(tier: EscapeTier) -> EscapeOptions {
        EscapeOptions::new()
            .with_tier(tier)
            .with_charset(Charset::Ascii)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape("", &EscapeOptions::new()), "");
        assert!(matches!(escape("", &EscapeOptions::new()), Cow::Borrowed("")));
    }

    #[test]
    fn test_restricted_markup_characters() {
        let escaped = escape("<div>\"test\" & 'sample'</div>", &EscapeOptions::restricted());
        assert_eq!(
            escaped,
            "&lt;div&gt;&quot;test&quot; &amp; &apos;sample&apos;&lt;/div&gt;"
        );
    }

    #[test]
    fn test_restricted_leaves_other_characters_without_encoding() {
        let escaped = escape("© Café", &EscapeOptions::restricted());
        assert_eq!(escaped, "© Café");
    }

    #[test]
    fn test_restricted_with_ascii_falls_back_to_numbers() {
        let escaped = escape("© Café", &ascii(EscapeTier::Restricted));
        assert_eq!(escaped, "&#169; Caf&#233;");
    }

    #[test]
    fn test_named_takes_priority_over_literal() {
        // no declared encoding: é is representable but base still names it
        assert_eq!(escape("Café", &EscapeOptions::new()), "Caf&eacute;");
        assert_eq!(escape("© 2023", &EscapeOptions::new()), "&copy; 2023");
    }

    #[test]
    fn test_base_versus_extended() {
        assert_eq!(escape("α ≠ β", &ascii(EscapeTier::Base)), "&#945; &#8800; &#946;");
        assert_eq!(
            escape("α ≠ β", &ascii(EscapeTier::Extended)),
            "&alpha; &ne; &beta;"
        );
    }

    #[test]
    fn test_extended_keeps_ascii_punctuation() {
        let text = "Hello, world; (1 + 2) = 3!\n";
        assert_eq!(escape(text, &EscapeOptions::extended()), text);
    }

    #[test]
    fn test_supplementary_plane_uses_single_numeric_reference() {
        assert_eq!(escape("😀", &ascii(EscapeTier::Base)), "&#128512;");
        assert_eq!(escape("𝔸", &ascii(EscapeTier::Extended)), "&Aopf;");
    }

    #[test]
    fn test_latin1_charset() {
        let options = EscapeOptions::restricted().with_charset(Charset::Latin1);
        assert_eq!(escape("é€", &options), "é&#8364;");
    }

    #[test]
    fn test_custom_predicate() {
        let options = EscapeOptions::restricted()
            .with_predicate(|c| c.is_ascii_alphanumeric() || "&#; ".contains(c))
            .unwrap();
        assert_eq!(escape("a-b", &options), "a&#45;b");
    }

    #[test]
    fn test_escape_into_appends() {
        let mut out = String::from("x=");
        escape_into(&mut out, "1<2", &EscapeOptions::restricted());
        assert_eq!(out, "x=1&lt;2");
    }

    #[test]
    fn test_numeric_references_written_in_place() {
        let options = EscapeOptions::restricted().with_charset(Charset::Latin1);
        let mut out = String::from("[");
        escape_into(&mut out, "\u{100}ÿ\u{10FFFF}", &options);
        out.push(']');
        assert_eq!(out, "[&#256;ÿ&#1114111;]");
    }

    #[test]
    fn test_classify_order() {
        let options = ascii(EscapeTier::Base);
        assert_eq!(classify('&', &options), Substitution::Named("amp"));
        assert_eq!(classify('z', &options), Substitution::Literal);
        assert_eq!(classify('\u{FFFF}', &options), Substitution::Numeric(0xFFFF));
    }
}

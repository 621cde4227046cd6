//! Unescaping markup text back into raw text.
//!
//! The decoder scans for `&` and tries, in order:
//!
//! - a numeric reference: `&#` followed by decimal digits, or by `x`/`X` and hex digits
//! - a named reference: the run of ASCII letters and digits after `&`
//!
//! Anything that does not resolve is copied through unchanged and scanning
//! resumes right after the `&`. Unescaping never fails.
//!
//! ## Strict and lenient modes
//!
//! The terminating `;` of a numeric reference is optional in both modes.
//! For named references:
//!
//! - **strict**: the whole name run must be known and directly followed by `;`
//! - **lenient**: a known name run resolves with or without `;`. When the run
//!   as a whole is unknown but starts with a base-tier name, the longest known
//!   name it starts with resolves instead (`&copy2024` becomes `©2024`,
//!   `&notinx` becomes `∉x`). Runs that start with no base-tier name stay
//!   untouched, so ordinary words after a stray `&` are left alone.
//!
//! ## Numeric range
//!
//! Values must be Unicode scalar values: `0..=0x10FFFF` excluding the
//! surrogate block `0xD800..=0xDFFF`. Anything else, including values too large
//! for 32 bits, is left as literal text.

use crate::table::ReferenceTable;
use std::borrow::Cow;

/// Unescapes `text` in lenient mode.
///
/// # Examples
///
/// ```rust
/// use markup_entities::unescape;
///
/// assert_eq!(unescape("A &amp; B"), "A & B");
/// assert_eq!(unescape("&#8364;"), "€");
/// assert_eq!(unescape("&lt&gt"), "<>");
/// ```
#[must_use]
pub fn unescape(text: &str) -> Cow<'_, str> {
    unescape_with(text, false)
}

/// Unescapes `text` in strict mode; named references need their `;`.
///
/// # Examples
///
/// ```rust
/// use markup_entities::unescape_strict;
///
/// assert_eq!(unescape_strict("&amp;"), "&");
/// assert_eq!(unescape_strict("&amp"), "&amp");
/// ```
#[must_use]
pub fn unescape_strict(text: &str) -> Cow<'_, str> {
    unescape_with(text, true)
}

/// Unescapes `text`, borrowing it unchanged when it contains no `&`.
#[must_use]
pub fn unescape_with(text: &str, strict: bool) -> Cow<'_, str> {
    let Some(first) = text.find('&') else {
        return Cow::Borrowed(text);
    };

    let table = ReferenceTable::global();
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut rest = &text[first..];

    loop {
        // `rest` starts with '&'
        let after = &rest[1..];
        let resolved = match after.strip_prefix('#') {
            Some(digits) => decode_numeric(digits).map(|(ch, len)| (ch, len + 1)),
            None => decode_named(table, after, strict),
        };

        match resolved {
            Some((ch, len)) => {
                out.push(ch);
                rest = &after[len..];
            }
            None => {
                tracing::trace!(
                    offset = text.len() - rest.len(),
                    strict,
                    "leaving unresolved character reference as text"
                );
                out.push('&');
                rest = after;
            }
        }

        match rest.find('&') {
            Some(next) => {
                out.push_str(&rest[..next]);
                rest = &rest[next..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }

    Cow::Owned(out)
}

/// Decodes the part of a numeric reference after `&#`.
///
/// Returns the character and the number of bytes consumed, including an
/// optional trailing `;`.
fn decode_numeric(s: &str) -> Option<(char, usize)> {
    let bytes = s.as_bytes();
    let (radix, start) = match bytes.first()? {
        b'x' | b'X' => (16, 1),
        b if b.is_ascii_digit() => (10, 0),
        _ => return None,
    };

    let digits = bytes[start..]
        .iter()
        .take_while(|&&b| char::from(b).is_digit(radix))
        .count();
    if digits == 0 {
        return None;
    }
    let end = start + digits;

    let value = u32::from_str_radix(&s[start..end], radix).ok()?;
    let ch = char::from_u32(value)?;

    let len = if bytes.get(end) == Some(&b';') {
        end + 1
    } else {
        end
    };
    Some((ch, len))
}

/// Decodes the part of a named reference after `&`.
fn decode_named(table: &ReferenceTable, s: &str, strict: bool) -> Option<(char, usize)> {
    let run_len = s.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if run_len == 0 {
        return None;
    }
    let run = &s[..run_len];
    let terminated = s.as_bytes().get(run_len) == Some(&b';');

    if let Some(ch) = table.name_to_char(run) {
        return match (terminated, strict) {
            (true, _) => Some((ch, run_len + 1)),
            (false, false) => Some((ch, run_len)),
            (false, true) => None,
        };
    }

    if strict {
        return None;
    }
    table
        .longest_prefix_match(run)
        .map(|(name, ch)| (ch, name.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ampersand_borrows() {
        let text = "plain text without ampersand";
        assert!(matches!(unescape(text), Cow::Borrowed(t) if t == text));
        assert!(matches!(unescape_strict(""), Cow::Borrowed("")));
    }

    #[test]
    fn test_named_references() {
        assert_eq!(
            unescape("&lt;div&gt; &amp; &quot;test&quot; &copy;"),
            "<div> & \"test\" ©"
        );
        assert_eq!(unescape("Price: &pound;100 &#x20AC;200"), "Price: £100 €200");
    }

    #[test]
    fn test_numeric_references() {
        assert_eq!(unescape("&#65; &#x41; &#x61;"), "A A a");
        assert_eq!(unescape("&#X41;"), "A");
        assert_eq!(unescape("&#65"), "A");
        assert_eq!(unescape("&#65x"), "Ax");
        assert_eq!(unescape("&#x1F600;"), "😀");
        assert_eq!(unescape("&#0000065;"), "A");
    }

    #[test]
    fn test_numeric_semicolon_optional_in_strict_mode() {
        assert_eq!(unescape_strict("&#65"), "A");
        assert_eq!(unescape_strict("&#x41"), "A");
    }

    #[test]
    fn test_malformed_numeric_left_as_text() {
        for text in ["&#", "&#;", "&#x;", "&#xg;", "&#-1;", "&# 65;"] {
            assert_eq!(unescape(text), text, "input {text:?}");
        }
    }

    #[test]
    fn test_out_of_range_numeric_left_as_text() {
        assert_eq!(unescape("&#99999999;"), "&#99999999;");
        assert_eq!(unescape("&#x110000;"), "&#x110000;");
        assert_eq!(unescape("&#99999999999999999999;"), "&#99999999999999999999;");
        assert_eq!(unescape("&#x10FFFF;"), "\u{10FFFF}");
    }

    #[test]
    fn test_surrogates_left_as_text() {
        assert_eq!(unescape("&#xD800;"), "&#xD800;");
        assert_eq!(unescape("&#57343;"), "&#57343;");
        assert_eq!(unescape("&#xD7FF;"), "\u{D7FF}");
        assert_eq!(unescape("&#xE000;"), "\u{E000}");
    }

    #[test]
    fn test_nul_is_accepted() {
        assert_eq!(unescape("&#0;"), "\0");
    }

    #[test]
    fn test_strict_requires_semicolon() {
        assert_eq!(unescape_strict("&amp"), "&amp");
        assert_eq!(unescape("&amp"), "&");
        assert_eq!(unescape_strict("&amp&lt&gt"), "&amp&lt&gt");
        assert_eq!(unescape("&amp&lt&gt"), "&<>");
        assert_eq!(unescape_strict("&amp;&lt;&gt;"), "&<>");
    }

    #[test]
    fn test_lenient_prefix_needs_base_name() {
        assert_eq!(unescape("&copy2024"), "©2024");
        assert_eq!(unescape("&notit;"), "¬it;");
        assert_eq!(unescape("&notin;"), "∉");
        assert_eq!(unescape("test &invalid; &another &"), "test &invalid; &another &");
        assert_eq!(unescape_strict("&copy2024"), "&copy2024");
    }

    #[test]
    fn test_lenient_prefix_prefers_longest_known_name() {
        assert_eq!(unescape("&notinx"), "∉x");
        assert_eq!(unescape("&notinvax"), "∉x");
        assert_eq!(unescape("&notinvbz;"), "\u{22F7}z;");
        assert_eq!(unescape_strict("&notinx"), "&notinx");
    }

    #[test]
    fn test_extended_name_without_semicolon() {
        assert_eq!(unescape("&hellip"), "…");
        assert_eq!(unescape_strict("&hellip"), "&hellip");
        assert_eq!(unescape_strict("&hellip;"), "…");
    }

    #[test]
    fn test_case_sensitive_names() {
        assert_eq!(unescape("&AMP;"), "&");
        assert_eq!(unescape("&Amp;"), "&Amp;");
        assert_eq!(unescape("&Lt;"), "≪");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(unescape("&amp;amp;"), "&amp;");
        assert_eq!(unescape("&&amp;"), "&&");
        assert_eq!(unescape("&é;"), "&é;");
        assert_eq!(unescape("a&"), "a&");
    }
}

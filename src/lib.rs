//! # markup_entities
//!
//! Escaping and unescaping of HTML/XML character references.
//!
//! ## What does it do?
//!
//! Markup text cannot carry `<`, `&` and friends verbatim, and an output
//! encoding such as US-ASCII cannot carry `é` at all. This crate converts raw
//! text to markup-safe text using named references (`&eacute;`) and numeric
//! references (`&#233;`), and converts such text back.
//!
//! ## Key Features
//!
//! - **Three escape tiers**: `restricted` (the five markup characters),
//!   `base` (common accented letters and symbols) and `extended` (every
//!   single-character name)
//! - **Encoding aware**: characters the declared output charset cannot carry
//!   fall back to numeric references, so escaping never loses information
//! - **Forgiving decoder**: malformed or unknown references pass through
//!   unchanged; strict and lenient handling of the terminating `;`
//! - **Zero-copy fast paths**: inputs that need no change are returned borrowed
//! - **Shared table**: the 2032-name reference table is built once, lazily,
//!   and read concurrently without locking
//!
//! ## Quick Start
//!
//! ```rust
//! use markup_entities::{escape, unescape, Charset, EscapeOptions};
//!
//! let options = EscapeOptions::new().with_charset(Charset::Ascii);
//! let escaped = escape("Café <b>", &options);
//! assert_eq!(escaped, "Caf&eacute; &lt;b&gt;");
//!
//! assert_eq!(unescape(&escaped), "Café <b>");
//! ```
//!
//! ### Strict decoding
//!
//! ```rust
//! use markup_entities::{unescape, unescape_strict};
//!
//! assert_eq!(unescape("&amp"), "&");
//! assert_eq!(unescape_strict("&amp"), "&amp");
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use markup_entities::{EscapeConfig, EscapeOptions, EscapeTier};
//!
//! let config: EscapeConfig = "extended".parse::<EscapeTier>()
//!     .map(|tier| EscapeConfig { tier, charset: None })
//!     .unwrap();
//! let options = EscapeOptions::from(config);
//! assert_eq!(options.tier(), EscapeTier::Extended);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Escaping**: O(n), one table lookup per character
//! - **Unescaping**: O(n); name matching tries at most as many prefixes as the
//!   longest known name has bytes
//! - **Memory**: output is at most a small constant multiple of the input when
//!   escaping, and never longer than the input when unescaping
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Escape and unescape are total: no `Result`, no panics on any input
//!
//! For the reference grammar and the exact decoding rules, see [`syntax`].

mod data;
pub mod error;
pub mod escape;
pub mod options;
pub mod syntax;
pub mod table;
pub mod unescape;

pub use error::{Error, Result};
pub use escape::{classify, escape, escape_into, Substitution};
pub use options::{Charset, Encodability, EscapeConfig, EscapeOptions, EscapeTier};
pub use table::ReferenceTable;
pub use unescape::{unescape, unescape_strict, unescape_with};

/// Returns true if `name` is a known reference name.
///
/// # Examples
///
/// ```rust
/// use markup_entities::is_named_entity;
///
/// assert!(is_named_entity("amp"));
/// assert!(is_named_entity("hellip"));
/// assert!(!is_named_entity("unknown"));
/// ```
#[must_use]
pub fn is_named_entity(name: &str) -> bool {
    ReferenceTable::global().is_known_name(name)
}

/// Returns true if `name` belongs to the base tier.
///
/// # Examples
///
/// ```rust
/// use markup_entities::is_base_named_entity;
///
/// assert!(is_base_named_entity("eacute"));
/// assert!(!is_base_named_entity("hellip"));
/// ```
#[must_use]
pub fn is_base_named_entity(name: &str) -> bool {
    ReferenceTable::global().is_base_name(name)
}

/// Looks up the character a reference name stands for.
///
/// # Examples
///
/// ```rust
/// use markup_entities::character_by_name;
///
/// assert_eq!(character_by_name("lt"), Some('<'));
/// assert_eq!(character_by_name("unknown"), None);
/// ```
#[must_use]
pub fn character_by_name(name: &str) -> Option<char> {
    ReferenceTable::global().name_to_char(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_unescape_restricted() {
        let options = EscapeOptions::restricted();
        let escaped = escape("<script>", &options);
        assert_eq!(escaped, "&lt;script&gt;");
        assert_eq!(unescape(&escaped), "<script>");
    }

    #[test]
    fn test_escape_base_ascii() {
        let options = EscapeOptions::new().with_charset(Charset::Ascii);
        assert_eq!(escape("Café", &options), "Caf&eacute;");
    }

    #[test]
    fn test_unescape_examples() {
        assert_eq!(unescape("A &amp; B"), "A & B");
        assert_eq!(unescape("&#8364;"), "€");
        assert_eq!(unescape("&#65;"), unescape("&#x41;"));
        assert_eq!(unescape("&#x41;"), unescape("&#X41;"));
    }

    #[test]
    fn test_lookup_helpers() {
        assert!(is_named_entity("lt"));
        assert!(is_named_entity("gt"));
        assert!(!is_named_entity(""));
        assert!(is_base_named_entity("nbsp"));
        assert!(!is_base_named_entity("alpha"));
        assert_eq!(character_by_name("amp"), Some('&'));
        assert_eq!(character_by_name("gt"), Some('>'));
    }

    #[test]
    fn test_unescape_with_flag() {
        assert_eq!(unescape_with("&lt", false), "<");
        assert_eq!(unescape_with("&lt", true), "&lt");
    }
}

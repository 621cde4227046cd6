//! Error types for escape configuration.
//!
//! Escaping and unescaping are total: they never fail, and malformed
//! references are copied through as literal text. Errors only arise while
//! building an [`EscapeOptions`](crate::EscapeOptions) from user-facing
//! configuration:
//!
//! - **Unknown tier**: a tier name other than `restricted`, `base` or `extended`
//! - **Unknown charset**: an output encoding label this crate cannot classify
//! - **Unrepresentable syntax**: an encodability predicate that rejects one of
//!   the characters the escaper itself has to emit (`&`, `#`, `;`, ASCII digits
//!   and letters)
//!
//! ## Examples
//!
//! ```rust
//! use markup_entities::{EscapeTier, Error};
//!
//! let result: Result<EscapeTier, Error> = "xhtml5".parse();
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     assert!(err.to_string().contains("xhtml5"));
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised while configuring the escaper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tier name not recognized
    #[error("Unknown escape tier '{0}': expected one of restricted, base, extended")]
    UnknownTier(String),

    /// Charset label not recognized
    #[error("Unknown charset '{0}': expected one of us-ascii, iso-8859-1, utf-8")]
    UnknownCharset(String),

    /// The output encoding cannot carry a character used by reference syntax
    #[error("Character {ch:?} (U+{code:04X}) is required by reference syntax but the output encoding cannot represent it")]
    UnrepresentableSyntax { ch: char, code: u32 },
}

impl Error {
    /// Creates an unknown tier error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_entities::Error;
    ///
    /// let err = Error::unknown_tier("html4");
    /// assert!(err.to_string().contains("html4"));
    /// ```
    pub fn unknown_tier(name: &str) -> Self {
        Error::UnknownTier(name.to_string())
    }

    /// Creates an unknown charset error.
    pub fn unknown_charset(label: &str) -> Self {
        Error::UnknownCharset(label.to_string())
    }

    /// Creates an error for a syntax character the output encoding rejects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_entities::Error;
    ///
    /// let err = Error::unrepresentable_syntax(';');
    /// assert!(err.to_string().contains("U+003B"));
    /// ```
    pub fn unrepresentable_syntax(ch: char) -> Self {
        Error::UnrepresentableSyntax {
            ch,
            code: u32::from(ch),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrepresentable_syntax_reports_code_point() {
        let err = Error::unrepresentable_syntax('&');
        assert_eq!(err, Error::UnrepresentableSyntax { ch: '&', code: 0x26 });
        assert!(err.to_string().contains("U+0026"));
    }

    #[test]
    fn test_unknown_charset_message() {
        let err = Error::unknown_charset("koi8-r");
        assert!(err.to_string().contains("koi8-r"));
        assert!(err.to_string().contains("utf-8"));
    }
}

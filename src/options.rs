//! Configuration options for escaping.
//!
//! This module provides types to customize escaped output:
//!
//! - [`EscapeTier`]: How aggressively named references are used
//! - [`Charset`]: Declared output encoding, deciding which characters may be emitted as-is
//! - [`Encodability`]: The representability test handed to the escaper
//! - [`EscapeOptions`]: Main configuration struct
//! - [`EscapeConfig`]: Serde-friendly user configuration that converts into [`EscapeOptions`]
//!
//! ## Examples
//!
//! ```rust
//! use markup_entities::{escape, Charset, EscapeOptions, EscapeTier};
//!
//! // Named references from the base tier, everything else outside ASCII as numbers
//! let options = EscapeOptions::new().with_charset(Charset::Ascii);
//! assert_eq!(escape("Café €5", &options), "Caf&eacute; &#8364;5");
//!
//! // Extended tier names the euro sign as well
//! let options = options.with_tier(EscapeTier::Extended);
//! assert_eq!(escape("Café €5", &options), "Caf&eacute; &euro;5");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Named reference tier used when escaping.
///
/// Each tier is a strict superset of the previous one:
///
/// - **Restricted**: only `&`, `<`, `>`, `"` and `'`; output that any markup parser re-reads unambiguously
/// - **Base**: adds common accented Latin letters and typographic symbols
/// - **Extended**: every single-character named reference
///
/// # Examples
///
/// ```rust
/// use markup_entities::EscapeTier;
///
/// assert_eq!(EscapeTier::Restricted.as_str(), "restricted");
/// assert_eq!("extended".parse::<EscapeTier>().unwrap(), EscapeTier::Extended);
/// assert_eq!(EscapeTier::default(), EscapeTier::Base);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeTier {
    Restricted,
    #[default]
    Base,
    Extended,
}

impl EscapeTier {
    /// All tiers, narrowest first.
    pub const ALL: [EscapeTier; 3] = [
        EscapeTier::Restricted,
        EscapeTier::Base,
        EscapeTier::Extended,
    ];

    /// Returns the configuration name of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EscapeTier::Restricted => "restricted",
            EscapeTier::Base => "base",
            EscapeTier::Extended => "extended",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            EscapeTier::Restricted => 0,
            EscapeTier::Base => 1,
            EscapeTier::Extended => 2,
        }
    }
}

impl fmt::Display for EscapeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EscapeTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EscapeTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_tier(s))
    }
}

/// Declared output character encoding.
///
/// Only the encodings whose repertoire is a simple code point range are
/// modelled; anything else can be expressed with [`Encodability::Predicate`].
///
/// # Examples
///
/// ```rust
/// use markup_entities::Charset;
///
/// assert!(Charset::Ascii.can_encode('a'));
/// assert!(!Charset::Ascii.can_encode('é'));
/// assert!(Charset::Latin1.can_encode('é'));
/// assert!(Charset::Utf8.can_encode('€'));
/// assert_eq!("ISO-8859-1".parse::<Charset>().unwrap(), Charset::Latin1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Charset {
    Ascii,
    Latin1,
    Utf8,
}

impl Charset {
    /// Returns the canonical label of this charset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Charset::Ascii => "us-ascii",
            Charset::Latin1 => "iso-8859-1",
            Charset::Utf8 => "utf-8",
        }
    }

    /// Returns true if `c` can be written as-is in this encoding.
    #[must_use]
    pub const fn can_encode(&self, c: char) -> bool {
        match self {
            Charset::Ascii => (c as u32) < 0x80,
            Charset::Latin1 => (c as u32) < 0x100,
            Charset::Utf8 => true,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim().to_ascii_lowercase();
        match label.as_str() {
            "us-ascii" | "ascii" | "us_ascii" => Ok(Charset::Ascii),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" => Ok(Charset::Latin1),
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            _ => Err(Error::unknown_charset(s)),
        }
    }
}

impl Serialize for Charset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Charset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Decides whether a character may be emitted as-is.
///
/// Characters that fail the test and have no name in the active tier are
/// written as decimal numeric references.
#[derive(Clone, Copy, Debug, Default)]
pub enum Encodability {
    /// No output encoding declared; every character is representable.
    #[default]
    Any,
    /// Representable iff the charset can encode it.
    Charset(Charset),
    /// Caller-supplied test.
    Predicate(fn(char) -> bool),
}

impl Encodability {
    /// Returns true if `c` can be emitted without a reference.
    #[inline]
    #[must_use]
    pub fn can_encode(&self, c: char) -> bool {
        match self {
            Encodability::Any => true,
            Encodability::Charset(charset) => charset.can_encode(c),
            Encodability::Predicate(test) => test(c),
        }
    }
}

/// Characters the escaper writes literally when it builds a reference.
fn reference_syntax() -> impl Iterator<Item = char> {
    ['&', '#', ';']
        .into_iter()
        .chain('0'..='9')
        .chain('a'..='z')
        .chain('A'..='Z')
}

/// Configuration options for escaping.
///
/// Bundles an [`EscapeTier`] with an [`Encodability`] test. The pairing is
/// validated so that the characters making up references are themselves
/// representable; the escaper never consults the test for characters the
/// tier names, so `&` and friends are always written as references.
///
/// # Examples
///
/// ```rust
/// use markup_entities::{Charset, EscapeOptions, EscapeTier};
///
/// // Default: base tier, no declared encoding
/// let options = EscapeOptions::new();
/// assert_eq!(options.tier(), EscapeTier::Base);
///
/// // Minimal escaping for XML output
/// let options = EscapeOptions::restricted();
///
/// // Custom configuration
/// let options = EscapeOptions::new()
///     .with_tier(EscapeTier::Extended)
///     .with_charset(Charset::Latin1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EscapeOptions {
    tier: EscapeTier,
    encodability: Encodability,
}

impl EscapeOptions {
    /// Creates default options (base tier, every character representable).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options using only the five markup-significant names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_entities::{escape, EscapeOptions};
    ///
    /// let options = EscapeOptions::restricted();
    /// assert_eq!(escape("<script>", &options), "&lt;script&gt;");
    /// ```
    #[must_use]
    pub fn restricted() -> Self {
        EscapeOptions {
            tier: EscapeTier::Restricted,
            ..Default::default()
        }
    }

    /// Creates options using every single-character name.
    #[must_use]
    pub fn extended() -> Self {
        EscapeOptions {
            tier: EscapeTier::Extended,
            ..Default::default()
        }
    }

    /// Sets the named reference tier.
    #[must_use]
    pub fn with_tier(mut self, tier: EscapeTier) -> Self {
        self.tier = tier;
        self
    }

    /// Declares the output encoding.
    ///
    /// Every supported charset covers ASCII, so this cannot fail.
    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.encodability = Encodability::Charset(charset);
        self
    }

    /// Uses a caller-supplied representability test.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableSyntax`] if the test rejects a character
    /// that references are built from (`&`, `#`, `;`, ASCII digits or letters).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_entities::EscapeOptions;
    ///
    /// let bmp_only = EscapeOptions::new().with_predicate(|c| (c as u32) < 0x10000);
    /// assert!(bmp_only.is_ok());
    ///
    /// let no_digits = EscapeOptions::new().with_predicate(|c| !c.is_ascii_digit());
    /// assert!(no_digits.is_err());
    /// ```
    pub fn with_predicate(mut self, test: fn(char) -> bool) -> Result<Self> {
        if let Some(c) = reference_syntax().find(|&c| !test(c)) {
            return Err(Error::unrepresentable_syntax(c));
        }
        self.encodability = Encodability::Predicate(test);
        Ok(self)
    }

    /// Drops any declared encoding; every character becomes representable.
    #[must_use]
    pub fn without_encoding(mut self) -> Self {
        self.encodability = Encodability::Any;
        self
    }

    /// Returns the named reference tier.
    #[must_use]
    pub fn tier(&self) -> EscapeTier {
        self.tier
    }

    /// Returns the representability test.
    #[must_use]
    pub fn encodability(&self) -> Encodability {
        self.encodability
    }
}

/// User-facing escape configuration, as read from a settings file.
///
/// # Examples
///
/// ```rust
/// use markup_entities::{Charset, EscapeConfig, EscapeOptions, EscapeTier};
///
/// let config = EscapeConfig {
///     tier: EscapeTier::Restricted,
///     charset: Some(Charset::Ascii),
/// };
/// let options = EscapeOptions::from(config);
/// assert_eq!(options.tier(), EscapeTier::Restricted);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    pub tier: EscapeTier,
    pub charset: Option<Charset>,
}

impl From<EscapeConfig> for EscapeOptions {
    fn from(config: EscapeConfig) -> Self {
        let options = EscapeOptions::new().with_tier(config.tier);
        match config.charset {
            Some(charset) => options.with_charset(charset),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_only(c: char) -> bool {
        c.is_ascii()
    }

    fn no_semicolon(c: char) -> bool {
        c != ';'
    }

    #[test]
    fn test_tier_round_trips_through_names() {
        for tier in EscapeTier::ALL {
            assert_eq!(tier.as_str().parse::<EscapeTier>(), Ok(tier));
            assert_eq!(tier.to_string(), tier.as_str());
        }
        assert_eq!(" Base ".parse::<EscapeTier>(), Ok(EscapeTier::Base));
        assert_eq!(
            "xhtml".parse::<EscapeTier>(),
            Err(Error::unknown_tier("xhtml"))
        );
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(EscapeTier::Restricted < EscapeTier::Base);
        assert!(EscapeTier::Base < EscapeTier::Extended);
        assert_eq!(EscapeTier::Extended.index(), 2);
    }

    #[test]
    fn test_charset_labels() {
        assert_eq!("US-ASCII".parse::<Charset>(), Ok(Charset::Ascii));
        assert_eq!("latin1".parse::<Charset>(), Ok(Charset::Latin1));
        assert_eq!("UTF8".parse::<Charset>(), Ok(Charset::Utf8));
        assert!("shift_jis".parse::<Charset>().is_err());
    }

    #[test]
    fn test_charset_ranges() {
        assert!(Charset::Ascii.can_encode('\u{7F}'));
        assert!(!Charset::Ascii.can_encode('\u{80}'));
        assert!(Charset::Latin1.can_encode('\u{FF}'));
        assert!(!Charset::Latin1.can_encode('\u{100}'));
        assert!(Charset::Utf8.can_encode('\u{1F600}'));
    }

    #[test]
    fn test_predicate_validation() {
        let options = EscapeOptions::new().with_predicate(ascii_only).unwrap();
        assert!(options.encodability().can_encode('a'));
        assert!(!options.encodability().can_encode('é'));

        assert!(matches!(
            EscapeOptions::new().with_predicate(no_semicolon),
            Err(Error::UnrepresentableSyntax { ch: ';', .. })
        ));
    }

    #[test]
    fn test_predicate_survives_copies() {
        let options = EscapeOptions::extended().with_predicate(ascii_only).unwrap();
        let copy = options.with_tier(EscapeTier::Restricted);
        assert!(matches!(copy.encodability(), Encodability::Predicate(_)));
        assert!(!copy.encodability().can_encode('é'));
        assert!(format!("{copy:?}").contains("Predicate"));
    }

    #[test]
    fn test_config_conversion() {
        let options = EscapeOptions::from(EscapeConfig::default());
        assert_eq!(options.tier(), EscapeOptions::new().tier());
        assert!(matches!(options.encodability(), Encodability::Any));

        let options = EscapeOptions::from(EscapeConfig {
            tier: EscapeTier::Extended,
            charset: Some(Charset::Latin1),
        });
        assert_eq!(options.tier(), EscapeTier::Extended);
        assert!(matches!(
            options.encodability(),
            Encodability::Charset(Charset::Latin1)
        ));
    }

    #[test]
    fn test_without_encoding() {
        let options = EscapeOptions::restricted()
            .with_charset(Charset::Ascii)
            .without_encoding();
        assert!(matches!(options.encodability(), Encodability::Any));
        assert_eq!(options.tier(), EscapeTier::Restricted);
    }
}

//! The named character reference table.
//!
//! [`ReferenceTable`] holds both directions of the name/character association:
//!
//! - **name → character** over every known name, used when unescaping
//! - **character → name**, one map per [`EscapeTier`], used when escaping
//!
//! The table is built once from the static dataset and shared read-only by
//! every caller through [`ReferenceTable::global`].
//!
//! ## Tie-breaking
//!
//! Several names can stand for the same character (`amp` and `AMP`, or `isin`,
//! `in` and `Element`). The character → name direction keeps the name declared
//! first in dataset order, so escaping is stable across builds. Base and
//! extended tiers never add names for ASCII characters; ASCII is only named
//! through the restricted tier.
//!
//! ## Examples
//!
//! ```rust
//! use markup_entities::{EscapeTier, ReferenceTable};
//!
//! let table = ReferenceTable::global();
//! assert_eq!(table.name_to_char("eacute"), Some('é'));
//! assert_eq!(table.char_to_name('é', EscapeTier::Base), Some("eacute"));
//! assert_eq!(table.char_to_name('é', EscapeTier::Restricted), None);
//! ```

use crate::data;
use crate::options::EscapeTier;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// A single dataset entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    ch: char,
    tier: EscapeTier,
}

/// Bidirectional association between reference names and characters.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    by_name: IndexMap<&'static str, Entry>,
    by_char: [IndexMap<char, &'static str>; 3],
    max_name_len: usize,
}

impl ReferenceTable {
    /// Returns the process-wide table, building it on first use.
    pub fn global() -> &'static ReferenceTable {
        static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            ReferenceTable::from_tiers(&[
                (EscapeTier::Restricted, data::RESTRICTED),
                (EscapeTier::Base, data::BASE),
                (EscapeTier::Extended, data::EXTENDED),
            ])
        })
    }

    /// Builds a table from per-tier slices, narrowest tier first.
    ///
    /// Each slice lists only the names its tier adds; a tier's escape map also
    /// contains everything from the tiers before it. A name that appears twice
    /// keeps its first declaration.
    pub(crate) fn from_tiers(tiers: &[(EscapeTier, &[(&'static str, char)])]) -> Self {
        let total = tiers.iter().map(|(_, entries)| entries.len()).sum();
        let mut by_name: IndexMap<&'static str, Entry> = IndexMap::with_capacity(total);
        let mut by_char: [IndexMap<char, &'static str>; 3] = Default::default();

        for &(tier, entries) in tiers {
            for &(name, ch) in entries {
                debug_assert!(
                    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric()),
                    "invalid reference name {name:?}"
                );
                if by_name.contains_key(name) {
                    continue;
                }
                by_name.insert(name, Entry { ch, tier });

                if ch.is_ascii() && tier != EscapeTier::Restricted {
                    continue;
                }
                for map in &mut by_char[tier.index()..] {
                    map.entry(ch).or_insert(name);
                }
            }
        }

        let max_name_len = by_name.keys().map(|name| name.len()).max().unwrap_or(0);

        tracing::debug!(
            names = by_name.len(),
            restricted = by_char[0].len(),
            base = by_char[1].len(),
            extended = by_char[2].len(),
            "built character reference table"
        );

        ReferenceTable {
            by_name,
            by_char,
            max_name_len,
        }
    }

    /// Looks up the character a name stands for. Matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markup_entities::ReferenceTable;
    ///
    /// let table = ReferenceTable::global();
    /// assert_eq!(table.name_to_char("lt"), Some('<'));
    /// assert_eq!(table.name_to_char("LT"), Some('<'));
    /// assert_eq!(table.name_to_char("Lt"), Some('≪'));
    /// assert_eq!(table.name_to_char("nope"), None);
    /// ```
    #[must_use]
    pub fn name_to_char(&self, name: &str) -> Option<char> {
        self.by_name.get(name).map(|entry| entry.ch)
    }

    /// Returns the escaping name for `ch`, if `tier` names it.
    #[must_use]
    pub fn char_to_name(&self, ch: char, tier: EscapeTier) -> Option<&'static str> {
        self.by_char[tier.index()].get(&ch).copied()
    }

    /// Returns true if `name` is a known reference name.
    #[must_use]
    pub fn is_known_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns true if `name` belongs to the base tier.
    ///
    /// Base names are the ones a lenient decoder recognises even when further
    /// letters or digits follow them.
    #[must_use]
    pub fn is_base_name(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|entry| entry.tier <= EscapeTier::Base)
    }

    /// Number of characters `tier` escapes by name.
    #[must_use]
    pub fn tier_len(&self, tier: EscapeTier) -> usize {
        self.by_char[tier.index()].len()
    }

    /// Iterates the `(character, name)` pairs `tier` escapes by name, in dataset order.
    pub fn tier_entries(
        &self,
        tier: EscapeTier,
    ) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.by_char[tier.index()]
            .iter()
            .map(|(&ch, &name)| (ch, name))
    }

    /// Iterates every `(name, character)` pair, in dataset order.
    pub fn names(&self) -> impl Iterator<Item = (&'static str, char)> + '_ {
        self.by_name.iter().map(|(&name, entry)| (name, entry.ch))
    }

    /// Total number of known names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the table holds no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Length in bytes of the longest known name.
    #[must_use]
    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    /// Finds the name a lenient decoder substitutes for a proper prefix of `run`.
    ///
    /// A prefix only resolves when some base-tier name starts the run. When it
    /// does, the longest known name starting the run wins, whatever its tier,
    /// so `notinx` resolves `notin` rather than `not`.
    ///
    /// `run` is a sequence of ASCII letters and digits. Candidate lengths are
    /// tried from longest to shortest, bounded by the longest known name, so
    /// the cost does not depend on the table size.
    pub(crate) fn longest_prefix_match(&self, run: &str) -> Option<(&'static str, char)> {
        let longest = run.len().saturating_sub(1).min(self.max_name_len);
        let mut candidate = None;
        for len in (1..=longest).rev() {
            let Some((&name, entry)) = self.by_name.get_key_value(&run[..len]) else {
                continue;
            };
            let found = *candidate.get_or_insert((name, entry.ch));
            if entry.tier <= EscapeTier::Base {
                return Some(found);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTRICTED: &[(&str, char)] = &[("amp", '&'), ("lt", '<')];
    const BASE: &[(&str, char)] = &[("AMP", '&'), ("not", '¬'), ("copy", '©'), ("COPY", '©')];
    const EXTENDED: &[(&str, char)] = &[
        ("notin", '∉'),
        ("comma", ','),
        ("isin", '∈'),
        ("in", '∈'),
        ("amp", '@'),
    ];

    fn sample() -> ReferenceTable {
        ReferenceTable::from_tiers(&[
            (EscapeTier::Restricted, RESTRICTED),
            (EscapeTier::Base, BASE),
            (EscapeTier::Extended, EXTENDED),
        ])
    }

    #[test]
    fn test_first_declared_name_wins() {
        let table = sample();
        assert_eq!(table.char_to_name('©', EscapeTier::Base), Some("copy"));
        assert_eq!(table.char_to_name('∈', EscapeTier::Extended), Some("isin"));
        assert_eq!(table.char_to_name('&', EscapeTier::Extended), Some("amp"));
        assert_eq!(table.name_to_char("in"), Some('∈'));
    }

    #[test]
    fn test_duplicate_name_keeps_first_declaration() {
        let table = sample();
        assert_eq!(table.name_to_char("amp"), Some('&'));
        assert_eq!(table.len(), 10);
    }

    #[test]
    fn test_tiers_are_cumulative() {
        let table = sample();
        assert_eq!(table.tier_len(EscapeTier::Restricted), 2);
        assert_eq!(table.tier_len(EscapeTier::Base), 4);
        assert_eq!(table.tier_len(EscapeTier::Extended), 6);
        assert_eq!(table.char_to_name('<', EscapeTier::Base), Some("lt"));
        assert_eq!(table.char_to_name('¬', EscapeTier::Restricted), None);
    }

    #[test]
    fn test_ascii_is_only_named_by_restricted_tier() {
        let table = sample();
        assert_eq!(table.char_to_name(',', EscapeTier::Extended), None);
        assert_eq!(table.name_to_char("comma"), Some(','));
    }

    #[test]
    fn test_longest_prefix_match() {
        let table = sample();
        assert_eq!(table.longest_prefix_match("copy2024"), Some(("copy", '©')));
        assert_eq!(table.longest_prefix_match("notit"), Some(("not", '¬')));
        // the whole run is never a candidate
        assert_eq!(table.longest_prefix_match("notin"), Some(("not", '¬')));
        assert_eq!(table.longest_prefix_match("amp"), None);
        assert_eq!(table.longest_prefix_match(""), None);
    }

    #[test]
    fn test_longer_extended_name_beats_base_prefix() {
        let table = sample();
        assert_eq!(table.longest_prefix_match("notinx"), Some(("notin", '∉')));
        assert_eq!(table.longest_prefix_match("notin2"), Some(("notin", '∉')));
    }

    #[test]
    fn test_extended_prefix_alone_does_not_match() {
        let table = sample();
        assert_eq!(table.longest_prefix_match("inx"), None);
        assert_eq!(table.longest_prefix_match("isinfo"), None);
    }

    #[test]
    fn test_base_names() {
        let table = sample();
        assert!(table.is_base_name("amp"));
        assert!(table.is_base_name("COPY"));
        assert!(!table.is_base_name("isin"));
        assert!(!table.is_base_name("missing"));
    }
}

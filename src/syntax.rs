//! Character Reference Syntax
//!
//! This module documents the character reference grammar as implemented by
//! this library.
//!
//! # Overview
//!
//! A character reference stands for a single character inside markup text.
//! It always starts with an ampersand and comes in two forms:
//!
//! | Form | Syntax | Example | Decodes to |
//! |------|--------|---------|------------|
//! | Named | `&` name `;` | `&eacute;` | `é` |
//! | Decimal | `&#` digits `;` | `&#233;` | `é` |
//! | Hexadecimal | `&#x` hex digits `;` | `&#xE9;` | `é` |
//!
//! # Names
//!
//! - Names are ASCII letters and digits, matched case-sensitively:
//!   `&lt;` and `&LT;` both decode to `<`, but `&Lt;` is `≪`
//! - Only names that expand to a single scalar value are known (2032 names)
//! - The `;` after a name is required in strict mode and optional in lenient mode
//!
//! **Lenient prefix matching**: when the run of letters and digits after `&`
//! is not itself a name but starts with a base-tier name, the longest known
//! name it starts with is used:
//!
//! ```text
//! &copy2024     ->  ©2024
//! &notit;       ->  ¬it;
//! &notinx       ->  ∉x       (`notin` is longer than `not`)
//! &notin;       ->  ∉        (the whole run is a name)
//! &another      ->  &another (no base name is a prefix)
//! ```
//!
//! # Numbers
//!
//! - `x` and `X` both introduce hexadecimal digits
//! - The `;` is optional in both modes: `&#65` decodes to `A`
//! - Leading zeros are allowed: `&#0065;`
//! - Valid values are `0..=0x10FFFF` except the surrogates `0xD800..=0xDFFF`
//!
//! # Malformed References
//!
//! Nothing is ever rejected. A reference that does not resolve is copied
//! through unchanged:
//!
//! ```text
//! &#;            ->  &#;
//! &#x;           ->  &#x;
//! &#99999999;    ->  &#99999999;
//! &#xD800;       ->  &#xD800;
//! &unknown;      ->  &unknown;
//! AT&T           ->  AT&T
//! ```
//!
//! # Escaping
//!
//! The escaper only ever produces `&name;` and decimal `&#N;`, always closed
//! with `;`, so its output decodes identically in both modes.
//!
//! | Tier | Names used | `<` | `é` | `α` |
//! |------|------------|-----|-----|-----|
//! | `restricted` | `amp`, `lt`, `gt`, `quot`, `apos` | `&lt;` | `é` or `&#233;` | `α` or `&#945;` |
//! | `base` | + legacy HTML names | `&lt;` | `&eacute;` | `α` or `&#945;` |
//! | `extended` | + every single-character name | `&lt;` | `&eacute;` | `&alpha;` |
//!
//! The literal or numeric choice depends on the declared output encoding.
//! ASCII characters other than the five markup characters are never replaced
//! by names, even in the extended tier.

// This module contains only documentation; no implementation code

//! Basic escaping and unescaping of character references.
//!
//! Run with: cargo run --example simple

use markup_entities::{escape, unescape, unescape_strict, EscapeOptions, EscapeTier};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "<p>Tom & Jerry © 2024 — \"live\"</p>";

    // Escape with the default (base) tier
    let escaped = escape(text, &EscapeOptions::new());
    println!("Escaped:\n{}\n", escaped);

    // Unescape back to raw text
    let unescaped = unescape(&escaped);
    assert_eq!(unescaped, text);
    println!("✓ Round-trip successful\n");

    // Tiers can also be picked by name
    let tier: EscapeTier = "restricted".parse()?;
    let xml = escape(text, &EscapeOptions::new().with_tier(tier));
    println!("Restricted ({}):\n{}\n", tier, xml);

    // Lenient decoding accepts legacy references without `;`
    let legacy = "AT&T &copy2024 &lt;b&gt;";
    println!("Lenient: {}", unescape(legacy));
    println!("Strict:  {}", unescape_strict(legacy));

    Ok(())
}

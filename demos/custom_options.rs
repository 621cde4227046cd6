//! Customizing escaping with EscapeOptions.
//!
//! Run with: cargo run --example custom_options

use markup_entities::{escape, unescape, Charset, EscapeConfig, EscapeOptions, EscapeTier};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "naïve café – α→β & 😀";

    // Every tier, writing pure ASCII output
    for tier in EscapeTier::ALL {
        let options = EscapeOptions::new()
            .with_tier(tier)
            .with_charset(Charset::Ascii);
        println!("{:<10} {}", tier, escape(text, &options));
    }
    println!();

    // Charsets by label
    for label in ["US-ASCII", "ISO-8859-1", "UTF-8"] {
        let charset: Charset = label.parse()?;
        let options = EscapeOptions::restricted().with_charset(charset);
        let escaped = escape(text, &options);
        assert_eq!(unescape(&escaped), text);
        println!("{:<10} {}", label, escaped);
    }
    println!();

    // Custom encodability test: keep only letters, digits and spaces literal
    let options = EscapeOptions::extended()
        .with_predicate(|c| c.is_ascii_alphanumeric() || "&#; ".contains(c))?;
    println!("Predicate: {}", escape("a-b, c.d", &options));

    // A test that cannot write reference syntax is rejected
    if let Err(err) = EscapeOptions::new().with_predicate(|c| c != '#') {
        println!("Rejected:  {}\n", err);
    }

    // Options from a configuration file
    let config: EscapeConfig =
        serde_json::from_str(r#"{"tier": "extended", "charset": "latin1"}"#)?;
    let options = EscapeOptions::from(config);
    println!("From config: {}", escape(text, &options));

    Ok(())
}

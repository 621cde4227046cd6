use markup_entities::{EscapeTier, ReferenceTable};
use std::collections::HashSet;

#[test]
fn test_restricted_tier_has_exactly_five_entries() {
    let table = ReferenceTable::global();
    let entries: Vec<_> = table.tier_entries(EscapeTier::Restricted).collect();

    assert_eq!(
        entries,
        vec![
            ('&', "amp"),
            ('<', "lt"),
            ('>', "gt"),
            ('"', "quot"),
            ('\'', "apos"),
        ]
    );
    assert_eq!(table.tier_len(EscapeTier::Restricted), 5);
}

#[test]
fn test_tier_sizes_strictly_increase() {
    let table = ReferenceTable::global();
    let restricted = table.tier_len(EscapeTier::Restricted);
    let base = table.tier_len(EscapeTier::Base);
    let extended = table.tier_len(EscapeTier::Extended);

    println!("restricted={restricted} base={base} extended={extended}");
    assert!(base > restricted);
    assert!(extended > base);
    assert!((50..=150).contains(&base));
    assert!(extended > 1000);
}

#[test]
fn test_tiers_are_nested_with_same_mapping() {
    let table = ReferenceTable::global();
    for (narrow, wide) in [
        (EscapeTier::Restricted, EscapeTier::Base),
        (EscapeTier::Base, EscapeTier::Extended),
    ] {
        for (ch, name) in table.tier_entries(narrow) {
            assert_eq!(
                table.char_to_name(ch, wide),
                Some(name),
                "{ch:?} in {narrow} but not in {wide}"
            );
        }
    }
}

#[test]
fn test_every_name_is_ascii_alphanumeric() {
    let table = ReferenceTable::global();
    assert_eq!(table.len(), 2032);
    for (name, _) in table.names() {
        assert!(!name.is_empty());
        assert!(name.bytes().all(|b| b.is_ascii_alphanumeric()), "{name:?}");
        assert!(name.len() <= table.max_name_len());
    }
}

#[test]
fn test_escape_names_resolve_back() {
    let table = ReferenceTable::global();
    for (ch, name) in table.tier_entries(EscapeTier::Extended) {
        assert_eq!(table.name_to_char(name), Some(ch), "{name}");
    }
}

#[test]
fn test_escape_names_are_unique_per_character() {
    let table = ReferenceTable::global();
    let names: HashSet<_> = table.tier_entries(EscapeTier::Extended).map(|(_, n)| n).collect();
    assert_eq!(names.len(), table.tier_len(EscapeTier::Extended));
}

#[test]
fn test_first_declared_name_is_used_for_escaping() {
    let table = ReferenceTable::global();

    // `amp` precedes `AMP`, `copy` precedes `COPY`
    assert_eq!(table.char_to_name('&', EscapeTier::Extended), Some("amp"));
    assert_eq!(table.char_to_name('©', EscapeTier::Base), Some("copy"));
    // `isin` precedes `in`, `isinv` and `Element`
    assert_eq!(table.char_to_name('∈', EscapeTier::Extended), Some("isin"));
    for alias in ["in", "isinv", "Element"] {
        assert_eq!(table.name_to_char(alias), Some('∈'));
    }
}

#[test]
fn test_names_are_case_sensitive() {
    let table = ReferenceTable::global();
    assert_eq!(table.name_to_char("amp"), Some('&'));
    assert_eq!(table.name_to_char("AMP"), Some('&'));
    assert_eq!(table.name_to_char("Amp"), None);
    assert_eq!(table.name_to_char("lt"), Some('<'));
    assert_eq!(table.name_to_char("Lt"), Some('≪'));
    assert!(table.is_known_name("Aacute"));
    assert_ne!(table.name_to_char("Aacute"), table.name_to_char("aacute"));
}

#[test]
fn test_ascii_only_named_by_restricted_tier() {
    let table = ReferenceTable::global();
    assert_eq!(table.name_to_char("comma"), Some(','));
    assert_eq!(table.name_to_char("NewLine"), Some('\n'));
    for (ch, name) in table.tier_entries(EscapeTier::Extended) {
        if ch.is_ascii() {
            assert!(
                table.tier_entries(EscapeTier::Restricted).any(|(c, _)| c == ch),
                "{name} names ASCII {ch:?}"
            );
        }
    }
}

#[test]
fn test_supplementary_plane_names() {
    let table = ReferenceTable::global();
    assert_eq!(table.name_to_char("Aopf"), Some('\u{1D538}'));
    assert_eq!(table.char_to_name('\u{1D538}', EscapeTier::Extended), Some("Aopf"));
    assert_eq!(table.char_to_name('\u{1D538}', EscapeTier::Base), None);
}

#[test]
fn test_global_table_is_shared() {
    let first = ReferenceTable::global() as *const ReferenceTable;
    let second = std::thread::spawn(|| ReferenceTable::global() as *const ReferenceTable as usize)
        .join()
        .unwrap();
    assert_eq!(first as usize, second);
}

use alphabet::{garbage_char, Symbol, ALPHABET_SIZE, CANONICAL};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_value_roundtrip(value in 0u8..32) {
        let sym = Symbol::from_value(value).unwrap();
        let back = Symbol::from_char(sym.as_char()).unwrap();
        prop_assert_eq!(back.value(), value);
        prop_assert!(!back.is_garbage());
    }

    #[test]
    fn prop_char_roundtrip_is_case_insensitive(value in 0u8..32) {
        let canonical = CANONICAL[value as usize];
        let lower = canonical.to_ascii_lowercase();
        let sym = Symbol::from_char(lower).unwrap();
        prop_assert_eq!(sym.value(), value);
    }

    #[test]
    fn prop_garbage_spelling_preserves_value(value in 0u8..32) {
        if let Some(g) = garbage_char(value) {
            let sym = Symbol::from_char(g).unwrap();
            prop_assert_eq!(sym.value(), value);
            prop_assert!(sym.is_garbage());
            prop_assert_eq!(sym.normalized().as_char(), CANONICAL[value as usize]);
        }
    }

    #[test]
    fn prop_masked_construction_matches_checked(value in 0u64..(ALPHABET_SIZE as u64)) {
        #[allow(clippy::cast_possible_truncation)]
        let checked = Symbol::from_value(value as u8).unwrap();
        prop_assert_eq!(Symbol::from_value_masked(value), checked);
    }

    #[test]
    fn prop_unknown_characters_rejected(c in any::<char>()) {
        let folded = c.to_ascii_uppercase();
        let known = CANONICAL.contains(&folded)
            || (0..32u8).any(|v| garbage_char(v) == Some(folded));
        prop_assert_eq!(Symbol::from_char(c).is_ok(), known);
    }
}

use alphabet::Symbol;
use seq::{LetterSeq, SeqError};

type Flags = LetterSeq<5, 0x01FF_FFFF>;
type Scene = LetterSeq<2, 31>;

#[test]
fn all_entry_points_agree() {
    let value = 0x0012_3456u64;
    let from_value = Flags::from_value(value).unwrap();
    let from_string: Flags = from_value.to_string().parse().unwrap();
    let from_slice = Flags::from_slice(from_value.symbols()).unwrap();

    assert_eq!(from_value, from_string);
    assert_eq!(from_value, from_slice);
    assert_eq!(from_string.to_value(), value);
    assert_eq!(from_slice.to_value(), value);
}

#[test]
fn blank_sequence_decodes_to_zero() {
    let blank: Flags = "OOOOO".parse().unwrap();
    assert_eq!(blank.to_value(), 0);
    assert_eq!(blank, Flags::zero());
}

#[test]
fn garbage_respelling_is_value_invariant() {
    let canonical: Flags = "OIZSA".parse().unwrap();
    let garbage: Flags = "0125A".parse().unwrap();
    assert_eq!(canonical.to_value(), garbage.to_value());
    assert_eq!(canonical, garbage);
    assert_ne!(canonical.to_string(), garbage.to_string());
}

#[test]
fn scene_high_symbol_never_contributes() {
    // Write a full-value symbol into the masked-out position; the packed
    // value must be unaffected by any spelling or value stored there.
    let mut scene = Scene::from_value(17).unwrap();
    scene.set(1, Symbol::from_value(31).unwrap()).unwrap();
    assert_eq!(scene.to_value(), 17);

    let rebuilt = Scene::from_value(scene.to_value()).unwrap();
    assert_eq!(rebuilt.symbols()[1].value(), 0);
}

#[test]
fn wrong_length_strings_rejected() {
    assert!(matches!(
        "OOOO".parse::<Flags>(),
        Err(SeqError::LengthMismatch {
            expected: 5,
            found: 4,
        })
    ));
    assert!(matches!(
        "OOOOOO".parse::<Flags>(),
        Err(SeqError::LengthMismatch {
            expected: 5,
            found: 6,
        })
    ));
}

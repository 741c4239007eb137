//! Serde support, behind the `serde` feature.
//!
//! A password serializes as its stored symbol string and deserializes from
//! any text the permissive parse style accepts, so JSON configs may hold
//! either `"0IZSABCD"` or `"12345"`.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parse::ParseStyle;
use crate::password::Password;

impl Serialize for Password {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct PasswordVisitor;

impl Visitor<'_> for PasswordVisitor {
    type Value = Password;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a password symbol string or integer literal")
    }

    fn visit_str<E>(self, text: &str) -> Result<Password, E>
    where
        E: de::Error,
    {
        Password::parse(text, ParseStyle::any()).map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Password, E>
    where
        E: de::Error,
    {
        Password::from_value(value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PasswordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_the_stored_string() {
        let password: Password = "0IZSABCD".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&password).unwrap(),
            "\"0IZSABCD\""
        );
    }

    #[test]
    fn deserializes_from_symbol_text() {
        let password: Password = serde_json::from_str("\"0IZSABCD\"").unwrap();
        assert_eq!(password.to_string(), "0IZSABCD");
    }

    #[test]
    fn deserializes_from_integer_text_and_number() {
        let from_text: Password = serde_json::from_str("\"12345\"").unwrap();
        let from_number: Password = serde_json::from_str("12345").unwrap();
        assert_eq!(from_text.value(), 12_345);
        assert_eq!(from_number.value(), 12_345);
    }

    #[test]
    fn roundtrips_spelling() {
        let password: Password = "0IZ5ABCD".parse().unwrap();
        let json = serde_json::to_string(&password).unwrap();
        let back: Password = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), password.to_string());
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        let result: Result<Password, _> = serde_json::from_str("99999999999999");
        assert!(result.is_err());
    }
}

//! `serde` support, enabled by the `serde` feature.
//!
//! A [`BigInt`] is written as its decimal string so no precision is lost in formats whose
//! numbers are machine sized. Reading also accepts plain integers.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::BigInt;

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer string or an integer")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        value.parse().map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        Ok(BigInt::from(value))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn test_serde_string() {
        let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: BigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn test_serde_integer() {
        let n: BigInt = serde_json::from_str("-42").unwrap();
        assert_eq!(n, BigInt::from(-42));
        let n: BigInt = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(n, BigInt::from(u64::MAX));
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<BigInt>("\"12x\"").is_err());
        assert!(serde_json::from_str::<BigInt>("1.5").is_err());
    }
}

use std::str::FromStr;

use num_bigint::BigUint;
use serde::{self, Deserialize, Deserializer, Serializer};

fn serialize_biguint<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn parse_biguint<E: serde::de::Error>(s: &str) -> Result<BigUint, E> {
    BigUint::from_str(s)
        .map_err(|e| E::custom(format!("invalid unsigned integer string {:?}: {}", s, e)))
}

/// Amounts travel as decimal strings so that values above 2^53 survive JSON.
pub mod biguint_string {
    use super::*;

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_biguint(value, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_biguint(&s)
    }
}

pub mod biguint_string_vec {
    use serde::ser::SerializeSeq;

    use super::*;

    pub fn serialize<S>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(values.len()))?;
        for value in values {
            seq.serialize_element(&value.to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| parse_biguint(s))
            .collect()
    }
}

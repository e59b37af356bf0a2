//! `serde_with` adapter accepting numbers or numeric strings.
//!
//! `6.2`, `"6.2"`, `3` and `"3"` all deserialize into numeric fields;
//! anything else fails with a short message that ends up in the field
//! report.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_with::DeserializeAs;
use std::fmt;

pub const NOT_A_NUMBER: &str = "Not a valid number.";
pub const NOT_AN_INTEGER: &str = "Not a valid integer.";

/// Lenient numeric adapter, used as `#[serde_as(as = "Option<Lenient>")]`.
pub struct Lenient;

impl<'de> DeserializeAs<'de, f64> for Lenient {
    fn deserialize_as<D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatVisitor)
    }
}

impl<'de> DeserializeAs<'de, i64> for Lenient {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntVisitor)
    }
}

fn finite<E: de::Error>(v: f64) -> Result<f64, E> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(E::custom(NOT_A_NUMBER))
    }
}

struct FloatVisitor;

impl<'de> Visitor<'de> for FloatVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        finite(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        let parsed = v.trim().parse::<f64>().map_err(|_| E::custom(NOT_A_NUMBER))?;
        finite(parsed)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<f64, E> {
        Err(E::custom(NOT_A_NUMBER))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<f64, A::Error> {
        Err(de::Error::custom(NOT_A_NUMBER))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<f64, A::Error> {
        Err(de::Error::custom(NOT_A_NUMBER))
    }
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or integer string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(NOT_AN_INTEGER))
    }

    // Whole floats such as `30.0` are accepted; `30.5` is not.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
            Ok(v as i64)
        } else {
            Err(E::custom(NOT_AN_INTEGER))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim().parse::<i64>().map_err(|_| E::custom(NOT_AN_INTEGER))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<i64, E> {
        Err(E::custom(NOT_AN_INTEGER))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> Result<i64, A::Error> {
        Err(de::Error::custom(NOT_AN_INTEGER))
    }

    fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<i64, A::Error> {
        Err(de::Error::custom(NOT_AN_INTEGER))
    }
}

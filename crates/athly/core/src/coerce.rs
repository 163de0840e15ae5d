//! Numeric coercion from raw text.
//!
//! Every numeric field is typed in as free text and coerced when the entry is
//! saved. Input that does not read as a number becomes 0; it is never
//! rejected. The same rule applies when reading stored documents, so a
//! hand-edited or older document with `"pitches": "22"` or a missing count
//! still loads.

/// Parses `raw` the way a lenient number field does.
///
/// - surrounding whitespace is ignored and empty input reads as 0
/// - decimal, fractional and exponent forms parse (`"2.5"`, `"1e2"`)
/// - `0x`, `0o` and `0b` prefixed integers parse
///
/// Returns `None` for anything else, including `inf`/`nan` spellings.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lowered = trimmed.get(..2).map(str::to_ascii_lowercase);
        if lowered.as_deref() == Some(prefix) {
            return u64::from_str_radix(&trimmed[2..], radix)
                .ok()
                .map(|value| value as f64);
        }
    }

    // f64::from_str also accepts "inf", "infinity" and "nan".
    if trimmed
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Coerces raw text into a non-negative count (pitches, minutes).
pub fn count(raw: &str) -> u32 {
    count_from_f64(parse_number(raw).unwrap_or(0.0))
}

/// Coerces raw text into a signed RPE value. The 1-10 range is not enforced.
pub fn rpe(raw: &str) -> i32 {
    rpe_from_f64(parse_number(raw).unwrap_or(0.0))
}

// `as` truncates toward zero, saturates at the bounds and maps NaN to 0.
fn count_from_f64(value: f64) -> u32 {
    value as u32
}

fn rpe_from_f64(value: f64) -> i32 {
    value as i32
}

/// `deserialize_with` helpers applying the coercion rules to stored JSON.
pub mod lenient {
    use std::fmt;

    use serde::Deserializer;
    use serde::de::{self, Visitor};

    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string or null")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<f64, E> {
            Ok(if v { 1.0 } else { 0.0 })
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(super::parse_number(v).unwrap_or(0.0))
        }

        fn visit_unit<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_none<E: de::Error>(self) -> Result<f64, E> {
            Ok(0.0)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<f64, D::Error> {
            deserializer.deserialize_any(NumberVisitor)
        }

        // Arrays and objects are not numbers either; they read as 0 rather
        // than failing the whole document.
        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<f64, A::Error> {
            while seq.next_element::<de::IgnoredAny>()?.is_some() {}
            Ok(0.0)
        }

        fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<f64, A::Error> {
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            Ok(0.0)
        }
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        deserializer
            .deserialize_any(NumberVisitor)
            .map(super::count_from_f64)
    }

    pub fn rpe<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        deserializer
            .deserialize_any(NumberVisitor)
            .map(super::rpe_from_f64)
    }
}

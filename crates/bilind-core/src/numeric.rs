//! Locale-tolerant numeric coercion.
//!
//! Take-off records arrive from manual entry, spreadsheets, and CAD imports,
//! so a "number" may be a JSON number, a string such as `"1,5"`, `null`, or
//! garbage. Everything downstream reads numbers through [`to_float`] or the
//! serde helpers in this module, which never fail: anything unparseable
//! becomes the caller's default.
//!
//! Non-finite values (`NaN`, `inf`) are treated as unparseable.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A value that may be coerced to a finite `f64`.
pub trait Numeric {
    /// The finite value this represents, or `None` when it cannot be read.
    fn coerce(&self) -> Option<f64>;
}

impl Numeric for f64 {
    fn coerce(&self) -> Option<f64> {
        Some(*self).filter(|v| v.is_finite())
    }
}

impl Numeric for f32 {
    fn coerce(&self) -> Option<f64> {
        f64::from(*self).coerce()
    }
}

impl Numeric for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn coerce(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Numeric for u32 {
    fn coerce(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl Numeric for str {
    fn coerce(&self) -> Option<f64> {
        parse_decimal(self)
    }
}

impl Numeric for String {
    fn coerce(&self) -> Option<f64> {
        parse_decimal(self)
    }
}

impl Numeric for Value {
    fn coerce(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64().and_then(|v| v.coerce()),
            Self::String(s) => parse_decimal(s),
            _ => None,
        }
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn coerce(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::coerce)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn coerce(&self) -> Option<f64> {
        (**self).coerce()
    }
}

/// Parse decimal text, accepting a comma as the decimal separator.
///
/// Every comma is rewritten to a period, so `"1,5"` reads as `1.5` while a
/// thousands-grouped `"1,234.5"` does not parse at all.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce `value` to `f64`, returning `default` when it cannot be read.
#[must_use]
pub fn to_float<T: Numeric + ?Sized>(value: &T, default: f64) -> f64 {
    value.coerce().unwrap_or(default)
}

// ---------------------------------------------------------------------------
// serde helpers
// ---------------------------------------------------------------------------

/// Deserialize any JSON scalar as `f64`; unreadable or missing values become `0.0`.
///
/// Pair with `#[serde(default)]` so an absent key is accepted too.
///
/// # Errors
///
/// Only when the underlying deserializer itself fails; malformed values do not.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(to_float(&value, 0.0))
}

/// Deserialize an optional override; unreadable values are treated as absent.
///
/// # Errors
///
/// Only when the underlying deserializer itself fails.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.coerce())
}

/// Deserialize a piece count; anything unreadable or below one becomes `1`.
///
/// # Errors
///
/// Only when the underlying deserializer itself fails.
pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(quantity_from(to_float(&value, 1.0)))
}

/// Deserialize a `room → fraction` map; unreadable fractions become `0.0`.
///
/// A `null` or non-object value reads as an empty map.
///
/// # Errors
///
/// Only when the underlying deserializer itself fails.
pub fn lenient_share_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(object_entries(value)
        .map(|(room, share)| (room, to_float(&share, 0.0)))
        .collect())
}

/// Deserialize a `room → piece count` map; fractions are truncated and
/// unreadable counts become `0`.
///
/// # Errors
///
/// Only when the underlying deserializer itself fails.
pub fn lenient_count_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(object_entries(value)
        .map(|(room, count)| (room, count_from(to_float(&count, 0.0))))
        .collect())
}

fn object_entries(value: Option<Value>) -> impl Iterator<Item = (String, Value)> {
    value
        .and_then(|value| match value {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .into_iter()
        .flatten()
}

#[allow(clippy::cast_possible_truncation)]
fn count_from(value: f64) -> i64 {
    value.trunc() as i64
}

/// Clamp a coerced count into `1..=u32::MAX`, dropping any fraction.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn quantity_from(value: f64) -> u32 {
    value.trunc().clamp(1.0, f64::from(u32::MAX)) as u32
}

/// Default piece count for openings.
#[must_use]
pub const fn default_quantity() -> u32 {
    1
}

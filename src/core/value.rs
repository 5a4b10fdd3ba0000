//! Raw score values.
//!
//! A scorekeeper enters one of three kinds of value per field:
//!
//! - `Int`: counts and points (number, multiplier and numeric select fields)
//! - `Bool`: checkboxes (e.g. "used all tiles")
//! - `Text`: textual select options
//!
//! A cleared form input arrives as `Null` and is treated like a missing
//! field. Values are read from plain JSON (`{"points": 40, "allTiles": true}`):
//! whole-number floats such as `40.0` become `Int`; any other number is kept
//! as `Text` so validation reports it instead of the record failing to parse.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Value of a single raw score field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ScoreValue {
    /// Integer value (points, counts).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value (select option).
    Text(String),
    /// Explicitly empty input.
    Null,
}

impl ScoreValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ScoreValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScoreValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScoreValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ScoreValue::Null)
    }

    /// Short name of the variant, used in validation messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            ScoreValue::Int(_) => "integer",
            ScoreValue::Bool(_) => "boolean",
            ScoreValue::Text(_) => "text",
            ScoreValue::Null => "null",
        }
    }
}

impl<'de> Deserialize<'de> for ScoreValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScoreValueVisitor;

        impl<'de> Visitor<'de> for ScoreValueVisitor {
            type Value = ScoreValue;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number, a boolean, a string or null")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Bool(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ScoreValue, E> {
                Ok(i64::try_from(v).map_or_else(|_| ScoreValue::Text(v.to_string()), ScoreValue::Int))
            }

            // 2^63 as f64; `as` saturates, so the upper bound must be exclusive.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<ScoreValue, E> {
                const LIMIT: f64 = 9_223_372_036_854_775_808.0;
                if v.fract() == 0.0 && (-LIMIT..LIMIT).contains(&v) {
                    Ok(ScoreValue::Int(v as i64))
                } else {
                    Ok(ScoreValue::Text(v.to_string()))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Null)
            }

            fn visit_none<E: de::Error>(self) -> Result<ScoreValue, E> {
                Ok(ScoreValue::Null)
            }

            fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<ScoreValue, D::Error> {
                deserializer.deserialize_any(ScoreValueVisitor)
            }
        }

        deserializer.deserialize_any(ScoreValueVisitor)
    }
}

impl std::fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValue::Int(v) => write!(f, "{}", v),
            ScoreValue::Bool(v) => write!(f, "{}", v),
            ScoreValue::Text(s) => write!(f, "'{}'", s),
            ScoreValue::Null => f.write_str("null"),
        }
    }
}

impl From<i64> for ScoreValue {
    fn from(v: i64) -> Self {
        ScoreValue::Int(v)
    }
}

impl From<i32> for ScoreValue {
    fn from(v: i32) -> Self {
        ScoreValue::Int(v as i64)
    }
}

impl From<bool> for ScoreValue {
    fn from(v: bool) -> Self {
        ScoreValue::Bool(v)
    }
}

impl From<String> for ScoreValue {
    fn from(v: String) -> Self {
        ScoreValue::Text(v)
    }
}

impl From<&str> for ScoreValue {
    fn from(v: &str) -> Self {
        ScoreValue::Text(v.to_string())
    }
}

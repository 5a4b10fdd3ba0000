//! Raw score record for one player.
//!
//! `RawScores` is what the scorekeeper typed in, before any bonus or
//! derivation. Accessors always take a default so a missing or
//! wrongly-typed field never leaks into arithmetic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ids::FieldKey;
use super::value::ScoreValue;

/// Field values entered for one player in one session.
///
/// ## Example
///
/// ```
/// use meeple_score::core::RawScores;
///
/// let scores = RawScores::new()
///     .with("points", 40)
///     .with("allTiles", true);
///
/// assert_eq!(scores.get_int("points", 0), 40);
/// assert_eq!(scores.get_int("qwirkles", 0), 0);
/// assert!(scores.get_bool("allTiles", false));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScores {
    values: FxHashMap<FieldKey, ScoreValue>,
}

impl RawScores {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<FieldKey>, value: impl Into<ScoreValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<FieldKey>, value: impl Into<ScoreValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Remove a field, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<ScoreValue> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ScoreValue> {
        self.values.get(key)
    }

    /// Get an integer field, or `default` when missing or not an integer.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(ScoreValue::as_int).unwrap_or(default)
    }

    /// Get a boolean field, or `default` when missing or not a boolean.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(ScoreValue::as_bool).unwrap_or(default)
    }

    /// Get a text field.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ScoreValue::as_text)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all (key, value) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &ScoreValue)> {
        self.values.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RawScores
where
    K: Into<FieldKey>,
    V: Into<ScoreValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut scores = RawScores::new();
        for (key, value) in iter {
            scores.set(key, value);
        }
        scores
    }
}

//! Score field declarations.
//!
//! A `ScoreFieldSpec` describes one editable input on a game's scoring
//! form: its kind, bounds, default value and, for select fields, the
//! available options. Fields marked `base` are summed directly into the
//! final score; the others only feed bonus formulas.

use serde::{Deserialize, Serialize};

use crate::core::{FieldKey, RangePolicy, RawScores, ScoreValue};

/// Input kind of a score field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Integer count or points.
    Number,
    /// Checkbox.
    Boolean,
    /// One of a fixed list of options.
    Select,
    /// Integer factor applied by a bonus formula.
    Multiplier,
}

impl FieldKind {
    /// Whether values of this kind are integers with optional bounds.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Number | FieldKind::Multiplier)
    }

    /// Name of the value type this kind expects.
    #[must_use]
    pub fn expected_type(self) -> &'static str {
        match self {
            FieldKind::Number | FieldKind::Multiplier => "integer",
            FieldKind::Boolean => "boolean",
            FieldKind::Select => "option",
        }
    }
}

/// One choice of a select field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: ScoreValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<ScoreValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Declaration of one raw score field.
///
/// ## Example
///
/// ```
/// use meeple_score::schema::{FieldKind, ScoreFieldSpec};
///
/// let nobles = ScoreFieldSpec::number("nobles", "Nobles").with_max(5);
///
/// assert_eq!(nobles.kind, FieldKind::Number);
/// assert_eq!(nobles.min, Some(0));
/// assert_eq!(nobles.max, Some(5));
/// assert!(nobles.definition_issues().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFieldSpec {
    /// Key of the field in a `RawScores` record.
    pub key: FieldKey,

    /// Form label.
    pub label: String,

    /// Help text shown next to the input.
    pub description: Option<String>,

    pub kind: FieldKind,

    /// Inclusive lower bound (numeric kinds only).
    pub min: Option<i64>,

    /// Inclusive upper bound (numeric kinds only). `None` when the game
    /// imposes no cap.
    pub max: Option<i64>,

    /// Input increment (numeric kinds only).
    pub step: Option<i64>,

    /// Value used when the record has no usable entry for this field.
    pub default_value: ScoreValue,

    /// Choices of a select field. Empty for every other kind.
    pub options: Vec<SelectOption>,

    /// Sum this field directly into the final score as a base term.
    pub base: bool,
}

impl ScoreFieldSpec {
    fn new(key: impl Into<FieldKey>, label: impl Into<String>, kind: FieldKind, default_value: ScoreValue) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
            kind,
            min: None,
            max: None,
            step: None,
            default_value,
            options: Vec::new(),
            base: false,
        }
    }

    /// Non-negative integer field starting at 0, step 1.
    pub fn number(key: impl Into<FieldKey>, label: impl Into<String>) -> Self {
        let mut field = Self::new(key, label, FieldKind::Number, ScoreValue::Int(0));
        field.min = Some(0);
        field.step = Some(1);
        field
    }

    /// Checkbox defaulting to `false`.
    pub fn boolean(key: impl Into<FieldKey>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Boolean, ScoreValue::Bool(false))
    }

    /// Select field defaulting to its first option.
    pub fn select(key: impl Into<FieldKey>, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let default_value = options
            .first()
            .map_or(ScoreValue::Int(0), |o| o.value.clone());
        let mut field = Self::new(key, label, FieldKind::Select, default_value);
        field.options = options;
        field
    }

    /// Non-negative multiplier defaulting to 1.
    pub fn multiplier(key: impl Into<FieldKey>, label: impl Into<String>) -> Self {
        let mut field = Self::new(key, label, FieldKind::Multiplier, ScoreValue::Int(1));
        field.min = Some(0);
        field.step = Some(1);
        field
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Remove the lower bound (e.g. for scores that may go negative).
    #[must_use]
    pub fn unbounded_below(mut self) -> Self {
        self.min = None;
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<ScoreValue>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Mark the field as a base term of the final score.
    #[must_use]
    pub fn base_term(mut self) -> Self {
        self.base = true;
        self
    }

    /// Find the option matching a value.
    #[must_use]
    pub fn option_for(&self, value: &ScoreValue) -> Option<&SelectOption> {
        self.options.iter().find(|o| &o.value == value)
    }

    /// Resolve the value evaluation uses for this field.
    ///
    /// Missing or wrongly-typed entries and unknown select options fall back
    /// to the default; numeric entries go through `policy`.
    #[must_use]
    pub fn resolve(&self, raw: Option<&ScoreValue>, policy: RangePolicy) -> ScoreValue {
        match self.kind {
            FieldKind::Number | FieldKind::Multiplier => match raw.and_then(ScoreValue::as_int) {
                Some(v) => ScoreValue::Int(policy.apply(v, self.min, self.max)),
                None => self.default_value.clone(),
            },
            FieldKind::Boolean => match raw.and_then(ScoreValue::as_bool) {
                Some(v) => ScoreValue::Bool(v),
                None => self.default_value.clone(),
            },
            FieldKind::Select => match raw {
                Some(v) if self.option_for(v).is_some() => v.clone(),
                _ => self.default_value.clone(),
            },
        }
    }

    /// Integer contribution of this field in an already normalized record.
    #[must_use]
    pub fn int_value(&self, scores: &RawScores) -> i64 {
        scores
            .get(self.key.as_str())
            .or(Some(&self.default_value))
            .and_then(ScoreValue::as_int)
            .unwrap_or(0)
    }

    /// Check the declaration itself. Returns every problem found.
    #[must_use]
    pub fn definition_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let key = &self.key;

        match self.kind {
            FieldKind::Select => {
                if self.options.is_empty() {
                    issues.push(format!("{}: select field has no options", key));
                } else if self.option_for(&self.default_value).is_none() {
                    issues.push(format!("{}: default {} is not one of the options", key, self.default_value));
                }
                if self.base && self.options.iter().any(|o| o.value.as_int().is_none()) {
                    issues.push(format!("{}: base select field needs integer options", key));
                }
            }
            kind => {
                if !self.options.is_empty() {
                    issues.push(format!("{}: options are only allowed on select fields", key));
                }
                let matches_kind = match kind {
                    FieldKind::Boolean => self.default_value.as_bool().is_some(),
                    _ => self.default_value.as_int().is_some(),
                };
                if !matches_kind {
                    issues.push(format!(
                        "{}: default {} is not a {}",
                        key,
                        self.default_value,
                        kind.expected_type()
                    ));
                }
                if kind == FieldKind::Boolean && self.base {
                    issues.push(format!("{}: boolean field cannot be a base term", key));
                }
                if kind == FieldKind::Boolean && self.default_value.as_bool() == Some(true) {
                    issues.push(format!("{}: boolean field must default to false", key));
                }
            }
        }

        if !self.kind.is_numeric() && (self.min.is_some() || self.max.is_some() || self.step.is_some()) {
            issues.push(format!("{}: bounds are only allowed on numeric fields", key));
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                issues.push(format!("{}: min {} exceeds max {}", key, min, max));
            }
        }

        if let Some(default) = self.default_value.as_int().filter(|_| self.kind.is_numeric()) {
            if self.min.is_some_and(|min| default < min) || self.max.is_some_and(|max| default > max) {
                issues.push(format!("{}: default {} is outside its bounds", key, default));
            }
        }

        if self.step.is_some_and(|step| step <= 0) {
            issues.push(format!("{}: step must be positive", key));
        }

        issues
    }
}

//! Caller-side validation of raw score records.
//!
//! Evaluation never rejects a record (see `ScoreFieldSpec::resolve`), so the
//! form collaborator uses these checks to flag bad input to the user.
//! Every issue is reported, not just the first.

use thiserror::Error;

use crate::core::{FieldKey, RawScores, ScoreValue};

use super::field::{FieldKind, ScoreFieldSpec};

/// A problem with a player's raw scores or a session's setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{field}: {value} is outside {}", describe_bounds(.min, .max))]
    OutOfRange {
        field: FieldKey,
        value: i64,
        min: Option<i64>,
        max: Option<i64>,
    },

    #[error("{field}: {value} is not a multiple of {step}")]
    OffStep { field: FieldKey, value: i64, step: i64 },

    #[error("{field}: expected {expected}, found {found}")]
    WrongType {
        field: FieldKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{field}: {value} is not one of the options")]
    UnknownOption { field: FieldKey, value: ScoreValue },

    #[error("{field}: not a score field of this game")]
    UnknownField { field: FieldKey },

    #[error("final score {total} is negative")]
    NegativeTotal { total: i64 },

    #[error("{count} players, this game needs {min}-{max}")]
    PlayerCount { count: usize, min: u8, max: u8 },

    #[error("{0}")]
    Rule(String),
}

impl ValidationIssue {
    /// Field the issue refers to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&FieldKey> {
        match self {
            ValidationIssue::OutOfRange { field, .. }
            | ValidationIssue::OffStep { field, .. }
            | ValidationIssue::WrongType { field, .. }
            | ValidationIssue::UnknownOption { field, .. }
            | ValidationIssue::UnknownField { field } => Some(field),
            _ => None,
        }
    }
}

fn describe_bounds(min: &Option<i64>, max: &Option<i64>) -> String {
    match (*min, *max) {
        (Some(lo), Some(hi)) => format!("{}..={}", lo, hi),
        (Some(lo), None) => format!(">= {}", lo),
        (None, Some(hi)) => format!("<= {}", hi),
        (None, None) => "any value".to_string(),
    }
}

/// Check a single entered value against its field.
///
/// A `Null` entry is a cleared input and takes the field default, so it is
/// never an issue.
#[must_use]
pub fn check_value(field: &ScoreFieldSpec, value: &ScoreValue) -> Option<ValidationIssue> {
    if value.is_null() {
        return None;
    }
    let key = field.key.clone();

    match field.kind {
        FieldKind::Number | FieldKind::Multiplier => {
            let Some(v) = value.as_int() else {
                return Some(ValidationIssue::WrongType {
                    field: key,
                    expected: field.kind.expected_type(),
                    found: value.type_name(),
                });
            };
            let below = field.min.is_some_and(|min| v < min);
            let above = field.max.is_some_and(|max| v > max);
            if below || above {
                return Some(ValidationIssue::OutOfRange {
                    field: key,
                    value: v,
                    min: field.min,
                    max: field.max,
                });
            }
            let offset = i128::from(v) - i128::from(field.min.unwrap_or(0));
            match field.step {
                Some(step) if step > 0 && offset.rem_euclid(i128::from(step)) != 0 => {
                    Some(ValidationIssue::OffStep { field: key, value: v, step })
                }
                _ => None,
            }
        }
        FieldKind::Boolean => match value {
            ScoreValue::Bool(_) => None,
            other => Some(ValidationIssue::WrongType {
                field: key,
                expected: field.kind.expected_type(),
                found: other.type_name(),
            }),
        },
        FieldKind::Select => match field.option_for(value) {
            Some(_) => None,
            None => Some(ValidationIssue::UnknownOption {
                field: key,
                value: value.clone(),
            }),
        },
    }
}

/// Check a record against a field schema.
///
/// Fields are checked in declaration order; keys the schema does not know
/// are reported last, sorted by key. Missing fields are not an issue since
/// they take their default.
#[must_use]
pub fn validate_scores(fields: &[ScoreFieldSpec], scores: &RawScores) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = fields
        .iter()
        .filter_map(|field| {
            scores
                .get(field.key.as_str())
                .and_then(|value| check_value(field, value))
        })
        .collect();

    let mut unknown: Vec<&FieldKey> = scores
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !fields.iter().any(|f| &f.key == *key))
        .collect();
    unknown.sort();
    issues.extend(
        unknown
            .into_iter()
            .map(|key| ValidationIssue::UnknownField { field: key.clone() }),
    );

    issues
}

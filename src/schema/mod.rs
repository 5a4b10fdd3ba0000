//! Score field schema: what a scorekeeper fills in for each game.
//!
//! ## Key Types
//!
//! - `FieldKind`: Number, Boolean, Select or Multiplier
//! - `ScoreFieldSpec`: one input with bounds, default and options
//! - `ValidationIssue`: a problem with entered values
//!
//! Out-of-range input is never rejected during evaluation. It is resolved
//! by the registry's `RangePolicy` and reported by `validate_scores`.

pub mod field;
pub mod validation;

pub use field::{FieldKind, ScoreFieldSpec, SelectOption};
pub use validation::{check_value, validate_scores, ValidationIssue};

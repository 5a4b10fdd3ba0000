//! # meeple-score
//!
//! Declarative per-game scoring rules for a board-game score tracker.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No game is hardcoded in the evaluator. Games declare
//!    fields and bonuses; the reducer and breakdown are derived from them.
//!
//! 2. **One Source of Truth**: The final score and the breakdown `Total` are
//!    computed from the same term list and cannot diverge.
//!
//! 3. **Total Evaluation**: Missing, wrongly-typed or out-of-range input is
//!    resolved to a defined value. Validation reports it separately.
//!
//! ## Modules
//!
//! - `core`: Game and field ids, raw score values and records, configuration
//! - `schema`: Score field declarations and record validation
//! - `bonus`: Bonus and penalty formulas
//! - `breakdown`: Itemized score with a single trailing total
//! - `rules`: `ScoringRules` trait and the `GameUtility` definition
//! - `registry`: Game id lookup and the evaluation boundary
//! - `session`: Sessions and standings by winning condition
//! - `games`: Built-in game definitions

pub mod core;
pub mod error;
pub mod schema;
pub mod bonus;
pub mod breakdown;
pub mod rules;
pub mod registry;
pub mod session;
pub mod games;

// Re-export commonly used types
pub use crate::core::{FieldKey, GameId, RangePolicy, RawScores, RegistryConfig, ScoreValue};

pub use crate::error::{ScoreError, ScoreResult};

pub use crate::schema::{FieldKind, ScoreFieldSpec, SelectOption, ValidationIssue};

pub use crate::bonus::{BonusKind, BonusSpec, Visibility};

pub use crate::breakdown::{Breakdown, BreakdownItem, ItemKind, ScoreTerm};

pub use crate::rules::{GameUtility, QuickControl, ScoringRules, UiHints, WinningCondition};

pub use crate::registry::{Evaluation, GameRegistry};

pub use crate::session::{GameSession, PlayerScore, SessionIssue, Standing};

//! Scoring rules for game implementations.
//!
//! Games describe their scoring with:
//! - `ScoringRules`: fields + bonuses, with the reducer and presenter
//!   derived from them
//! - `GameUtility`: the declarative implementation every built-in game uses
//!
//! The registry and sessions call into `ScoringRules` but never interpret
//! game-specific fields directly.

pub mod scoring;
pub mod utility;

pub use scoring::{ScoringRules, Terms};
pub use utility::{GameUtility, QuickControl, RuleFn, UiHints, WinningCondition};

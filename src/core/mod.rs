//! Core types: identifiers, raw score values and records, configuration.
//!
//! Everything here is game-agnostic. Games describe themselves with
//! `schema` and `bonus` types and never extend the core.

pub mod ids;
pub mod value;
pub mod record;
pub mod config;

pub use ids::{FieldKey, GameId};
pub use value::ScoreValue;
pub use record::RawScores;
pub use config::{RangePolicy, RegistryConfig};

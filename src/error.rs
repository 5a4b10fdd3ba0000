//! Crate error type.
//!
//! Only registry construction and configuration loading can fail.
//! Problems with a player's raw scores are reported as
//! [`ValidationIssue`](crate::schema::ValidationIssue) values instead.

use thiserror::Error;

use crate::core::GameId;

/// Errors raised while building a registry or loading its configuration.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("game {0} is already registered")]
    DuplicateGame(GameId),

    #[error("invalid definition for game {game_id}: {}", .issues.join("; "))]
    InvalidDefinition { game_id: GameId, issues: Vec<String> },

    #[error("unknown game id '{0}'")]
    UnknownGame(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

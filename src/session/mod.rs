//! Game sessions and standings.
//!
//! A `GameSession` holds every player's raw scores for one play of a game.
//! Standings apply the game's winning condition to the final scores; this
//! is the only place where `WinningCondition` is interpreted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakdown::Breakdown;
use crate::core::{GameId, RawScores};
use crate::registry::GameRegistry;
use crate::rules::ScoringRules;
use crate::schema::ValidationIssue;

/// One player's entry in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub player_id: String,
    pub player_name: String,
    #[serde(default)]
    pub scores: RawScores,
}

impl PlayerScore {
    pub fn new(player_id: impl Into<String>, player_name: impl Into<String>, scores: RawScores) -> Self {
        Self {
            player_id: player_id.into(),
            player_name: player_name.into(),
            scores,
        }
    }
}

/// One play of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub game_id: GameId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(default)]
    pub players: Vec<PlayerScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    /// `None` while the session is still being played.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A player's place in the standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    /// 1-based; tied players share a rank and the next rank is skipped.
    pub rank: usize,
    pub player_id: String,
    pub player_name: String,
    pub final_score: i64,
    pub breakdown: Breakdown,
}

impl Standing {
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.rank == 1
    }
}

/// A validation issue, attributed to a player when it concerns one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIssue {
    pub player_id: Option<String>,
    pub issue: ValidationIssue,
}

impl GameSession {
    pub fn new(game_id: impl Into<GameId>) -> Self {
        Self {
            game_id: game_id.into(),
            game_name: None,
            players: Vec::new(),
            start_time: None,
            end_time: None,
        }
    }

    #[must_use]
    pub fn with_game_name(mut self, name: impl Into<String>) -> Self {
        self.game_name = Some(name.into());
        self
    }

    /// Add a player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerScore) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn started_at(mut self, time: DateTime<Utc>) -> Self {
        self.start_time = Some(time);
        self
    }

    #[must_use]
    pub fn ended_at(mut self, time: DateTime<Utc>) -> Self {
        self.end_time = Some(time);
        self
    }

    /// Play time, once both ends are known.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        Some(self.end_time? - self.start_time?)
    }

    /// Rank the players, best first.
    ///
    /// Returns `None` when the game is not registered. Players with equal
    /// scores keep their session order.
    #[must_use]
    pub fn standings(&self, registry: &GameRegistry) -> Option<Vec<Standing>> {
        let utility = registry.lookup(self.game_id.as_str())?;
        let condition = utility.winning_condition;

        let mut scored: Vec<(&PlayerScore, i64, Breakdown)> = self
            .players
            .iter()
            .map(|p| {
                let breakdown = utility.compute_breakdown(&p.scores);
                (p, breakdown.total(), breakdown)
            })
            .collect();
        scored.sort_by(|a, b| condition.compare(a.1, b.1));

        let mut standings: Vec<Standing> = Vec::with_capacity(scored.len());
        for (position, (player, final_score, breakdown)) in scored.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(prev) if prev.final_score == final_score => prev.rank,
                _ => position + 1,
            };
            standings.push(Standing {
                rank,
                player_id: player.player_id.clone(),
                player_name: player.player_name.clone(),
                final_score,
                breakdown,
            });
        }

        debug!(
            game_id = %self.game_id,
            players = standings.len(),
            condition = ?condition,
            "Computed standings"
        );
        Some(standings)
    }

    /// Check the player count and every player's record.
    ///
    /// Returns `None` when the game is not registered.
    #[must_use]
    pub fn validate(&self, registry: &GameRegistry) -> Option<Vec<SessionIssue>> {
        let utility = registry.lookup(self.game_id.as_str())?;
        let mut issues = Vec::new();

        if !utility.supports_player_count(self.players.len()) {
            issues.push(SessionIssue {
                player_id: None,
                issue: ValidationIssue::PlayerCount {
                    count: self.players.len(),
                    min: utility.min_players,
                    max: utility.max_players,
                },
            });
        }

        for player in &self.players {
            issues.extend(utility.validate(&player.scores).into_iter().map(|issue| SessionIssue {
                player_id: Some(player.player_id.clone()),
                issue,
            }));
        }

        Some(issues)
    }
}

//! Registry configuration.
//!
//! Applications configure the registry at startup:
//! - `RangePolicy`: what evaluation does with out-of-range numbers
//! - `RegistryConfig`: the policy plus an optional allow-list of built-in games
//!
//! Example JSON:
//! ```json
//! { "range_policy": "pass_through", "games": ["25669", "406854"] }
//! ```

use serde::{Deserialize, Serialize};

use super::ids::GameId;
use crate::error::ScoreResult;

/// What evaluation does with a numeric value outside its field's bounds.
///
/// Validation reports such values either way; the policy only decides
/// which number the bonus formulas and the reducer see.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Clamp into `[min, max]`.
    #[default]
    Clamp,
    /// Use the value as entered.
    PassThrough,
}

impl RangePolicy {
    /// Apply the policy to a value with optional bounds.
    #[must_use]
    pub fn apply(self, value: i64, min: Option<i64>, max: Option<i64>) -> i64 {
        match self {
            RangePolicy::PassThrough => value,
            RangePolicy::Clamp => {
                let value = min.map_or(value, |lo| value.max(lo));
                max.map_or(value, |hi| value.min(hi))
            }
        }
    }
}

/// Registry configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Out-of-range handling for every registered game.
    #[serde(default)]
    pub range_policy: RangePolicy,

    /// Built-in games to register. `None` registers all of them.
    #[serde(default)]
    pub games: Option<Vec<GameId>>,
}

impl RegistryConfig {
    /// Create the default configuration (clamp, all built-in games).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> ScoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the range policy.
    #[must_use]
    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Restrict registration to the given built-in games.
    #[must_use]
    pub fn with_games<I, G>(mut self, games: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GameId>,
    {
        self.games = Some(games.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a game is enabled by this configuration.
    #[must_use]
    pub fn enables(&self, id: &GameId) -> bool {
        self.games.as_ref().map_or(true, |games| games.contains(id))
    }
}

//! Odin (2024): cards left in hand, lowered by rounds won. Lowest wins.

use crate::bonus::BonusSpec;
use crate::core::RawScores;
use crate::rules::{GameUtility, UiHints, WinningCondition};
use crate::schema::ScoreFieldSpec;

pub const GAME_ID: &str = "406854";

const POINTS_PER_ROUND_WON: i64 = -2;

fn round_bonus(s: &RawScores) -> i64 {
    s.get_int("roundsWon", 0).saturating_mul(POINTS_PER_ROUND_WON)
}

fn round_detail(s: &RawScores) -> String {
    format!("{} rounds won × {} points", s.get_int("roundsWon", 0), POINTS_PER_ROUND_WON)
}

/// Scoring definition for Odin.
#[must_use]
pub fn utility() -> GameUtility {
    GameUtility::new(GAME_ID, "Odin (2024)")
        .with_players(2, 4)
        .with_winning_condition(WinningCondition::Lowest)
        .with_field(ScoreFieldSpec::number("cardsInHand", "Cards in Hand").base_term())
        .with_field(ScoreFieldSpec::number("roundsWon", "Rounds Won"))
        .with_bonus(
            BonusSpec::new("roundBonus", "Round Bonus", round_bonus)
                .with_description("-2 points per round won")
                .with_detail(round_detail),
        )
        .with_total_description("Lower is better")
        .with_ui(
            UiHints::new()
                .with_round_tracker()
                .allowing_negative_scores()
                .with_component("OdinRoundTracker"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ScoringRules;

    #[test]
    fn test_example_record() {
        let game = utility();
        let scores = RawScores::new().with("cardsInHand", 5).with("roundsWon", 1);

        assert_eq!(game.bonus("roundBonus").map(|b| b.evaluate(&scores)), Some(-2));
        assert_eq!(game.compute_final_score(&scores), 3);
        assert_eq!(game.winning_condition, WinningCondition::Lowest);

        let breakdown = game.compute_breakdown(&scores);
        assert_eq!(breakdown.total(), 3);
        assert_eq!(breakdown.total_item().description.as_deref(), Some("Lower is better"));
        assert_eq!(
            breakdown.find("Round Bonus").and_then(|i| i.description.as_deref()),
            Some("1 rounds won × -2 points")
        );
    }

    #[test]
    fn test_negative_total_is_allowed() {
        let game = utility();
        let scores = RawScores::new().with("cardsInHand", 1).with("roundsWon", 3);
        assert_eq!(game.compute_final_score(&scores), -5);
        assert!(game.validate(&scores).is_empty());
    }
}

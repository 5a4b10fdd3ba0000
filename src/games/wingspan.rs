//! Wingspan: bird, bonus card and goal points plus eggs, food and tucked cards.

use crate::bonus::BonusSpec;
use crate::core::RawScores;
use crate::rules::{GameUtility, WinningCondition};
use crate::schema::ScoreFieldSpec;

pub const GAME_ID: &str = "266192";

fn eggs(s: &RawScores) -> i64 {
    s.get_int("eggs", 0)
}

fn cached_food(s: &RawScores) -> i64 {
    s.get_int("cachedFood", 0)
}

fn tucked_cards(s: &RawScores) -> i64 {
    s.get_int("tuckedCards", 0)
}

/// Scoring definition for Wingspan.
///
/// Every item on the score pad is worth its face value; eggs, cached food
/// and tucked cards are counts worth 1 point each.
#[must_use]
pub fn utility() -> GameUtility {
    GameUtility::new(GAME_ID, "Wingspan")
        .with_players(1, 5)
        .with_winning_condition(WinningCondition::Highest)
        .with_field(ScoreFieldSpec::number("birds", "Bird Points").base_term())
        .with_field(ScoreFieldSpec::number("bonusCards", "Bonus Cards").base_term())
        .with_field(
            ScoreFieldSpec::number("roundGoals", "End-of-Round Goals")
                .with_max(20)
                .base_term(),
        )
        .with_field(ScoreFieldSpec::number("eggs", "Eggs on Birds"))
        .with_field(ScoreFieldSpec::number("cachedFood", "Cached Food"))
        .with_field(ScoreFieldSpec::number("tuckedCards", "Tucked Cards"))
        .with_bonus(BonusSpec::new("eggPoints", "Eggs on Birds", eggs).with_description("1 point per egg"))
        .with_bonus(
            BonusSpec::new("foodPoints", "Cached Food", cached_food)
                .with_description("1 point per cached food token"),
        )
        .with_bonus(
            BonusSpec::new("tuckedPoints", "Tucked Cards", tucked_cards)
                .with_description("1 point per tucked card"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ScoringRules;

    #[test]
    fn test_full_score_pad() {
        let game = utility();
        let scores = RawScores::new()
            .with("birds", 42)
            .with("bonusCards", 9)
            .with("roundGoals", 11)
            .with("eggs", 14)
            .with("cachedFood", 3)
            .with("tuckedCards", 8);

        assert_eq!(game.compute_final_score(&scores), 87);
        assert_eq!(game.compute_breakdown(&scores).total(), 87);
    }

    #[test]
    fn test_tucked_cards_count_toward_total() {
        let game = utility();
        let scores = RawScores::new().with("tuckedCards", 5);

        let breakdown = game.compute_breakdown(&scores);
        assert_eq!(breakdown.find("Tucked Cards").map(|i| i.value), Some(5));
        assert_eq!(game.compute_final_score(&scores), 5);
    }

    #[test]
    fn test_solo_supported() {
        assert!(utility().supports_player_count(1));
        assert!(!utility().supports_player_count(6));
    }
}

//! Qwirkle: tile points plus Qwirkle and all-tiles bonuses.

use crate::bonus::BonusSpec;
use crate::core::RawScores;
use crate::rules::{GameUtility, QuickControl, UiHints, WinningCondition};
use crate::schema::ScoreFieldSpec;

pub const GAME_ID: &str = "25669";

const POINTS_PER_QWIRKLE: i64 = 12;
const ALL_TILES_BONUS: i64 = 6;

fn qwirkle_bonus(s: &RawScores) -> i64 {
    s.get_int("qwirkles", 0).saturating_mul(POINTS_PER_QWIRKLE)
}

fn qwirkle_detail(s: &RawScores) -> String {
    format!("{} Qwirkles × {} points", s.get_int("qwirkles", 0), POINTS_PER_QWIRKLE)
}

fn all_tiles_bonus(s: &RawScores) -> i64 {
    if s.get_bool("allTiles", false) {
        ALL_TILES_BONUS
    } else {
        0
    }
}

/// Scoring definition for Qwirkle.
#[must_use]
pub fn utility() -> GameUtility {
    GameUtility::new(GAME_ID, "Qwirkle")
        .with_players(2, 4)
        .with_winning_condition(WinningCondition::Highest)
        .with_field(
            ScoreFieldSpec::number("points", "Points")
                .with_description("Points from placed tiles (1 per tile in a line)")
                .base_term(),
        )
        .with_field(
            ScoreFieldSpec::number("qwirkles", "Qwirkles")
                .with_description("Number of completed lines of 6 tiles"),
        )
        .with_field(
            ScoreFieldSpec::boolean("allTiles", "Used All Tiles")
                .with_description("Check if player used all tiles on their last turn"),
        )
        .with_bonus(
            BonusSpec::new("qwirkleBonus", "Qwirkle Bonuses", qwirkle_bonus)
                .with_description("12 points per completed line of 6 tiles")
                .with_detail(qwirkle_detail),
        )
        .with_bonus(
            BonusSpec::new("allTilesBonus", "All Tiles Bonus", all_tiles_bonus)
                .with_description("Used all tiles on final turn")
                .shown_when_nonzero(),
        )
        .with_ui(
            UiHints::new()
                .with_round_tracker()
                .with_quick_control(QuickControl::new("+1", 1))
                .with_quick_control(QuickControl::new("+6", 6)),
        )
}

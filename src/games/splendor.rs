//! Splendor: prestige points plus nobles, development cards and gems.

use crate::bonus::BonusSpec;
use crate::core::RawScores;
use crate::rules::{GameUtility, UiHints, WinningCondition};
use crate::schema::ScoreFieldSpec;

pub const GAME_ID: &str = "174430";

const POINTS_PER_NOBLE: i64 = 3;
const GEMS_PER_POINT: i64 = 5;

fn noble_bonus(s: &RawScores) -> i64 {
    s.get_int("nobles", 0).saturating_mul(POINTS_PER_NOBLE)
}

fn noble_detail(s: &RawScores) -> String {
    format!("{} nobles × {} points", s.get_int("nobles", 0), POINTS_PER_NOBLE)
}

fn card_bonus(s: &RawScores) -> i64 {
    s.get_int("cards", 0)
}

fn gem_efficiency(s: &RawScores) -> i64 {
    s.get_int("gems", 0).div_euclid(GEMS_PER_POINT)
}

fn gem_detail(s: &RawScores) -> String {
    format!("{} gems ÷ {} (rounded down)", s.get_int("gems", 0), GEMS_PER_POINT)
}

/// Scoring definition for Splendor.
#[must_use]
pub fn utility() -> GameUtility {
    GameUtility::new(GAME_ID, "Splendor")
        .with_players(2, 4)
        .with_winning_condition(WinningCondition::Highest)
        .with_field(ScoreFieldSpec::number("points", "Victory Points").base_term())
        .with_field(ScoreFieldSpec::number("nobles", "Nobles").with_max(5))
        .with_field(ScoreFieldSpec::number("cards", "Development Cards"))
        .with_field(ScoreFieldSpec::number("gems", "Gems"))
        .with_bonus(
            BonusSpec::new("nobleBonus", "Nobles", noble_bonus)
                .with_description("3 points per noble card")
                .with_detail(noble_detail),
        )
        .with_bonus(
            BonusSpec::new("cardBonus", "Development Cards", card_bonus)
                .with_description("Points from cards"),
        )
        .with_bonus(
            BonusSpec::new("gemEfficiency", "Gem Efficiency", gem_efficiency)
                .with_description("1 point per 5 gems (rounded down)")
                .with_detail(gem_detail),
        )
        .with_ui(UiHints::new().with_component("SplendorNoblesTracker"))
}

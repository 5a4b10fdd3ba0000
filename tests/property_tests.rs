use meeple_score::core::{RangePolicy, RawScores, ScoreValue};
use meeple_score::games;
use meeple_score::{GameSession, GameRegistry, GameUtility, ItemKind, PlayerScore, ScoringRules};
use proptest::prelude::*;

// --- STRATEGIES ---

/// Every key any built-in game reads, plus keys no game knows.
const KEYS: &[&str] = &[
    "points", "nobles", "cards", "gems", "qwirkles", "allTiles", "cardsInHand", "roundsWon",
    "birds", "bonusCards", "roundGoals", "eggs", "cachedFood", "tuckedCards", "junk", "",
];

fn arb_int() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => -10_000i64..10_000,
        1 => any::<i64>(),
        1 => prop_oneof![Just(i64::MIN), Just(i64::MIN + 1), Just(i64::MAX - 1), Just(i64::MAX)],
    ]
}

fn arb_value() -> impl Strategy<Value = ScoreValue> {
    prop_oneof![
        6 => arb_int().prop_map(ScoreValue::Int),
        1 => any::<bool>().prop_map(ScoreValue::Bool),
        1 => "[a-z0-9]{0,6}".prop_map(ScoreValue::Text),
        1 => Just(ScoreValue::Null),
    ]
}

prop_compose! {
    fn arb_scores()(
        entries in proptest::collection::vec((proptest::sample::select(KEYS), arb_value()), 0..12)
    ) -> RawScores {
        entries.into_iter().collect()
    }
}

fn arb_game() -> impl Strategy<Value = GameUtility> {
    proptest::sample::select(games::builtin())
}

fn arb_policy() -> impl Strategy<Value = RangePolicy> {
    prop_oneof![Just(RangePolicy::Clamp), Just(RangePolicy::PassThrough)]
}

// --- PROPERTIES ---

proptest! {
    #[test]
    fn test_final_score_equals_breakdown_total(
        game in arb_game(),
        policy in arb_policy(),
        scores in arb_scores()
    ) {
        let game = game.with_range_policy(policy);
        let breakdown = game.compute_breakdown(&scores);

        prop_assert_eq!(game.compute_final_score(&scores), breakdown.total());
        prop_assert_eq!(game.compute_final_score(&scores), game.compute_final_score(&scores));
    }

    #[test]
    fn test_exactly_one_trailing_total(game in arb_game(), scores in arb_scores()) {
        let breakdown = game.compute_breakdown(&scores);
        let totals = breakdown.iter().filter(|i| i.kind == ItemKind::Total).count();

        prop_assert_eq!(totals, 1);
        prop_assert_eq!(breakdown.items().last().map(|i| i.kind), Some(ItemKind::Total));
        prop_assert!(breakdown.components().iter().all(|i| i.kind != ItemKind::Total));
    }

    #[test]
    fn test_normalize_is_idempotent(
        game in arb_game(),
        policy in arb_policy(),
        scores in arb_scores()
    ) {
        let game = game.with_range_policy(policy);
        let once = game.normalize(&scores);

        prop_assert_eq!(&game.normalize(&once), &once);
        prop_assert_eq!(game.compute_breakdown(&once), game.compute_breakdown(&scores));
    }

    #[test]
    fn test_clamped_numbers_stay_in_bounds(game in arb_game(), scores in arb_scores()) {
        let normalized = game.normalize(&scores);

        for field in game.fields().iter().filter(|f| f.kind.is_numeric()) {
            let value = normalized.get_int(field.key.as_str(), i64::MIN);
            prop_assert!(field.min.map_or(true, |min| value >= min), "{} = {}", field.key, value);
            prop_assert!(field.max.map_or(true, |max| value <= max), "{} = {}", field.key, value);
        }
    }

    #[test]
    fn test_validation_is_total(
        game in arb_game(),
        policy in arb_policy(),
        scores in arb_scores()
    ) {
        let game = game.with_range_policy(policy);
        let total = game.compute_final_score(&scores);

        prop_assert_eq!(game.validate_with_total(&scores, total), game.validate(&scores));
    }

    #[test]
    fn test_valid_records_are_scored_as_entered(game in arb_game(), scores in arb_scores()) {
        let lenient = game.clone().with_range_policy(RangePolicy::PassThrough);

        if game.validate(&scores).is_empty() {
            prop_assert_eq!(game.compute_final_score(&scores), lenient.compute_final_score(&scores));
        }
    }

    #[test]
    fn test_standings_are_ordered(
        scores in proptest::collection::vec(arb_scores(), 0..6),
        game_index in 0usize..4
    ) {
        let registry = GameRegistry::with_builtin_games().unwrap();
        let game_id = games::builtin()[game_index].game_id.clone();
        let condition = registry.lookup(game_id.as_str()).unwrap().winning_condition;

        let session = scores
            .into_iter()
            .enumerate()
            .fold(GameSession::new(game_id), |session, (i, s)| {
                session.with_player(PlayerScore::new(i.to_string(), format!("P{}", i), s))
            });
        let standings = session.standings(&registry).unwrap();

        prop_assert_eq!(standings.len(), session.players.len());
        for pair in standings.windows(2) {
            prop_assert!(!condition.is_better(pair[1].final_score, pair[0].final_score));
            prop_assert!(pair[0].rank <= pair[1].rank);
            prop_assert_eq!(pair[0].rank == pair[1].rank, pair[0].final_score == pair[1].final_score);
        }
        if let Some(first) = standings.first() {
            prop_assert_eq!(first.rank, 1);
        }
    }
}

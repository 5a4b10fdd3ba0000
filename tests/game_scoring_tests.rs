//! Scoring behaviour of the built-in games.
//!
//! These tests exercise the registry boundary the way the scoring form and
//! the results view use it: look a game up, evaluate a record, rank a session.

use meeple_score::core::{RangePolicy, RawScores, RegistryConfig};
use meeple_score::games::{odin, qwirkle, splendor, wingspan};
use meeple_score::{
    GameRegistry, GameSession, ItemKind, PlayerScore, ScoringRules, ValidationIssue, WinningCondition,
};

/// (game id, a base field with `min = 0`) for every built-in game.
const BASE_FIELDS: [(&str, &str); 4] = [
    (splendor::GAME_ID, "points"),
    (qwirkle::GAME_ID, "points"),
    (odin::GAME_ID, "cardsInHand"),
    (wingspan::GAME_ID, "birds"),
];

/// Test the Qwirkle example record end to end.
#[test]
fn test_qwirkle_example() {
    let registry = GameRegistry::with_builtin_games().unwrap();
    let scores = RawScores::new()
        .with("points", 40)
        .with("qwirkles", 2)
        .with("allTiles", true);

    let evaluation = registry.evaluate(qwirkle::GAME_ID, &scores).unwrap();
    assert_eq!(evaluation.final_score, 70);
    assert_eq!(evaluation.breakdown.total(), 70);
    assert!(evaluation.is_valid());

    let values: Vec<_> = evaluation.breakdown.iter().map(|i| i.value).collect();
    assert_eq!(values, vec![40, 24, 6, 70]);
}

/// Test the Odin example record and its ranking direction.
#[test]
fn test_odin_example() {
    let registry = GameRegistry::with_builtin_games().unwrap();
    let scores = RawScores::new().with("cardsInHand", 5).with("roundsWon", 1);

    let evaluation = registry.evaluate(odin::GAME_ID, &scores).unwrap();
    assert_eq!(evaluation.final_score, 3);
    assert_eq!(evaluation.winning_condition, WinningCondition::Lowest);

    let round = evaluation.breakdown.find("Round Bonus").unwrap();
    assert_eq!(round.value, -2);
    assert_eq!(round.kind, ItemKind::Bonus);
}

/// Test that unknown games are an explicit absence.
#[test]
fn test_unknown_game_is_absent() {
    let registry = GameRegistry::with_builtin_games().unwrap();
    assert!(registry.lookup("nonexistent-id").is_none());
    assert!(!registry.has("nonexistent-id"));
    assert!(registry.evaluate("nonexistent-id", &RawScores::new()).is_none());
}

/// Test that a blank form scores zero in every game and agrees with its breakdown.
#[test]
fn test_default_records() {
    let registry = GameRegistry::with_builtin_games().unwrap();

    for game in registry.iter() {
        let defaults = game.default_scores();
        let breakdown = game.compute_breakdown(&defaults);

        assert_eq!(game.compute_final_score(&defaults), breakdown.total(), "{}", game.game_name);
        assert_eq!(breakdown.total(), 0, "{}", game.game_name);
        assert!(game.validate(&defaults).is_empty(), "{}", game.game_name);
    }
}

/// Test that an empty record behaves exactly like a blank form.
#[test]
fn test_missing_fields_are_neutral() {
    let registry = GameRegistry::with_builtin_games().unwrap();

    for game in registry.iter() {
        assert_eq!(
            game.compute_breakdown(&RawScores::new()),
            game.compute_breakdown(&game.default_scores()),
            "{}",
            game.game_name
        );
    }
}

/// Test that negative input for a `min = 0` field is clamped to 0 by default.
#[test]
fn test_negative_input_clamped_in_every_game() {
    let registry = GameRegistry::with_builtin_games().unwrap();

    for (game_id, field) in BASE_FIELDS {
        let scores = RawScores::new().with(field, -3);
        let evaluation = registry.evaluate(game_id, &scores).unwrap();

        assert_eq!(evaluation.final_score, 0, "game {}", game_id);
        assert_eq!(evaluation.breakdown.total(), 0, "game {}", game_id);
        assert_eq!(
            evaluation.issues,
            vec![ValidationIssue::OutOfRange {
                field: field.into(),
                value: -3,
                min: Some(0),
                max: None,
            }],
            "game {}",
            game_id
        );
    }
}

/// Test that the pass-through policy uses negative input as entered.
#[test]
fn test_negative_input_passed_through_in_every_game() {
    let config = RegistryConfig::new().with_range_policy(RangePolicy::PassThrough);
    let registry = GameRegistry::from_config(&config).unwrap();

    for (game_id, field) in BASE_FIELDS {
        let scores = RawScores::new().with(field, -3);
        let evaluation = registry.evaluate(game_id, &scores).unwrap();

        assert_eq!(evaluation.final_score, -3, "game {}", game_id);
        assert_eq!(evaluation.breakdown.total(), -3, "game {}", game_id);
        assert!(
            evaluation
                .issues
                .iter()
                .any(|i| matches!(i, ValidationIssue::OutOfRange { value: -3, .. })),
            "game {}",
            game_id
        );

        let allows_negative = registry.lookup(game_id).unwrap().ui.allow_negative_scores;
        let flags_total = evaluation
            .issues
            .contains(&ValidationIssue::NegativeTotal { total: -3 });
        assert_eq!(flags_total, !allows_negative, "game {}", game_id);
    }
}

/// Test that extreme counts saturate instead of overflowing.
#[test]
fn test_extreme_counts_saturate() {
    let registry = GameRegistry::with_builtin_games().unwrap();

    let scores = RawScores::new().with("points", i64::MAX).with("qwirkles", i64::MAX);
    let evaluation = registry.evaluate(qwirkle::GAME_ID, &scores).unwrap();
    assert_eq!(evaluation.final_score, i64::MAX);
    assert_eq!(evaluation.breakdown.total(), i64::MAX);
    assert!(evaluation.is_valid());

    let scores = RawScores::new().with("roundsWon", i64::MAX);
    let evaluation = registry.evaluate(odin::GAME_ID, &scores).unwrap();
    assert_eq!(evaluation.final_score, i64::MIN);
}

/// Test that a form posting JSON nulls and whole-number floats can be scored.
#[test]
fn test_form_json_with_nulls_and_floats() {
    let registry = GameRegistry::with_builtin_games().unwrap();
    let scores: RawScores =
        serde_json::from_str(r#"{"points": 40.0, "qwirkles": 2, "allTiles": null}"#).unwrap();

    let evaluation = registry.evaluate(qwirkle::GAME_ID, &scores).unwrap();
    assert_eq!(evaluation.final_score, 64);
    assert!(evaluation.is_valid());
}

/// Test that loading the configuration from JSON restricts the registry.
#[test]
fn test_registry_from_json_config() {
    let config = RegistryConfig::from_json(r#"{ "games": ["25669", "406854"] }"#).unwrap();
    let registry = GameRegistry::from_config(&config).unwrap();

    assert!(registry.has(qwirkle::GAME_ID));
    assert!(registry.has(odin::GAME_ID));
    assert!(!registry.has(splendor::GAME_ID));
    assert!(!registry.has(wingspan::GAME_ID));
}

/// Test a full Odin session: lower totals rank first.
#[test]
fn test_odin_session_standings() {
    let registry = GameRegistry::with_builtin_games().unwrap();
    let session = GameSession::new(odin::GAME_ID)
        .with_player(PlayerScore::new("1", "Ann", RawScores::new().with("cardsInHand", 5).with("roundsWon", 1)))
        .with_player(PlayerScore::new("2", "Bo", RawScores::new().with("cardsInHand", 2)))
        .with_player(PlayerScore::new("3", "Cy", RawScores::new().with("cardsInHand", 9).with("roundsWon", 3)));

    let standings = session.standings(&registry).unwrap();
    let order: Vec<_> = standings.iter().map(|s| (s.player_name.as_str(), s.final_score)).collect();
    assert_eq!(order, vec![("Bo", 2), ("Ann", 3), ("Cy", 3)]);
    assert_eq!(standings[1].rank, 2);
    assert_eq!(standings[2].rank, 2);

    assert!(session.validate(&registry).unwrap().is_empty());
}

/// Test that evaluations can be shared across threads once the registry is built.
#[test]
fn test_concurrent_readers() {
    use std::sync::Arc;
    use std::thread;

    let registry = Arc::new(GameRegistry::with_builtin_games().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let scores = RawScores::new().with("points", i * 10);
                registry.evaluate(qwirkle::GAME_ID, &scores).map(|e| e.final_score)
            })
        })
        .collect();

    let totals: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![Some(0), Some(10), Some(20), Some(30)]);
}

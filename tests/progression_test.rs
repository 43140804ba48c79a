// tests/progression_test.rs — Integration test: quest lifecycle and player progression

use chrono::{DateTime, Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

use questlog::core::progress::Outcome;
use questlog::core::state::{GameEvent, GameState};
use questlog::core::types::{Difficulty, QuestDraft, QuestId};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

fn draft(name: &str, difficulty: Difficulty, gold: &str, time_limit: &str) -> QuestDraft {
    QuestDraft {
        name: name.into(),
        difficulty,
        gold: gold.into(),
        time_limit: time_limit.into(),
    }
}

/// Submit a draft and return the new quest's id.
fn submit(game: &mut GameState, d: QuestDraft, at: DateTime<Utc>) -> QuestId {
    game.apply(GameEvent::QuestSubmitted { draft: d, at });
    game.quests.iter().last().unwrap().id
}

#[test]
fn test_on_time_completion_pays_out() {
    // Easy quest, 50 gold, one hour allowed, completed immediately.
    let mut game = GameState::new();
    let id = submit(
        &mut game,
        draft("Fetch the mail", Difficulty::Easy, "50", "1"),
        t0(),
    );

    let resolution = game
        .apply(GameEvent::QuestCompleted { id, at: t0() })
        .unwrap();

    assert_eq!(resolution.outcome, Outcome::OnTime { gold: 50, exp: 10 });
    assert_eq!(game.stats.exp, 10);
    assert_eq!(game.stats.gold, 50);
    assert_eq!(game.stats.level(), 1);
    assert_eq!(game.stats.health, 100);
    assert!(game.quests.is_empty());
}

#[test]
fn test_late_completion_costs_health() {
    // Hard quest with a zero-hour limit is late the moment any time
    // has passed.
    let mut game = GameState::new();
    let id = submit(
        &mut game,
        draft("Impossible deadline", Difficulty::Hard, "0", "0"),
        t0(),
    );

    let resolution = game
        .apply(GameEvent::QuestCompleted {
            id,
            at: t0() + Duration::minutes(1),
        })
        .unwrap();

    assert_eq!(resolution.outcome, Outcome::Late { health_lost: 10 });
    assert_eq!(game.stats.health, 90);
    assert_eq!(game.stats.exp, 0);
    assert_eq!(game.stats.gold, 0);
    assert!(game.quests.is_empty());
}

#[test]
fn test_completing_nonexistent_id_changes_nothing() {
    let mut game = GameState::new();
    submit(
        &mut game,
        draft("Bystander", Difficulty::Medium, "10", "1"),
        t0(),
    );
    let stats_before = game.stats.clone();

    let result = game.apply(GameEvent::QuestCompleted {
        id: QuestId(4096),
        at: t0(),
    });

    assert_eq!(result, None);
    assert_eq!(game.stats, stats_before);
    assert_eq!(game.quests.len(), 1);
}

#[test]
fn test_level_crosses_boundary_at_100_exp() {
    // Three on-time hard quests put exp at 90 (still level 1); the
    // fourth crosses 100 and bumps the level to 2.
    let mut game = GameState::new();

    for i in 0..3 {
        let id = submit(
            &mut game,
            draft(&format!("Grind {i}"), Difficulty::Hard, "0", "1"),
            t0(),
        );
        game.apply(GameEvent::QuestCompleted { id, at: t0() });
    }
    assert_eq!(game.stats.exp, 90);
    assert_eq!(game.stats.level(), 1);

    let id = submit(
        &mut game,
        draft("The threshold", Difficulty::Hard, "0", "1"),
        t0(),
    );
    game.apply(GameEvent::QuestCompleted { id, at: t0() });

    assert_eq!(game.stats.exp, 120);
    assert_eq!(game.stats.level(), 2);
}

#[test]
fn test_health_never_goes_below_zero() {
    // Eleven overdue quests: ten drain health to 0, the eleventh
    // changes nothing.
    let mut game = GameState::new();

    for i in 0..11 {
        let id = submit(
            &mut game,
            draft(&format!("Doomed {i}"), Difficulty::Easy, "0", "0"),
            t0(),
        );
        let resolution = game
            .apply(GameEvent::QuestCompleted {
                id,
                at: t0() + Duration::hours(1),
            })
            .unwrap();

        if i < 10 {
            assert_eq!(resolution.outcome, Outcome::Late { health_lost: 10 });
        } else {
            assert_eq!(resolution.outcome, Outcome::Late { health_lost: 0 });
        }
    }

    assert_eq!(game.stats.health, 0);
    assert!(game.quests.is_empty());
}

#[test]
fn test_completion_exactly_at_limit_is_on_time() {
    let mut game = GameState::new();
    let id = submit(
        &mut game,
        draft("Down to the wire", Difficulty::Medium, "30", "2"),
        t0(),
    );

    let resolution = game
        .apply(GameEvent::QuestCompleted {
            id,
            at: t0() + Duration::hours(2),
        })
        .unwrap();

    assert_eq!(resolution.outcome, Outcome::OnTime { gold: 30, exp: 20 });
    assert_eq!(game.stats.health, 100);
}

#[test]
fn test_junk_numeric_input_resolves_as_zero_reward() {
    // Malformed gold/limit coerce to 0; completing after any delay is
    // therefore late and grants nothing.
    let mut game = GameState::new();
    let id = submit(
        &mut game,
        draft("Typo'd quest", Difficulty::Easy, "fifty", "an hour"),
        t0(),
    );

    let quest = game.quests.get(id).unwrap();
    assert_eq!(quest.gold, 0);
    assert_eq!(quest.time_limit_hours, 0.0);

    let resolution = game
        .apply(GameEvent::QuestCompleted {
            id,
            at: t0() + Duration::minutes(5),
        })
        .unwrap();
    assert_eq!(resolution.outcome, Outcome::Late { health_lost: 10 });
}

#[test]
fn test_ids_stay_unique_under_rapid_submission() {
    let mut game = GameState::new();
    let at = t0();

    let mut ids = Vec::new();
    for i in 0..100 {
        ids.push(submit(
            &mut game,
            draft(&format!("Burst {i}"), Difficulty::Easy, "1", "1"),
            at,
        ));
    }

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
    assert_eq!(game.quests.len(), 100);
}

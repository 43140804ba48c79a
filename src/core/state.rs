// src/core/state.rs — Game state container and event reducer

use chrono::{DateTime, Utc};

use super::progress::{self, Resolution};
use super::quests::QuestLog;
use super::types::{PlayerStats, QuestDraft, QuestId};

/// A user-triggered state transition. Events carry their own
/// timestamps so the reducer never reads the wall clock.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The new-quest form was submitted.
    QuestSubmitted {
        draft: QuestDraft,
        at: DateTime<Utc>,
    },
    /// A quest was marked complete.
    QuestCompleted { id: QuestId, at: DateTime<Utc> },
}

/// The whole game: active quests plus player progression. Mutated
/// only through `apply`, one event at a time, synchronously.
#[derive(Debug, Default)]
pub struct GameState {
    pub quests: QuestLog,
    pub stats: PlayerStats,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one event through the reducer. Returns the resolution when
    /// the event completed a quest.
    ///
    /// Completing an id that is no longer in the log is a silent
    /// no-op: the UI may hold a stale reference for a quest that was
    /// already resolved.
    pub fn apply(&mut self, event: GameEvent) -> Option<Resolution> {
        match event {
            GameEvent::QuestSubmitted { draft, at } => {
                let id = self.quests.add(draft, at);
                tracing::debug!(quest = %id, "quest added");
                None
            }
            GameEvent::QuestCompleted { id, at } => {
                let quest = self.quests.remove(id)?;
                let outcome = progress::resolve(&quest, &mut self.stats, at);
                tracing::debug!(quest = %id, ?outcome, "quest resolved");
                Some(Resolution {
                    quest_name: quest.name,
                    outcome,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::Outcome;
    use crate::core::types::Difficulty;
    use chrono::{Duration, TimeZone};

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

    #[test]
    fn test_submit_then_complete_on_time() {
        let mut game = GameState::new();

        game.apply(GameEvent::QuestSubmitted {
            draft: draft("Polish armor", Difficulty::Easy, "50", "1"),
            at: t0(),
        });
        assert_eq!(game.quests.len(), 1);

        let id = game.quests.iter().next().unwrap().id;
        let resolution = game
            .apply(GameEvent::QuestCompleted { id, at: t0() })
            .unwrap();

        assert_eq!(resolution.quest_name, "Polish armor");
        assert_eq!(resolution.outcome, Outcome::OnTime { gold: 50, exp: 10 });
        assert!(game.quests.is_empty());
    }

    #[test]
    fn test_late_completion_consumes_quest() {
        let mut game = GameState::new();
        game.apply(GameEvent::QuestSubmitted {
            draft: draft("Night watch", Difficulty::Hard, "100", "1"),
            at: t0(),
        });
        let id = game.quests.iter().next().unwrap().id;

        let resolution = game
            .apply(GameEvent::QuestCompleted {
                id,
                at: t0() + Duration::hours(3),
            })
            .unwrap();

        assert_eq!(resolution.outcome, Outcome::Late { health_lost: 10 });
        // No retry: the id is gone
        assert!(game.quests.is_empty());
        assert!(game
            .apply(GameEvent::QuestCompleted {
                id,
                at: t0() + Duration::hours(3),
            })
            .is_none());
    }

    #[test]
    fn test_stale_id_is_silent_noop() {
        let mut game = GameState::new();
        game.apply(GameEvent::QuestSubmitted {
            draft: draft("Survivor", Difficulty::Medium, "10", "1"),
            at: t0(),
        });

        let before_stats = game.stats.clone();
        let result = game.apply(GameEvent::QuestCompleted {
            id: QuestId(999),
            at: t0(),
        });

        assert!(result.is_none());
        assert_eq!(game.stats, before_stats);
        assert_eq!(game.quests.len(), 1);
    }
}

// src/core/quests.rs — The quest log: ordered store of active quests

use chrono::{DateTime, Utc};

use super::types::{Quest, QuestDraft, QuestId};

/// Ordered store of active quests. Insertion order is display order.
#[derive(Debug, Default)]
pub struct QuestLog {
    quests: Vec<Quest>,
    next_id: u64,
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quest built from a submitted draft and return its id.
    ///
    /// The form layer has already enforced required fields; no
    /// validation happens here. Numeric fields are coerced, with
    /// malformed input silently becoming zero.
    pub fn add(&mut self, draft: QuestDraft, at: DateTime<Utc>) -> QuestId {
        let id = QuestId(self.next_id);
        self.next_id += 1;

        let gold = draft.parsed_gold();
        let time_limit_hours = draft.parsed_time_limit();
        self.quests.push(Quest {
            id,
            name: draft.name,
            difficulty: draft.difficulty,
            gold,
            time_limit_hours,
            created_at: at,
        });
        id
    }

    /// Remove and return the quest with `id`. Silent no-op returning
    /// `None` when the id is absent (stale UI reference).
    pub fn remove(&mut self, id: QuestId) -> Option<Quest> {
        let idx = self.quests.iter().position(|q| q.id == id)?;
        Some(self.quests.remove(idx))
    }

    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

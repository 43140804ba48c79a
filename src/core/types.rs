// src/core/types.rs — Core data types: quests, drafts, player stats

use chrono::{DateTime, Utc};

// ── Identifiers ──────────────────────────────────────────────────

/// Quest identifier, assigned from a monotonic per-log counter.
/// Unique regardless of how quickly quests are submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestId(pub u64);

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ── Difficulty ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Experience granted for an on-time completion. Fixed and total
    /// over the enum.
    pub fn exp_reward(&self) -> u64 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Next difficulty in selector order, wrapping around.
    pub fn next(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// Previous difficulty in selector order, wrapping around.
    pub fn prev(&self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Quest ────────────────────────────────────────────────────────

/// An active quest. Immutable once created; resolving it removes it
/// from the log rather than marking it done, so presence in the log
/// IS the active state.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: QuestId,
    pub name: String,
    pub difficulty: Difficulty,
    pub gold: u64,
    /// Hours allowed before the completion counts as late.
    pub time_limit_hours: f64,
    pub created_at: DateTime<Utc>,
}

// ── Draft form state ─────────────────────────────────────────────

/// In-progress form values for a new quest. Numeric fields stay raw
/// text until submission; `QuestLog::add` does the coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestDraft {
    pub name: String,
    pub difficulty: Difficulty,
    pub gold: String,
    pub time_limit: String,
}

impl QuestDraft {
    /// Required-field check done by the form layer. Difficulty always
    /// has a value (selector), so only the text fields matter.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.gold.trim().is_empty()
            && !self.time_limit.trim().is_empty()
    }

    /// Gold reward, coerced. Malformed input becomes 0, not an error.
    pub fn parsed_gold(&self) -> u64 {
        self.gold.trim().parse().unwrap_or(0)
    }

    /// Time limit in hours, coerced. Malformed input becomes 0.
    pub fn parsed_time_limit(&self) -> f64 {
        self.time_limit.trim().parse().unwrap_or(0.0)
    }
}

// ── Player stats ─────────────────────────────────────────────────

pub const MAX_HEALTH: u32 = 100;
pub const EXP_PER_LEVEL: u64 = 100;

/// Player progression accumulators. Lives for the whole session and
/// is mutated only by the resolution rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    /// Hit points in [0, MAX_HEALTH].
    pub health: u32,
    pub gold: u64,
    pub exp: u64,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            gold: 0,
            exp: 0,
        }
    }
}

impl PlayerStats {
    /// Current level, derived from exp. Never stored, so it cannot
    /// drift out of sync with the accumulator.
    pub fn level(&self) -> u32 {
        (self.exp / EXP_PER_LEVEL) as u32 + 1
    }
}

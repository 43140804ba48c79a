// src/core/progress.rs — Player progression: reward and penalty rules

use chrono::{DateTime, Utc};

use super::types::{PlayerStats, Quest};

/// Health lost when a quest is completed past its time limit.
pub const LATE_HEALTH_PENALTY: u32 = 10;

/// What resolving a quest did to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Completed within the time limit: rewards granted, health
    /// untouched.
    OnTime { gold: u64, exp: u64 },
    /// Completed late: health lost, no rewards. `health_lost` is the
    /// actual amount (less than the penalty when clamped at zero).
    Late { health_lost: u32 },
}

/// A resolved quest, for display by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub quest_name: String,
    pub outcome: Outcome,
}

/// Fractional hours elapsed between two instants.
pub fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Apply the completion rule for `quest` to `stats`.
///
/// The time limit is evaluated only here, at the moment of manual
/// completion; nothing expires in the background. The caller removes
/// the quest from the log in both branches.
pub fn resolve(quest: &Quest, stats: &mut PlayerStats, now: DateTime<Utc>) -> Outcome {
    let time_taken = elapsed_hours(quest.created_at, now);

    if time_taken <= quest.time_limit_hours {
        let exp = quest.difficulty.exp_reward();
        stats.gold += quest.gold;
        stats.exp += exp;
        Outcome::OnTime {
            gold: quest.gold,
            exp,
        }
    } else {
        let health_lost = stats.health.min(LATE_HEALTH_PENALTY);
        stats.health -= health_lost;
        Outcome::Late { health_lost }
    }
}

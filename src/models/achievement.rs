use serde::{Deserialize, Serialize};

use super::user::UserStats;

/// Unlock criteria, one variant per criteria type so evaluation is an
/// exhaustive match instead of stringly-typed field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criteria {
    /// Current consecutive-day streak reached `threshold`.
    Streak { threshold: u32 },
    /// Lifetime completed-record count reached `threshold`.
    TotalCompletions { threshold: u32 },
}

impl Criteria {
    pub fn is_met(&self, stats: &UserStats) -> bool {
        match self {
            Criteria::Streak { threshold } => stats.current_streak >= *threshold,
            Criteria::TotalCompletions { threshold } => stats.total_completions >= *threshold,
        }
    }

    pub fn threshold(&self) -> u32 {
        match self {
            Criteria::Streak { threshold } | Criteria::TotalCompletions { threshold } => *threshold,
        }
    }
}

/// A catalog entry. Unlocking is a one-way transition per (user, achievement)
/// pair; once persisted as unlocked it is never re-evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementDefinition {
    pub id: String,
    pub name: String,
    /// Catalog ordering key: evaluation output is sorted by tier ascending,
    /// then xp_reward ascending.
    pub tier: u32,
    pub criteria: Criteria,
    pub xp_reward: u64,
}

/// An achievement that newly qualified in an evaluation pass. The caller
/// persists the unlock and credits the reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub id: String,
    pub xp_reward: u64,
}

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::achievement::UnlockedAchievement;
use super::rank::RankStatus;
use super::record::HabitLog;

/// Per-user aggregate counters. XP is clamped to >= 0 by whoever applies
/// deltas; the calculator only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub xp: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
}

impl UserStats {
    /// Record a freshly computed streak. `longest_streak` is the running
    /// maximum ever observed and never decreases.
    pub fn observe_streak(&mut self, current: u32) {
        self.current_streak = current;
        self.longest_streak = self.longest_streak.max(current);
    }
}

/// Everything the engine needs for one evaluation pass: current aggregates,
/// per-habit completion histories, and the ids already unlocked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub user_id: String,
    pub stats: UserStats,
    pub habits: Vec<HabitLog>,
    #[serde(default)]
    pub unlocked_achievements: HashSet<String>,
}

impl UserSnapshot {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            stats: UserStats::default(),
            habits: Vec::new(),
            unlocked_achievements: HashSet::new(),
        }
    }
}

/// Position within the current level, derived from cumulative XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    /// XP floor of the current level.
    pub current_level_xp: u64,
    /// XP required to reach the next level.
    pub next_level_xp: u64,
    pub xp_in_level: u64,
    pub xp_for_next_level: u64,
    /// Rounded percent through the current level, 0..=100.
    pub progress_percent: u32,
}

/// Output of a full engine pass. Plain values only; the caller persists the
/// XP delta and the unlock records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationReport {
    pub user_id: String,
    pub stats: UserStats,
    pub level: LevelProgress,
    pub rank: RankStatus,
    pub newly_unlocked: Vec<UnlockedAchievement>,
    /// Sum of rewards for `newly_unlocked`, not yet applied to `stats.xp`.
    pub xp_awarded: u64,
    pub calculated_at: DateTime<Utc>,
}

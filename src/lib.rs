pub mod config;
pub mod models;
pub mod scoring;

pub use config::Settings;
pub use models::{
    AchievementDefinition, CompletionRecord, Criteria, EngineError, GamificationReport,
    HabitDifficulty, HabitLog, LevelProgress, NextRank, RankStatus, RankThreshold, Result,
    UnlockedAchievement, UserSnapshot, UserStats,
};
pub use scoring::HabitEngine;

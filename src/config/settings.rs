use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{AchievementDefinition, Criteria, RankThreshold};
use crate::scoring::{rank, DEFAULT_BASE_XP, DEFAULT_LOOKBACK_DAYS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub gamification: GamificationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

/// Tunable parameters of the calculator: reward scaling, streak lookback,
/// the rank ladder, and the achievement catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationSettings {
    pub base_xp: f64,
    pub lookback_days: u32,
    pub ranks: Vec<RankThreshold>,
    pub achievements: Vec<AchievementDefinition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Habit Engine".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            gamification: GamificationSettings {
                base_xp: DEFAULT_BASE_XP,
                lookback_days: DEFAULT_LOOKBACK_DAYS,
                ranks: default_ranks(),
                achievements: default_achievements(),
            },
        }
    }
}

fn default_ranks() -> Vec<RankThreshold> {
    vec![
        RankThreshold::new("novice", "Novice", 0),
        RankThreshold::new("apprentice", "Apprentice", 100),
        RankThreshold::new("adept", "Adept", 500),
        RankThreshold::new("expert", "Expert", 1_500),
        RankThreshold::new("master", "Master", 4_000),
        RankThreshold::new("grandmaster", "Grandmaster", 10_000),
        RankThreshold::new("legend", "Legend", 25_000),
    ]
}

fn default_achievements() -> Vec<AchievementDefinition> {
    fn def(id: &str, name: &str, tier: u32, criteria: Criteria, xp_reward: u64) -> AchievementDefinition {
        AchievementDefinition {
            id: id.to_string(),
            name: name.to_string(),
            tier,
            criteria,
            xp_reward,
        }
    }

    vec![
        def("first_step", "First Step", 1, Criteria::TotalCompletions { threshold: 1 }, 25),
        def("streak_3", "On a Roll", 1, Criteria::Streak { threshold: 3 }, 50),
        def("streak_7", "Week Warrior", 2, Criteria::Streak { threshold: 7 }, 100),
        def("completions_25", "Habit Builder", 2, Criteria::TotalCompletions { threshold: 25 }, 100),
        def("streak_30", "Iron Will", 3, Criteria::Streak { threshold: 30 }, 500),
        def("completions_100", "Centurion", 3, Criteria::TotalCompletions { threshold: 100 }, 500),
        def("streak_100", "Unstoppable", 4, Criteria::Streak { threshold: 100 }, 1_000),
        def("completions_500", "Relentless", 4, Criteria::TotalCompletions { threshold: 500 }, 1_000),
    ]
}

impl Settings {
    /// Layered load: typed defaults, then optional config files, then
    /// `HABIT_ENGINE_*` environment overrides.
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("HABIT_ENGINE"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        let g = &self.gamification;

        if g.base_xp <= 0.0 {
            return Err(format!("base_xp must be positive, got {}", g.base_xp));
        }
        if g.lookback_days == 0 {
            return Err("lookback_days must be at least 1".to_string());
        }

        rank::validate_table(&g.ranks).map_err(|e| e.to_string())?;

        let mut seen = std::collections::HashSet::new();
        for a in &g.achievements {
            if !seen.insert(a.id.as_str()) {
                return Err(format!("duplicate achievement id: {}", a.id));
            }
            if a.criteria.threshold() == 0 {
                return Err(format!("achievement {} has a zero threshold", a.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn duplicate_achievement_ids_rejected() {
        let mut settings = Settings::default();
        let dup = settings.gamification.achievements[0].clone();
        settings.gamification.achievements.push(dup);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn unsorted_rank_table_rejected() {
        let mut settings = Settings::default();
        settings.gamification.ranks.swap(1, 2);
        assert!(settings.validate().is_err());
    }
}

use chrono::{NaiveDate, Utc};

use crate::config::Settings;
use crate::models::{EngineError, GamificationReport, Result, UserSnapshot};
use crate::scoring::achievements::evaluate_achievements;
use crate::scoring::level::level_progress;
use crate::scoring::rank::rank_status;
use crate::scoring::streak::compute_user_streak;

/// Runs the full evaluation sequence over one user snapshot:
/// streak, then level and rank, then achievement unlocks.
///
/// The engine holds only the settings snapshot (rank ladder, catalog,
/// reward parameters). It performs no I/O and never mutates the caller's
/// state; the report it returns is the caller's to persist.
pub struct HabitEngine {
    settings: Settings,
}

impl HabitEngine {
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().map_err(EngineError::ConfigError)?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// One evaluation pass as of `today`.
    ///
    /// `total_completions` is recomputed from the submitted histories so
    /// the backend walk stays the single source of truth; any counter the
    /// client mirrored optimistically is ignored.
    pub fn evaluate(&self, snapshot: &UserSnapshot, today: NaiveDate) -> Result<GamificationReport> {
        let g = &self.settings.gamification;

        let current_streak = compute_user_streak(&snapshot.habits, today, g.lookback_days);

        let mut stats = snapshot.stats.clone();
        stats.total_completions = snapshot
            .habits
            .iter()
            .map(|h| h.completed_count())
            .sum();
        stats.observe_streak(current_streak);

        let level = level_progress(stats.xp as i64)?;
        let rank = rank_status(stats.xp, &g.ranks)?;

        let newly_unlocked =
            evaluate_achievements(&g.achievements, &snapshot.unlocked_achievements, &stats);
        let xp_awarded = newly_unlocked.iter().map(|a| a.xp_reward).sum();

        Ok(GamificationReport {
            user_id: snapshot.user_id.clone(),
            stats,
            level,
            rank,
            newly_unlocked,
            xp_awarded,
            calculated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompletionRecord, HabitDifficulty, HabitLog};
    use chrono::Duration;

    fn snapshot_with_run(days_back: &[i64], today: NaiveDate) -> UserSnapshot {
        let mut habit = HabitLog::new("run", HabitDifficulty::default());
        habit.records = days_back
            .iter()
            .map(|d| CompletionRecord::completed_on(today - Duration::days(*d)))
            .collect();

        let mut snapshot = UserSnapshot::new("user-1");
        snapshot.habits.push(habit);
        snapshot
    }

    #[test]
    fn evaluate_runs_the_full_sequence() {
        let today: NaiveDate = "2026-03-10".parse().unwrap();
        let mut snapshot = snapshot_with_run(&[0, 1, 2], today);
        snapshot.stats.xp = 120;

        let engine = HabitEngine::new(Settings::default()).unwrap();
        let report = engine.evaluate(&snapshot, today).unwrap();

        assert_eq!(report.stats.current_streak, 3);
        assert_eq!(report.stats.longest_streak, 3);
        assert_eq!(report.stats.total_completions, 3);
        assert_eq!(report.level.level, 2);
        assert_eq!(report.rank.current.id, "apprentice");

        // first_step (total >= 1) and streak_3 qualify on this pass.
        let ids: Vec<&str> = report.newly_unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first_step", "streak_3"]);
        assert_eq!(report.xp_awarded, 75);
    }

    #[test]
    fn longest_streak_never_decreases() {
        let today: NaiveDate = "2026-03-10".parse().unwrap();
        let mut snapshot = snapshot_with_run(&[5], today);
        snapshot.stats.longest_streak = 9;

        let engine = HabitEngine::new(Settings::default()).unwrap();
        let report = engine.evaluate(&snapshot, today).unwrap();

        assert_eq!(report.stats.current_streak, 0);
        assert_eq!(report.stats.longest_streak, 9);
    }

    #[test]
    fn invalid_settings_rejected_at_construction() {
        let mut settings = Settings::default();
        settings.gamification.ranks.clear();
        assert!(matches!(
            HabitEngine::new(settings),
            Err(EngineError::ConfigError(_))
        ));
    }
}

use std::collections::HashSet;

use crate::models::{AchievementDefinition, UnlockedAchievement, UserStats};

/// Evaluate the catalog against the user's current aggregates and return
/// every achievement that newly qualifies.
///
/// Already-unlocked ids are skipped, never re-evaluated; once the caller
/// persists this pass's unlocks and feeds the ids back in, a second pass
/// with the same stats returns nothing. Output order is tier ascending,
/// then xp_reward ascending, so results are reproducible.
pub fn evaluate_achievements(
    catalog: &[AchievementDefinition],
    unlocked_ids: &HashSet<String>,
    stats: &UserStats,
) -> Vec<UnlockedAchievement> {
    let mut newly: Vec<&AchievementDefinition> = catalog
        .iter()
        .filter(|a| !unlocked_ids.contains(&a.id))
        .filter(|a| a.criteria.is_met(stats))
        .collect();

    newly.sort_by_key(|a| (a.tier, a.xp_reward));

    newly
        .into_iter()
        .map(|a| UnlockedAchievement {
            id: a.id.clone(),
            xp_reward: a.xp_reward,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Criteria;

    fn catalog() -> Vec<AchievementDefinition> {
        vec![
            AchievementDefinition {
                id: "streak_7".to_string(),
                name: "Week Warrior".to_string(),
                tier: 2,
                criteria: Criteria::Streak { threshold: 7 },
                xp_reward: 100,
            },
            AchievementDefinition {
                id: "first_step".to_string(),
                name: "First Step".to_string(),
                tier: 1,
                criteria: Criteria::TotalCompletions { threshold: 1 },
                xp_reward: 25,
            },
            AchievementDefinition {
                id: "streak_3".to_string(),
                name: "On a Roll".to_string(),
                tier: 1,
                criteria: Criteria::Streak { threshold: 3 },
                xp_reward: 50,
            },
        ]
    }

    #[test]
    fn thresholds_compare_with_gte() {
        let stats = UserStats {
            current_streak: 3,
            total_completions: 1,
            ..Default::default()
        };
        let unlocked = evaluate_achievements(&catalog(), &HashSet::new(), &stats);
        let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first_step", "streak_3"]);
    }

    #[test]
    fn output_ordered_by_tier_then_reward() {
        let stats = UserStats {
            current_streak: 10,
            total_completions: 50,
            ..Default::default()
        };
        let unlocked = evaluate_achievements(&catalog(), &HashSet::new(), &stats);
        let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first_step", "streak_3", "streak_7"]);
    }

    #[test]
    fn second_pass_is_empty() {
        let stats = UserStats {
            current_streak: 10,
            total_completions: 50,
            ..Default::default()
        };
        let first = evaluate_achievements(&catalog(), &HashSet::new(), &stats);
        assert!(!first.is_empty());

        let unlocked_ids: HashSet<String> = first.into_iter().map(|a| a.id).collect();
        let second = evaluate_achievements(&catalog(), &unlocked_ids, &stats);
        assert!(second.is_empty());
    }

    #[test]
    fn below_threshold_unlocks_nothing() {
        let stats = UserStats::default();
        assert!(evaluate_achievements(&catalog(), &HashSet::new(), &stats).is_empty());
    }
}

use crate::models::{HabitDifficulty, Result};

/// Base XP for a baseline (difficulty 3) completion.
pub const DEFAULT_BASE_XP: f64 = 10.0;

/// XP awarded for completing a habit of the given difficulty: the base
/// scaled by the difficulty multiplier, rounded to the nearest multiple
/// of 10.
pub fn xp_reward(difficulty: HabitDifficulty, base_xp: f64) -> u64 {
    let raw = base_xp * difficulty.multiplier();
    ((raw / 10.0).round() * 10.0) as u64
}

/// Same as [`xp_reward`] for a raw difficulty rating, rejecting values
/// outside 1..=5.
pub fn xp_reward_for(difficulty: u8, base_xp: f64) -> Result<u64> {
    Ok(xp_reward(HabitDifficulty::new(difficulty)?, base_xp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EngineError;

    #[test]
    fn baseline_difficulty_is_base_xp() {
        assert_eq!(xp_reward_for(3, DEFAULT_BASE_XP).unwrap(), 10);
    }

    #[test]
    fn rewards_follow_multiplier_table() {
        // round(10 * m / 10) * 10 for m in {0.5, 0.75, 1.0, 1.5, 2.0}.
        assert_eq!(xp_reward_for(1, DEFAULT_BASE_XP).unwrap(), 10);
        assert_eq!(xp_reward_for(2, DEFAULT_BASE_XP).unwrap(), 10);
        assert_eq!(xp_reward_for(3, DEFAULT_BASE_XP).unwrap(), 10);
        assert_eq!(xp_reward_for(4, DEFAULT_BASE_XP).unwrap(), 20);
        assert_eq!(xp_reward_for(5, DEFAULT_BASE_XP).unwrap(), 20);
    }

    #[test]
    fn larger_base_spreads_the_tiers() {
        assert_eq!(xp_reward_for(1, 100.0).unwrap(), 50);
        assert_eq!(xp_reward_for(2, 100.0).unwrap(), 80);
        assert_eq!(xp_reward_for(5, 100.0).unwrap(), 200);
    }

    #[test]
    fn out_of_range_difficulty_rejected() {
        assert!(matches!(
            xp_reward_for(0, DEFAULT_BASE_XP),
            Err(EngineError::InvalidDifficulty(0))
        ));
        assert!(matches!(
            xp_reward_for(6, DEFAULT_BASE_XP),
            Err(EngineError::InvalidDifficulty(6))
        ));
    }
}

pub mod achievements;
pub mod engine;
pub mod level;
pub mod rank;
pub mod reward;
pub mod streak;

pub use achievements::evaluate_achievements;
pub use engine::HabitEngine;
pub use level::{level_for_xp, level_progress};
pub use rank::{next_rank_for, rank_for, rank_status};
pub use reward::{xp_reward, xp_reward_for, DEFAULT_BASE_XP};
pub use streak::{compute_streak, compute_user_streak, DEFAULT_LOOKBACK_DAYS};

use crate::models::{EngineError, LevelProgress, Result};

/// Map cumulative XP to a level number: `floor(sqrt(xp / 50)) + 1`.
///
/// Level 1 spans 0..50 XP, level 2 spans 50..200, level N starts at
/// `50 * (N-1)^2`. Negative XP is a caller bug and is rejected.
pub fn level_for_xp(xp: i64) -> Result<u32> {
    let xp = non_negative(xp)?;
    Ok(isqrt(xp / 50) as u32 + 1)
}

/// Full position within the current level.
pub fn level_progress(xp: i64) -> Result<LevelProgress> {
    let level = level_for_xp(xp)?;
    let xp = xp as u64;

    let current_level_xp = 50 * (level as u64 - 1).pow(2);
    let next_level_xp = 50 * (level as u64).pow(2);
    let xp_in_level = xp - current_level_xp;
    let xp_for_next_level = next_level_xp - current_level_xp;

    let progress_percent =
        ((100.0 * xp_in_level as f64 / xp_for_next_level as f64).round() as u32).min(100);

    Ok(LevelProgress {
        level,
        current_level_xp,
        next_level_xp,
        xp_in_level,
        xp_for_next_level,
        progress_percent,
    })
}

fn non_negative(xp: i64) -> Result<u64> {
    if xp < 0 {
        return Err(EngineError::NegativeXp(xp));
    }
    Ok(xp as u64)
}

// Exact integer square root; f64 sqrt can land a hair off at perfect squares,
// which would shift level boundaries.
fn isqrt(n: u64) -> u64 {
    let mut x = (n as f64).sqrt() as u64;
    while x.saturating_mul(x) > n {
        x -= 1;
    }
    while (x + 1).saturating_mul(x + 1) <= n {
        x += 1;
    }
    x
}

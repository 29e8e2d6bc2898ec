use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::{CompletionRecord, HabitLog};

/// Default bounded lookback window, in days. Histories older than this do
/// not extend a streak.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;

/// Walk backward from `today` over a set of qualifying days and count the
/// consecutive run.
///
/// Today itself may be missing without breaking the chain (the user still
/// has the rest of the day to act): when `today` is not in the set the walk
/// starts at yesterday instead. That tolerance applies exactly once, at the
/// start of the walk; any later gap terminates it.
///
/// Both the per-habit and the user-aggregate streaks are this one walk over
/// different day sets.
pub fn streak_from_days(days: &BTreeSet<NaiveDate>, today: NaiveDate, lookback_days: u32) -> u32 {
    let mut cursor = today;
    if !days.contains(&cursor) {
        cursor = cursor - Duration::days(1);
    }

    let mut streak = 0;
    while streak < lookback_days && days.contains(&cursor) {
        streak += 1;
        cursor = cursor - Duration::days(1);
    }
    streak
}

/// Collapse completion records into the set of days that count: completed
/// only, within the lookback window, nothing dated after `today`. Duplicate
/// records for a day collapse into one entry.
pub fn completed_days(
    records: &[CompletionRecord],
    today: NaiveDate,
    lookback_days: u32,
) -> BTreeSet<NaiveDate> {
    let horizon = today - Duration::days(lookback_days as i64);
    records
        .iter()
        .filter(|r| r.completed && r.date > horizon && r.date <= today)
        .map(|r| r.date)
        .collect()
}

/// Current consecutive-day streak for a single habit.
pub fn compute_streak(records: &[CompletionRecord], today: NaiveDate, lookback_days: u32) -> u32 {
    let days = completed_days(records, today, lookback_days);
    streak_from_days(&days, today, lookback_days)
}

/// User-level aggregate streak: a day qualifies when any active
/// (non-archived) habit has a completed record on it.
pub fn compute_user_streak(habits: &[HabitLog], today: NaiveDate, lookback_days: u32) -> u32 {
    let mut days = BTreeSet::new();
    for habit in habits.iter().filter(|h| !h.archived) {
        days.extend(completed_days(&habit.records, today, lookback_days));
    }
    streak_from_days(&days, today, lookback_days)
}

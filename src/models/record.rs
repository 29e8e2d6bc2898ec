use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Evidence that a habit was performed on a given calendar day.
///
/// The persistence layer guarantees at most one record per (habit, day);
/// the calculator still dedups defensively by collapsing records into a
/// day set before walking them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl CompletionRecord {
    pub fn completed_on(date: NaiveDate) -> Self {
        Self {
            date,
            completed: true,
            value: None,
        }
    }
}

/// Difficulty rating of a habit, validated into 1..=5 at construction.
///
/// Out-of-range values are rejected rather than silently falling back to
/// a default multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HabitDifficulty(u8);

impl HabitDifficulty {
    pub fn new(raw: u8) -> Result<Self, EngineError> {
        if (1..=5).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(EngineError::InvalidDifficulty(raw))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// XP multiplier for this difficulty tier.
    pub fn multiplier(self) -> f64 {
        match self.0 {
            1 => 0.5,
            2 => 0.75,
            3 => 1.0,
            4 => 1.5,
            _ => 2.0,
        }
    }
}

impl Default for HabitDifficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for HabitDifficulty {
    type Error = EngineError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<HabitDifficulty> for u8 {
    fn from(d: HabitDifficulty) -> u8 {
        d.0
    }
}

/// Read-only snapshot of one habit's completion history, as handed to the
/// calculator by the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitLog {
    pub habit_id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub difficulty: HabitDifficulty,
    pub records: Vec<CompletionRecord>,
}

impl HabitLog {
    pub fn new(habit_id: impl Into<String>, difficulty: HabitDifficulty) -> Self {
        Self {
            habit_id: habit_id.into(),
            archived: false,
            difficulty,
            records: Vec::new(),
        }
    }

    pub fn completed_count(&self) -> u32 {
        self.records.iter().filter(|r| r.completed).count() as u32
    }
}

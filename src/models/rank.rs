use serde::{Deserialize, Serialize};

/// One tier in the rank ladder. Tables are ordered strictly increasing in
/// `min_xp`, with the first entry at `min_xp = 0` so every XP value maps to
/// a rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankThreshold {
    pub id: String,
    pub name: String,
    pub min_xp: u64,
}

impl RankThreshold {
    pub fn new(id: impl Into<String>, name: impl Into<String>, min_xp: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_xp,
        }
    }
}

/// The rank immediately above the current one, with how far away it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextRank {
    pub rank: RankThreshold,
    /// XP still needed to reach `rank`.
    pub xp_required: u64,
    /// Percent of the span between the current and next threshold already
    /// covered, rounded to the nearest integer.
    pub progress: u32,
}

/// Resolved rank position: the current tier plus the next one, or `None`
/// at max rank (a terminal state, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankStatus {
    pub current: RankThreshold,
    pub next: Option<NextRank>,
}

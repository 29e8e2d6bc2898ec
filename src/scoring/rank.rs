use crate::models::{EngineError, NextRank, RankStatus, RankThreshold, Result};

/// Check the structural invariants of a rank ladder: non-empty, first entry
/// at `min_xp = 0`, thresholds strictly increasing.
pub fn validate_table(table: &[RankThreshold]) -> Result<()> {
    if table.is_empty() {
        return Err(EngineError::InvalidRankTable("table is empty".to_string()));
    }
    if table[0].min_xp != 0 {
        return Err(EngineError::InvalidRankTable(format!(
            "first rank '{}' must start at 0 XP, got {}",
            table[0].id, table[0].min_xp
        )));
    }
    for pair in table.windows(2) {
        if pair[1].min_xp <= pair[0].min_xp {
            return Err(EngineError::InvalidRankTable(format!(
                "thresholds must be strictly increasing: '{}' ({}) after '{}' ({})",
                pair[1].id, pair[1].min_xp, pair[0].id, pair[0].min_xp
            )));
        }
    }
    Ok(())
}

/// The highest rank whose threshold is satisfied. Exact equality to a
/// threshold belongs to the higher rank.
pub fn rank_for<'a>(xp: u64, table: &'a [RankThreshold]) -> Result<&'a RankThreshold> {
    validate_table(table)?;
    Ok(&table[current_index(xp, table)])
}

/// The rank immediately above the current one, or `None` at max rank.
pub fn next_rank_for(xp: u64, table: &[RankThreshold]) -> Result<Option<NextRank>> {
    validate_table(table)?;
    let idx = current_index(xp, table);
    Ok(next_from(xp, table, idx))
}

/// Current and next rank resolved in one pass.
pub fn rank_status(xp: u64, table: &[RankThreshold]) -> Result<RankStatus> {
    validate_table(table)?;
    let idx = current_index(xp, table);
    Ok(RankStatus {
        current: table[idx].clone(),
        next: next_from(xp, table, idx),
    })
}

fn current_index(xp: u64, table: &[RankThreshold]) -> usize {
    table
        .iter()
        .rposition(|t| t.min_xp <= xp)
        .unwrap_or(0)
}

fn next_from(xp: u64, table: &[RankThreshold], idx: usize) -> Option<NextRank> {
    let current = &table[idx];
    table.get(idx + 1).map(|next| {
        let span = next.min_xp - current.min_xp;
        let covered = xp - current.min_xp;
        NextRank {
            rank: next.clone(),
            xp_required: next.min_xp - xp,
            progress: ((100.0 * covered as f64 / span as f64).round() as u32).min(100),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder() -> Vec<RankThreshold> {
        vec![
            RankThreshold::new("novice", "Novice", 0),
            RankThreshold::new("adept", "Adept", 100),
            RankThreshold::new("master", "Master", 1000),
        ]
    }

    #[test]
    fn zero_xp_is_lowest_rank() {
        let table = ladder();
        assert_eq!(rank_for(0, &table).unwrap().id, "novice");
    }

    #[test]
    fn equality_belongs_to_higher_rank() {
        let table = ladder();
        assert_eq!(rank_for(99, &table).unwrap().id, "novice");
        assert_eq!(rank_for(100, &table).unwrap().id, "adept");
    }

    #[test]
    fn max_rank_has_no_next() {
        let table = ladder();
        assert!(next_rank_for(1000, &table).unwrap().is_none());
        assert!(next_rank_for(50_000, &table).unwrap().is_none());
    }

    #[test]
    fn next_rank_delta() {
        let table = ladder();
        let next = next_rank_for(40, &table).unwrap().unwrap();
        assert_eq!(next.rank.id, "adept");
        assert_eq!(next.xp_required, 60);
        assert_eq!(next.progress, 40);
    }

    #[test]
    fn bad_tables_rejected() {
        assert!(validate_table(&[]).is_err());
        assert!(validate_table(&[RankThreshold::new("a", "A", 10)]).is_err());
        assert!(validate_table(&[
            RankThreshold::new("a", "A", 0),
            RankThreshold::new("b", "B", 50),
            RankThreshold::new("c", "C", 50),
        ])
        .is_err());
    }
}

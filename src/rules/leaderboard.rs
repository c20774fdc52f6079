use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed performance row, reduced to what ranking needs.
#[derive(Debug, Clone)]
pub struct ScoredPerformance {
    pub application_id: Uuid,
    pub points: i32,
}

/// A rankable participant: an approved, non-eliminated application.
#[derive(Debug, Clone)]
pub struct Participant {
    pub application_id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
}

/// A ranked leaderboard row. Deserialize is needed to read it back from the
/// Redis cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub application_id: Uuid,
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub total_points: i64,
    pub stages_completed: u32,
}

/// Aggregate completed performances per participant and rank by total points.
///
/// Participants with no completed performances still appear with zero points.
/// The sort is stable: equal totals keep the order `participants` arrived in,
/// which is deliberately implementation-defined (no product-level tiebreak
/// exists yet).
pub fn rank(
    participants: &[Participant],
    performances: &[ScoredPerformance],
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = participants
        .iter()
        .map(|p| {
            let mut total_points: i64 = 0;
            let mut stages_completed: u32 = 0;
            for perf in performances {
                if perf.application_id == p.application_id {
                    total_points += i64::from(perf.points);
                    stages_completed += 1;
                }
            }
            LeaderboardEntry {
                rank: 0,
                application_id: p.application_id,
                user_id: p.user_id,
                display_name: p.display_name.clone(),
                total_points,
                stages_completed,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = (i + 1) as u32;
    }

    entries
}

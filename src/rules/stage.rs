use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::stages::{self, StageStatus};

/// Violations of the stage sequencing rules. Every variant renders as the
/// user-facing validation message shown to the admin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageRuleError {
    #[error("End date must be after start date")]
    EndBeforeStart,
    #[error("Stage {0} already exists for this season")]
    DuplicateOrder(i32),
    #[error("Stage {0} must be created first")]
    PreviousStageMissing(i32),
    #[error("Stage {0} must be completed before creating this stage")]
    PreviousStageNotCompleted(i32),
    #[error("Stage must start after {}", .0.format("%-m/%-d/%Y"))]
    StartsBeforePreviousEnd(NaiveDate),
    #[error("Stage dates overlap with \"{0}\"")]
    DateOverlap(String),
    #[error("Final stage must have exactly one winner")]
    FinalStageWinnerCount,
    #[error("This season already has a final stage")]
    DuplicateFinalStage,
    #[error("Only the last stage in a season can be deleted")]
    NotLastStage,
}

/// The fields of a stage that the sequencing rules look at.
#[derive(Debug, Clone)]
pub struct StageCandidate {
    pub stage_order: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_final: bool,
    pub max_winners: Option<i32>,
}

/// Snapshot of an existing stage in the same season.
#[derive(Debug, Clone)]
pub struct StageSnapshot {
    pub id: Uuid,
    pub name: String,
    pub stage_order: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: StageStatus,
    pub is_final: bool,
}

impl From<&stages::Model> for StageSnapshot {
    fn from(m: &stages::Model) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            stage_order: m.stage_order,
            start_date: m.start_date,
            end_date: m.end_date,
            status: m.status,
            is_final: m.is_final,
        }
    }
}

/// Validate a candidate stage against the season's existing stages.
///
/// `editing` names the stage being updated, if any; that stage is excluded
/// from every comparison so an edit is judged against its siblings only.
/// Checks run in a fixed order and the first violation wins.
pub fn validate_stage(
    existing: &[StageSnapshot],
    candidate: &StageCandidate,
    editing: Option<Uuid>,
) -> Result<(), StageRuleError> {
    let others: Vec<&StageSnapshot> = existing
        .iter()
        .filter(|s| editing != Some(s.id))
        .collect();

    if candidate.start_date >= candidate.end_date {
        return Err(StageRuleError::EndBeforeStart);
    }

    if others.iter().any(|s| s.stage_order == candidate.stage_order) {
        return Err(StageRuleError::DuplicateOrder(candidate.stage_order));
    }

    if candidate.stage_order > 1 {
        let prev_order = candidate.stage_order - 1;
        let previous = others
            .iter()
            .find(|s| s.stage_order == prev_order)
            .ok_or(StageRuleError::PreviousStageMissing(prev_order))?;

        if previous.status != StageStatus::Completed {
            return Err(StageRuleError::PreviousStageNotCompleted(prev_order));
        }
        if candidate.start_date <= previous.end_date {
            return Err(StageRuleError::StartsBeforePreviousEnd(previous.end_date));
        }
    }

    // Inclusive range overlap against every other stage of the season.
    if let Some(clash) = others
        .iter()
        .find(|s| candidate.start_date <= s.end_date && s.start_date <= candidate.end_date)
    {
        return Err(StageRuleError::DateOverlap(clash.name.clone()));
    }

    if candidate.is_final {
        if candidate.max_winners != Some(1) {
            return Err(StageRuleError::FinalStageWinnerCount);
        }
        if others.iter().any(|s| s.is_final) {
            return Err(StageRuleError::DuplicateFinalStage);
        }
    }

    Ok(())
}

/// A stage may be removed only when no stage in the same season has a
/// strictly greater order value. Performance rows cascade at the FK level.
pub fn validate_stage_deletion(
    existing: &[StageSnapshot],
    stage_id: Uuid,
) -> Result<(), StageRuleError> {
    let Some(target) = existing.iter().find(|s| s.id == stage_id) else {
        // Nothing to check; the caller handles the 404.
        return Ok(());
    };

    if existing.iter().any(|s| s.stage_order > target.stage_order) {
        return Err(StageRuleError::NotLastStage);
    }

    Ok(())
}

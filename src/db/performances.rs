use sea_orm::*;
use uuid::Uuid;

use crate::models::performances::{self, CompletionStatus, RecordPerformance};

/// Record a participant's scored run through a stage.
pub async fn insert_performance(
    db: &DatabaseConnection,
    stage_id: Uuid,
    input: RecordPerformance,
) -> Result<performances::Model, DbErr> {
    let new_performance = performances::ActiveModel {
        id: Set(Uuid::new_v4()),
        application_id: Set(input.application_id),
        stage_id: Set(stage_id),
        points: Set(input.points),
        time_seconds: Set(input.time_seconds),
        position: Set(input.position),
        status: Set(CompletionStatus::Completed),
        created_at: Set(chrono::Utc::now()),
    };

    new_performance.insert(db).await
}

/// One performance per participant per stage.
pub async fn exists_for_application_and_stage(
    db: &DatabaseConnection,
    application_id: Uuid,
    stage_id: Uuid,
) -> Result<bool, DbErr> {
    let count = performances::Entity::find()
        .filter(performances::Column::ApplicationId.eq(application_id))
        .filter(performances::Column::StageId.eq(stage_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// All performances recorded for a stage, best points first.
pub async fn get_by_stage(
    db: &DatabaseConnection,
    stage_id: Uuid,
) -> Result<Vec<performances::Model>, DbErr> {
    performances::Entity::find()
        .filter(performances::Column::StageId.eq(stage_id))
        .order_by_desc(performances::Column::Points)
        .all(db)
        .await
}

/// Completed performances for a set of applications (leaderboard input).
pub async fn completed_for_applications<C: ConnectionTrait>(
    conn: &C,
    application_ids: Vec<Uuid>,
) -> Result<Vec<performances::Model>, DbErr> {
    if application_ids.is_empty() {
        return Ok(Vec::new());
    }
    performances::Entity::find()
        .filter(performances::Column::ApplicationId.is_in(application_ids))
        .filter(performances::Column::Status.eq(CompletionStatus::Completed))
        .all(conn)
        .await
}

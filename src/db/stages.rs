use sea_orm::*;
use uuid::Uuid;

use crate::models::stages::{self, CreateStage, StageStatus, UpdateStage};

/// Fetch a season's stages ordered by sequence position.
pub async fn get_stages_by_season<C: ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
) -> Result<Vec<stages::Model>, DbErr> {
    stages::Entity::find()
        .filter(stages::Column::SeasonId.eq(season_id))
        .order_by_asc(stages::Column::StageOrder)
        .all(conn)
        .await
}

/// Fetch a single stage by ID.
pub async fn get_stage_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<stages::Model>, DbErr> {
    stages::Entity::find_by_id(id).one(conn).await
}

/// Insert a new stage (starts Upcoming). Callers run the sequencing rules
/// first, inside the same transaction, so a racing admin cannot slip a
/// conflicting stage in between validation and insert.
pub async fn insert_stage<C: ConnectionTrait>(
    conn: &C,
    input: CreateStage,
) -> Result<stages::Model, DbErr> {
    let new_stage = stages::ActiveModel {
        id: Set(Uuid::new_v4()),
        season_id: Set(input.season_id),
        name: Set(input.name),
        stage_order: Set(input.stage_order),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        status: Set(StageStatus::Upcoming),
        max_winners: Set(input.max_winners),
        is_final: Set(input.is_final),
        created_at: Set(chrono::Utc::now()),
    };

    new_stage.insert(conn).await
}

/// Apply an admin edit to a stage. Same transactional contract as insert.
pub async fn update_stage<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    input: UpdateStage,
) -> Result<stages::Model, DbErr> {
    let stage = stages::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(DbErr::RecordNotFound("Stage not found".to_string()))?;

    let mut active: stages::ActiveModel = stage.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(order) = input.stage_order {
        active.stage_order = Set(order);
    }
    if let Some(start) = input.start_date {
        active.start_date = Set(start);
    }
    if let Some(end) = input.end_date {
        active.end_date = Set(end);
    }
    if let Some(max_winners) = input.max_winners {
        active.max_winners = Set(Some(max_winners));
    }
    if let Some(is_final) = input.is_final {
        active.is_final = Set(is_final);
    }

    active.update(conn).await
}

/// Move a stage through its lifecycle (upcoming → ongoing → completed).
pub async fn set_stage_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: StageStatus,
) -> Result<stages::Model, DbErr> {
    let stage = stages::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Stage not found".to_string()))?;

    let mut active: stages::ActiveModel = stage.into();
    active.status = Set(status);

    active.update(db).await
}

/// Delete a stage by ID. The FK on performances cascades.
pub async fn delete_stage(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    stages::Entity::delete_by_id(id).exec(db).await
}

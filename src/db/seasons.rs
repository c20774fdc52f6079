use sea_orm::*;
use uuid::Uuid;

use crate::models::seasons::{self, CreateSeason, SeasonStatus, UpdateSeason};

/// Insert a new season (starts Upcoming).
pub async fn insert_season(
    db: &DatabaseConnection,
    input: CreateSeason,
) -> Result<seasons::Model, DbErr> {
    let new_season = seasons::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        year: Set(input.year),
        application_start: Set(input.application_start),
        application_end: Set(input.application_end),
        status: Set(SeasonStatus::Upcoming),
        created_at: Set(chrono::Utc::now()),
    };

    new_season.insert(db).await
}

/// Fetch all seasons, newest year first.
pub async fn get_all_seasons(db: &DatabaseConnection) -> Result<Vec<seasons::Model>, DbErr> {
    seasons::Entity::find()
        .order_by_desc(seasons::Column::Year)
        .all(db)
        .await
}

/// Fetch a single season by ID.
pub async fn get_season_by_id<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<Option<seasons::Model>, DbErr> {
    seasons::Entity::find_by_id(id).one(conn).await
}

/// The currently active season, if any.
pub async fn get_active_season<C: ConnectionTrait>(
    conn: &C,
) -> Result<Option<seasons::Model>, DbErr> {
    seasons::Entity::find()
        .filter(seasons::Column::Status.eq(SeasonStatus::Active))
        .one(conn)
        .await
}

/// Seasons that have finished (Completed or Ended), for the Hall of Fame.
pub async fn get_finished_seasons(db: &DatabaseConnection) -> Result<Vec<seasons::Model>, DbErr> {
    seasons::Entity::find()
        .filter(
            seasons::Column::Status
                .is_in([SeasonStatus::Completed, SeasonStatus::Ended]),
        )
        .order_by_desc(seasons::Column::Year)
        .all(db)
        .await
}

/// Update an existing season.
pub async fn update_season(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateSeason,
) -> Result<seasons::Model, DbErr> {
    let season = seasons::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Season not found".to_string()))?;

    let mut active: seasons::ActiveModel = season.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(year) = input.year {
        active.year = Set(year);
    }
    if let Some(start) = input.application_start {
        active.application_start = Set(start);
    }
    if let Some(end) = input.application_end {
        active.application_end = Set(end);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }

    active.update(db).await
}

/// Mark a season Active, demoting any previously active season to Upcoming.
/// Runs in one transaction so two seasons can never both be active.
pub async fn activate_season(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<seasons::Model, DbErr> {
    let txn = db.begin().await?;

    let currently_active = seasons::Entity::find()
        .filter(seasons::Column::Status.eq(SeasonStatus::Active))
        .filter(seasons::Column::Id.ne(id))
        .all(&txn)
        .await?;
    for season in currently_active {
        let mut active: seasons::ActiveModel = season.into();
        active.status = Set(SeasonStatus::Upcoming);
        active.update(&txn).await?;
    }

    let season = seasons::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(DbErr::RecordNotFound("Season not found".to_string()))?;

    let mut active: seasons::ActiveModel = season.into();
    active.status = Set(SeasonStatus::Active);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Set a season's status inside an existing transaction (season conclusion).
pub async fn set_status<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    status: SeasonStatus,
) -> Result<seasons::Model, DbErr> {
    let season = seasons::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(DbErr::RecordNotFound("Season not found".to_string()))?;

    let mut active: seasons::ActiveModel = season.into();
    active.status = Set(status);
    active.update(conn).await
}

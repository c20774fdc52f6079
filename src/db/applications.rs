use sea_orm::*;
use uuid::Uuid;

use crate::models::applications::{self, ApplicationStatus, PaymentStatus};

/// Insert a new application (Pending, unpaid, not yet a participant).
pub async fn insert_application(
    db: &DatabaseConnection,
    user_id: Uuid,
    season_id: Uuid,
) -> Result<applications::Model, DbErr> {
    let new_application = applications::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        season_id: Set(season_id),
        status: Set(ApplicationStatus::Pending),
        is_eliminated: Set(false),
        is_participant: Set(false),
        payment_status: Set(PaymentStatus::Unpaid),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_application.insert(db).await
}

/// Fetch a single application by ID.
pub async fn get_application_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find_by_id(id).one(db).await
}

/// One application per user per season.
pub async fn get_by_user_and_season(
    db: &DatabaseConnection,
    user_id: Uuid,
    season_id: Uuid,
) -> Result<Option<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::UserId.eq(user_id))
        .filter(applications::Column::SeasonId.eq(season_id))
        .one(db)
        .await
}

/// All applications by one user across seasons, newest first.
pub async fn get_by_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::UserId.eq(user_id))
        .order_by_desc(applications::Column::CreatedAt)
        .all(db)
        .await
}

/// All applications for a season (admin review list).
pub async fn get_by_season(
    db: &DatabaseConnection,
    season_id: Uuid,
) -> Result<Vec<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::SeasonId.eq(season_id))
        .order_by_asc(applications::Column::CreatedAt)
        .all(db)
        .await
}

/// The leaderboard population: approved and still in the running.
pub async fn approved_active_by_season<C: ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
) -> Result<Vec<applications::Model>, DbErr> {
    applications::Entity::find()
        .filter(applications::Column::SeasonId.eq(season_id))
        .filter(applications::Column::Status.eq(ApplicationStatus::Approved))
        .filter(applications::Column::IsEliminated.eq(false))
        .order_by_asc(applications::Column::CreatedAt)
        .all(conn)
        .await
}

/// User IDs of applications with a given status in a season (message fan-out).
pub async fn user_ids_by_status<C: ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
    status: ApplicationStatus,
) -> Result<Vec<Uuid>, DbErr> {
    let rows = applications::Entity::find()
        .filter(applications::Column::SeasonId.eq(season_id))
        .filter(applications::Column::Status.eq(status))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|a| a.user_id).collect())
}

/// Approve/reject/etc. an application. Approval also flags the applicant as a
/// participant so they can be scored.
pub async fn update_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: ApplicationStatus,
) -> Result<applications::Model, DbErr> {
    let application = applications::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Application not found".to_string()))?;

    let mut active: applications::ActiveModel = application.into();
    active.status = Set(status);
    if status == ApplicationStatus::Approved {
        active.is_participant = Set(true);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Eliminate a participant, or reinstate one eliminated by mistake.
pub async fn set_elimination(
    db: &DatabaseConnection,
    id: Uuid,
    is_eliminated: bool,
) -> Result<applications::Model, DbErr> {
    let application = applications::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Application not found".to_string()))?;

    let mut active: applications::ActiveModel = application.into();
    active.is_eliminated = Set(is_eliminated);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

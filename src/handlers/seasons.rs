use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::cache::{CacheData, keys};
use crate::db::applications as application_db;
use crate::db::champions as champion_db;
use crate::db::performances as performance_db;
use crate::db::seasons as season_db;
use crate::models::seasons::{CreateSeason, SeasonStatus, UpdateSeason};
use crate::rules::leaderboard::{Participant, ScoredPerformance, rank};

/// GET /api/seasons — public list of all seasons.
pub async fn get_seasons(db: web::Data<DatabaseConnection>) -> impl Responder {
    match season_db::get_all_seasons(db.get_ref()).await {
        Ok(seasons) => HttpResponse::Ok().json(seasons),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/seasons/active — the season currently driving the portal.
pub async fn get_active_season(db: web::Data<DatabaseConnection>) -> impl Responder {
    match season_db::get_active_season(db.get_ref()).await {
        Ok(Some(season)) => HttpResponse::Ok().json(season),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No active season",
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/seasons/{id} — a single season.
pub async fn get_season(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match season_db::get_season_by_id(db.get_ref(), id).await {
        Ok(Some(season)) => HttpResponse::Ok().json(season),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Season {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/seasons — admin creates a season (starts Upcoming).
pub async fn create_season(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateSeason>,
) -> impl Responder {
    let input = body.into_inner();

    if input.application_start >= input.application_end {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Application window must end after it starts",
        }));
    }

    match season_db::insert_season(db.get_ref(), input).await {
        Ok(season) => HttpResponse::Created().json(season),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create season: {e}"),
        })),
    }
}

/// PUT /api/seasons/{id} — admin edits a season.
pub async fn update_season(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSeason>,
) -> impl Responder {
    let id = path.into_inner();
    match season_db::update_season(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update season: {e}"),
            }))
        }
    }
}

/// POST /api/seasons/{id}/activate — make this the active season. Any
/// previously active season is demoted in the same transaction.
pub async fn activate_season(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match season_db::activate_season(db.get_ref(), id).await {
        Ok(season) => HttpResponse::Ok().json(season),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to activate season: {e}"),
            }))
        }
    }
}

/// POST /api/seasons/{id}/conclude — freeze the season: compute the final
/// leaderboard, write the podium (positions 1–3) as champion rows, and mark
/// the season Completed. Runs in one transaction so a partially written
/// podium can never be observed.
pub async fn conclude_season(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let season_id = path.into_inner();

    let txn = match db.get_ref().begin().await {
        Ok(txn) => txn,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 1. The season must exist, be active, and not already have a podium.
    let season = match season_db::get_season_by_id(&txn, season_id).await {
        Ok(Some(season)) => season,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Season {season_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if season.status != SeasonStatus::Active {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Only an active season can be concluded",
        }));
    }

    match champion_db::exists_for_season(&txn, season_id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "This season already has champions",
            }));
        }
        Ok(false) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    // 2. Compute the final standings inside the transaction.
    let standings = match final_standings(&txn, season_id).await {
        Ok(standings) => standings,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 3. Write the podium (fewer than three participants writes fewer rows)
    //    and mark the season Completed.
    let result: Result<Vec<crate::models::champions::Model>, sea_orm::DbErr> = async {
        let mut podium = Vec::new();
        for entry in standings.iter().take(3) {
            let champion = champion_db::insert_champion(
                &txn,
                season_id,
                entry.user_id,
                entry.rank as i32,
                entry.total_points as i32,
                None,
            )
            .await?;
            podium.push(champion);
        }
        season_db::set_status(&txn, season_id, SeasonStatus::Completed).await?;
        txn.commit().await?;
        Ok(podium)
    }
    .await;

    match result {
        Ok(podium) => {
            // Both public views changed; drop their cache entries.
            let _ = cache.delete(&keys::leaderboard(season_id)).await;
            let _ = cache.delete(&keys::hall_of_fame()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "season_id": season_id,
                "champions": podium,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to conclude season: {e}"),
        })),
    }
}

/// The ranked final standings for a season, computed from approved,
/// non-eliminated applications and their completed performances.
async fn final_standings<C: sea_orm::ConnectionTrait>(
    conn: &C,
    season_id: Uuid,
) -> Result<Vec<crate::rules::leaderboard::LeaderboardEntry>, sea_orm::DbErr> {
    let applications = application_db::approved_active_by_season(conn, season_id).await?;
    let application_ids: Vec<Uuid> = applications.iter().map(|a| a.id).collect();
    let performances =
        performance_db::completed_for_applications(conn, application_ids).await?;

    let participants: Vec<Participant> = applications
        .iter()
        .map(|a| Participant {
            application_id: a.id,
            user_id: a.user_id,
            display_name: None,
        })
        .collect();
    let scored: Vec<ScoredPerformance> = performances
        .iter()
        .map(|p| ScoredPerformance {
            application_id: p.application_id,
            points: p.points,
        })
        .collect();

    Ok(rank(&participants, &scored))
}

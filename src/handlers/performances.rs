use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::cache::{CacheData, keys};
use crate::db::applications as application_db;
use crate::db::performances as performance_db;
use crate::db::stages as stage_db;
use crate::models::applications::ApplicationStatus;
use crate::models::performances::RecordPerformance;

/// POST /api/stages/{id}/performances — admin records a participant's score
/// for a stage. One performance per participant per stage.
pub async fn record(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<RecordPerformance>,
) -> impl Responder {
    let stage_id = path.into_inner();
    let input = body.into_inner();

    // 1. The stage must exist.
    let stage = match stage_db::get_stage_by_id(db.get_ref(), stage_id).await {
        Ok(Some(stage)) => stage,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Stage {stage_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. The application must be an approved, non-eliminated participant.
    match application_db::get_application_by_id(db.get_ref(), input.application_id).await {
        Ok(Some(application)) => {
            if application.status != ApplicationStatus::Approved || application.is_eliminated {
                return HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": "Only approved, non-eliminated participants can be scored",
                }));
            }
            if application.season_id != stage.season_id {
                return HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "error": "Application does not belong to this stage's season",
                }));
            }
        }
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Application {} not found", input.application_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    // 3. One performance per participant per stage.
    match performance_db::exists_for_application_and_stage(
        db.get_ref(),
        input.application_id,
        stage_id,
    )
    .await
    {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "A performance has already been recorded for this participant and stage",
            }));
        }
        Ok(false) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    // 4. Record it and drop the season's cached leaderboard.
    match performance_db::insert_performance(db.get_ref(), stage_id, input).await {
        Ok(performance) => {
            let _ = cache.delete(&keys::leaderboard(stage.season_id)).await;
            HttpResponse::Created().json(performance)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to record performance: {e}"),
        })),
    }
}

/// GET /api/stages/{id}/performances — admin view of a stage's scores.
pub async fn get_by_stage(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let stage_id = path.into_inner();
    match performance_db::get_by_stage(db.get_ref(), stage_id).await {
        Ok(performances) => HttpResponse::Ok().json(performances),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::db::applications as application_db;
use crate::db::seasons as season_db;
use crate::models::applications::{SetElimination, UpdateApplicationStatus};

/// POST /api/applications — apply to the active season.
///
/// The user id comes from the JWT; one application per user per season; the
/// application window must be open.
pub async fn apply(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let user_id = user.0.id;

    // 1. There must be an active season with an open application window.
    let season = match season_db::get_active_season(db.get_ref()).await {
        Ok(Some(season)) => season,
        Ok(None) => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "There is no active season accepting applications",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let today = chrono::Utc::now().date_naive();
    if today < season.application_start || today > season.application_end {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Applications for this season are closed",
        }));
    }

    // 2. One application per user per season.
    match application_db::get_by_user_and_season(db.get_ref(), user_id, season.id).await {
        Ok(Some(_)) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "You have already applied to this season",
            }));
        }
        Ok(None) => {}
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    // 3. Create the application.
    match application_db::insert_application(db.get_ref(), user_id, season.id).await {
        Ok(application) => HttpResponse::Created().json(application),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create application: {e}"),
        })),
    }
}

/// GET /api/applications/mine — the authenticated user's applications.
pub async fn get_mine(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match application_db::get_by_user(db.get_ref(), user.0.id).await {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/seasons/{id}/applications — admin review list for a season.
pub async fn get_by_season(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let season_id = path.into_inner();
    match application_db::get_by_season(db.get_ref(), season_id).await {
        Ok(applications) => HttpResponse::Ok().json(applications),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/applications/{id}/status — admin approves/rejects an application.
pub async fn update_status(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateApplicationStatus>,
) -> impl Responder {
    let id = path.into_inner();
    match application_db::update_status(db.get_ref(), id, body.into_inner().status).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update application: {e}"),
            }))
        }
    }
}

/// PUT /api/applications/{id}/elimination — admin eliminates (or reinstates)
/// a participant. Eliminated participants drop off the leaderboard.
pub async fn set_elimination(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<SetElimination>,
) -> impl Responder {
    let id = path.into_inner();
    match application_db::set_elimination(db.get_ref(), id, body.into_inner().is_eliminated).await
    {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update application: {e}"),
            }))
        }
    }
}

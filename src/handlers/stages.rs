use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::seasons as season_db;
use crate::db::stages as stage_db;
use crate::models::stages::{CreateStage, UpdateStage, UpdateStageStatus};
use crate::rules::stage::{StageCandidate, StageSnapshot, validate_stage, validate_stage_deletion};

/// GET /api/seasons/{id}/stages — a season's stages in sequence order.
pub async fn get_stages_by_season(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let season_id = path.into_inner();
    match stage_db::get_stages_by_season(db.get_ref(), season_id).await {
        Ok(stages) => HttpResponse::Ok().json(stages),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/stages/{id} — a single stage.
pub async fn get_stage(
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match stage_db::get_stage_by_id(db.get_ref(), id).await {
        Ok(Some(stage)) => HttpResponse::Ok().json(stage),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Stage {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/stages — admin creates a stage.
///
/// The sequencing rules run against the season's stages fetched inside the
/// same transaction as the insert, so two admins racing on "stage 2" cannot
/// both commit.
pub async fn create_stage(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateStage>,
) -> impl Responder {
    let input = body.into_inner();

    let txn = match db.get_ref().begin().await {
        Ok(txn) => txn,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match season_db::get_season_by_id(&txn, input.season_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Season {} not found", input.season_id),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    let existing = match stage_db::get_stages_by_season(&txn, input.season_id).await {
        Ok(stages) => stages.iter().map(StageSnapshot::from).collect::<Vec<_>>(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let candidate = StageCandidate {
        stage_order: input.stage_order,
        start_date: input.start_date,
        end_date: input.end_date,
        is_final: input.is_final,
        max_winners: input.max_winners,
    };
    if let Err(violation) = validate_stage(&existing, &candidate, None) {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": violation.to_string(),
        }));
    }

    let result = async {
        let stage = stage_db::insert_stage(&txn, input).await?;
        txn.commit().await?;
        Ok::<_, sea_orm::DbErr>(stage)
    }
    .await;

    match result {
        Ok(stage) => HttpResponse::Created().json(stage),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create stage: {e}"),
        })),
    }
}

/// PUT /api/stages/{id} — admin edits a stage. All sequencing checks re-run
/// with the edited stage excluded from the comparisons.
pub async fn update_stage(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStage>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let txn = match db.get_ref().begin().await {
        Ok(txn) => txn,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let stage = match stage_db::get_stage_by_id(&txn, id).await {
        Ok(Some(stage)) => stage,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Stage {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let existing = match stage_db::get_stages_by_season(&txn, stage.season_id).await {
        Ok(stages) => stages.iter().map(StageSnapshot::from).collect::<Vec<_>>(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // The candidate is the stage as it would look after the edit.
    let candidate = StageCandidate {
        stage_order: input.stage_order.unwrap_or(stage.stage_order),
        start_date: input.start_date.unwrap_or(stage.start_date),
        end_date: input.end_date.unwrap_or(stage.end_date),
        is_final: input.is_final.unwrap_or(stage.is_final),
        max_winners: input.max_winners.or(stage.max_winners),
    };
    if let Err(violation) = validate_stage(&existing, &candidate, Some(id)) {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": violation.to_string(),
        }));
    }

    let result = async {
        let updated = stage_db::update_stage(&txn, id, input).await?;
        txn.commit().await?;
        Ok::<_, sea_orm::DbErr>(updated)
    }
    .await;

    match result {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update stage: {e}"),
        })),
    }
}

/// PUT /api/stages/{id}/status — move a stage through its lifecycle.
pub async fn update_status(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStageStatus>,
) -> impl Responder {
    let id = path.into_inner();
    match stage_db::set_stage_status(db.get_ref(), id, body.into_inner().status).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update stage status: {e}"),
            }))
        }
    }
}

/// DELETE /api/stages/{id} — only the last stage in a season's sequence can
/// be removed; its performance rows cascade.
pub async fn delete_stage(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let stage = match stage_db::get_stage_by_id(db.get_ref(), id).await {
        Ok(Some(stage)) => stage,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Stage {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    let existing = match stage_db::get_stages_by_season(db.get_ref(), stage.season_id).await {
        Ok(stages) => stages.iter().map(StageSnapshot::from).collect::<Vec<_>>(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if let Err(violation) = validate_stage_deletion(&existing, id) {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": violation.to_string(),
        }));
    }

    match stage_db::delete_stage(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Stage {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Stage {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete stage: {e}"),
        })),
    }
}

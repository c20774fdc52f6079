use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::merch as merch_db;
use crate::models::merch::{CreateMerchItem, UpdateMerchItem};

/// GET /api/merch — public catalogue listing.
pub async fn get_items(db: web::Data<DatabaseConnection>) -> impl Responder {
    match merch_db::get_all_items(db.get_ref()).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/merch — admin adds a catalogue item.
pub async fn create_item(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateMerchItem>,
) -> impl Responder {
    let input = body.into_inner();

    if input.price_cents < 0 {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Price cannot be negative",
        }));
    }

    match merch_db::insert_item(db.get_ref(), input).await {
        Ok(item) => HttpResponse::Created().json(item),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create merch item: {e}"),
        })),
    }
}

/// PUT /api/merch/{id} — admin edits a catalogue item.
pub async fn update_item(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateMerchItem>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    if matches!(input.price_cents, Some(p) if p < 0) {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Price cannot be negative",
        }));
    }

    match merch_db::update_item(db.get_ref(), id, input).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => {
            let mut status = if e.to_string().contains("not found") {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            status.json(serde_json::json!({
                "error": format!("Failed to update merch item: {e}"),
            }))
        }
    }
}

/// DELETE /api/merch/{id} — admin removes a catalogue item.
pub async fn delete_item(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match merch_db::delete_item(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Merch item {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Merch item {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete merch item: {e}"),
        })),
    }
}

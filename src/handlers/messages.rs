use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::{AdminUser, AuthenticatedUser};
use crate::db::messaging as messaging_db;
use crate::models::PaginationQuery;
use crate::models::messages::{SendMessage, SendMessageResponse};

/// POST /api/messages — admin authors a message and fans it out.
///
/// The message row, the per-recipient notifications, and the per-channel
/// delivery rows are written in one transaction. An empty recipient set is
/// not an error: the message is stored and the response reports 0 recipients.
pub async fn send_message(
    admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<SendMessage>,
) -> impl Responder {
    let input = body.into_inner();

    if input.subject.trim().is_empty() || input.content.trim().is_empty() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Subject and content are required",
        }));
    }
    if input.no_channels() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "At least one delivery channel must be enabled",
        }));
    }

    match messaging_db::send_message(db.get_ref(), admin.0.id, input).await {
        Ok(fan_out) => {
            tracing::info!(
                "Message {} fanned out to {} recipients ({} deliveries)",
                fan_out.message.id,
                fan_out.recipients,
                fan_out.deliveries,
            );
            HttpResponse::Created().json(SendMessageResponse {
                message: fan_out.message,
                recipients: fan_out.recipients,
                deliveries: fan_out.deliveries,
            })
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to send message: {e}"),
        })),
    }
}

/// GET /api/messages — admin history of sent messages.
pub async fn get_messages(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match messaging_db::get_all_messages(db.get_ref()).await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/notifications — the authenticated user's inbox, newest first.
pub async fn get_notifications(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> impl Responder {
    match messaging_db::notifications_for_user(db.get_ref(), user.0.id, query.page(), query.limit())
        .await
    {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/notifications/{id}/read — mark one of your notifications read.
pub async fn mark_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match messaging_db::get_notification_by_id(db.get_ref(), id).await {
        Ok(Some(notification)) if notification.user_id == user.0.id => {}
        Ok(Some(_)) => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "You can only mark your own notifications as read",
            }));
        }
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Notification {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match messaging_db::mark_notification_read(db.get_ref(), id).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to mark notification read: {e}"),
        })),
    }
}

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AdminUser;
use crate::db::inquiries as inquiry_db;
use crate::email::EmailClient;
use crate::models::PaginationQuery;
use crate::models::inquiries::{InquiryStatus, RespondToInquiry};

/// GET /api/inquiries — the admin support queue, newest first.
pub async fn get_inquiries(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
) -> impl Responder {
    match inquiry_db::get_all_inquiries(db.get_ref(), query.page(), query.limit()).await {
        Ok(inquiries) => HttpResponse::Ok().json(inquiries),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/inquiries/{id}/respond — admin emails a reply to the sender.
/// The inquiry is only marked answered once the provider accepts the email.
pub async fn respond(
    _admin: AdminUser,
    db: web::Data<DatabaseConnection>,
    email: web::Data<EmailClient>,
    path: web::Path<Uuid>,
    body: web::Json<RespondToInquiry>,
) -> impl Responder {
    let id = path.into_inner();

    let inquiry = match inquiry_db::get_inquiry_by_id(db.get_ref(), id).await {
        Ok(Some(inquiry)) => inquiry,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Inquiry {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if inquiry.status == InquiryStatus::Answered {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "This inquiry has already been answered",
        }));
    }

    let subject = format!("Re: {}", inquiry.subject);
    if let Err(e) = email
        .send(&inquiry.from_email, &subject, &body.into_inner().body)
        .await
    {
        return HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Failed to send response: {e}"),
        }));
    }

    match inquiry_db::mark_answered(db.get_ref(), id).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Response sent but failed to update inquiry: {e}"),
        })),
    }
}

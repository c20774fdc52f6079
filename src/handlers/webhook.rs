use actix_web::{HttpRequest, HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::inquiries as inquiry_db;
use crate::email::EmailClient;
use crate::email::signature::verify_signature;
use crate::models::inquiries::InboundEmail;

/// Shared secret for the inbound email webhook, stored in Actix app data.
#[derive(Clone)]
pub struct WebhookSecret(pub String);

/// POST /api/webhooks/inbound-email — the mail provider forwards support
/// inbox messages here.
///
/// The signature is an HMAC-SHA256 hex digest of the raw body; a bad or
/// missing signature is rejected with 401 before the payload is even parsed.
/// On success the inquiry is stored and an auto-reply goes back to the
/// sender; a failed auto-reply is logged but does not fail the webhook (the
/// inquiry is already persisted).
pub async fn inbound_email(
    req: HttpRequest,
    db: web::Data<DatabaseConnection>,
    email: web::Data<EmailClient>,
    secret: web::Data<WebhookSecret>,
    payload: web::Bytes,
) -> impl Responder {
    let signature = req
        .headers()
        .get("X-Webhook-Signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !verify_signature(&secret.0, &payload, signature) {
        tracing::warn!("Rejected inbound email webhook: invalid signature");
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid webhook signature",
        }));
    }

    let inbound: InboundEmail = match serde_json::from_slice(&payload) {
        Ok(inbound) => inbound,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Invalid payload: {e}"),
            }));
        }
    };

    let reply_to = inbound.from.clone();
    let original_subject = inbound.subject.clone();

    let inquiry = match inquiry_db::insert_inquiry(db.get_ref(), inbound).await {
        Ok(inquiry) => inquiry,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to store inquiry: {e}"),
            }));
        }
    };

    if let Err(e) = email.send_auto_reply(&reply_to, &original_subject).await {
        tracing::warn!("Auto-reply for inquiry {} failed: {e}", inquiry.id);
    }

    HttpResponse::Created().json(serde_json::json!({
        "id": inquiry.id,
    }))
}

use sea_orm::*;
use uuid::Uuid;

use crate::models::inquiries::{self, InboundEmail, InquiryStatus};

/// Store a support inquiry received via the inbound email webhook.
pub async fn insert_inquiry(
    db: &DatabaseConnection,
    input: InboundEmail,
) -> Result<inquiries::Model, DbErr> {
    let new_inquiry = inquiries::ActiveModel {
        id: Set(Uuid::new_v4()),
        from_email: Set(input.from),
        from_name: Set(input.from_name),
        subject: Set(input.subject),
        body: Set(input.text),
        status: Set(InquiryStatus::Open),
        created_at: Set(chrono::Utc::now()),
        answered_at: Set(None),
    };

    new_inquiry.insert(db).await
}

/// Fetch all inquiries, newest first, paginated (admin support queue).
pub async fn get_all_inquiries(
    db: &DatabaseConnection,
    page: u64,
    limit: u64,
) -> Result<Vec<inquiries::Model>, DbErr> {
    inquiries::Entity::find()
        .order_by_desc(inquiries::Column::CreatedAt)
        .paginate(db, limit)
        .fetch_page(page.saturating_sub(1))
        .await
}

/// Fetch a single inquiry by ID.
pub async fn get_inquiry_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<inquiries::Model>, DbErr> {
    inquiries::Entity::find_by_id(id).one(db).await
}

/// Mark an inquiry answered once an admin response has gone out.
pub async fn mark_answered(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<inquiries::Model, DbErr> {
    let inquiry = inquiries::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Inquiry not found".to_string()))?;

    let mut active: inquiries::ActiveModel = inquiry.into();
    active.status = Set(InquiryStatus::Answered);
    active.answered_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

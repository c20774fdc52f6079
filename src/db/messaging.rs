use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::{applications as application_db, seasons as season_db, users as user_db};
use crate::models::applications::ApplicationStatus;
use crate::models::deliveries::{self, Channel, DeliveryStatus};
use crate::models::messages::{self, RecipientType, SendMessage};
use crate::models::notifications::{self, NotificationView};

/// Result of a fan-out: the stored message plus how far it reached.
pub struct FanOut {
    pub message: messages::Model,
    pub recipients: usize,
    pub deliveries: usize,
}

/// Resolve the recipient user-id set for a recipient rule.
///
/// Applicant rules are scoped to the active season; with no active season
/// they resolve to nobody (the message is still stored).
async fn resolve_recipients<C: ConnectionTrait>(
    conn: &C,
    recipient_type: RecipientType,
) -> Result<Vec<Uuid>, DbErr> {
    match recipient_type {
        RecipientType::AllUsers => user_db::all_user_ids(conn).await,
        RecipientType::ApprovedApplicants | RecipientType::RejectedApplicants => {
            let Some(season) = season_db::get_active_season(conn).await? else {
                return Ok(Vec::new());
            };
            let status = if recipient_type == RecipientType::ApprovedApplicants {
                ApplicationStatus::Approved
            } else {
                ApplicationStatus::Rejected
            };
            application_db::user_ids_by_status(conn, season.id, status).await
        }
    }
}

/// Store a message and fan it out: one notification per recipient, one
/// delivery row per recipient × enabled channel. The whole sequence runs in
/// a single transaction — either the message and its full fan-out commit, or
/// nothing does.
///
/// An empty recipient set still commits the message row and reports zero
/// recipients.
pub async fn send_message(
    db: &DatabaseConnection,
    sent_by: Uuid,
    input: SendMessage,
) -> Result<FanOut, DbErr> {
    let txn = db.begin().await?;

    let message = messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        subject: Set(input.subject),
        content: Set(input.content),
        recipient_type: Set(input.recipient_type),
        send_email: Set(input.send_email),
        send_in_app: Set(input.send_in_app),
        send_whatsapp: Set(input.send_whatsapp),
        sent_by: Set(sent_by),
        created_at: Set(chrono::Utc::now()),
    }
    .insert(&txn)
    .await?;

    let recipients = resolve_recipients(&txn, message.recipient_type).await?;

    let mut channels: Vec<Channel> = Vec::new();
    if message.send_email {
        channels.push(Channel::Email);
    }
    if message.send_in_app {
        channels.push(Channel::InApp);
    }
    if message.send_whatsapp {
        channels.push(Channel::WhatsApp);
    }

    let mut delivery_count = 0usize;
    if !recipients.is_empty() {
        let now = chrono::Utc::now();

        let notification_rows: Vec<notifications::ActiveModel> = recipients
            .iter()
            .map(|&user_id| notifications::ActiveModel {
                id: Set(Uuid::new_v4()),
                message_id: Set(message.id),
                user_id: Set(user_id),
                is_read: Set(false),
                created_at: Set(now),
            })
            .collect();
        notifications::Entity::insert_many(notification_rows)
            .exec(&txn)
            .await?;

        let delivery_rows: Vec<deliveries::ActiveModel> = recipients
            .iter()
            .flat_map(|&user_id| {
                channels.iter().map(move |&channel| deliveries::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    message_id: Set(message.id),
                    user_id: Set(user_id),
                    channel: Set(channel),
                    status: Set(DeliveryStatus::Pending),
                    created_at: Set(now),
                })
            })
            .collect();
        delivery_count = delivery_rows.len();
        if !delivery_rows.is_empty() {
            deliveries::Entity::insert_many(delivery_rows)
                .exec(&txn)
                .await?;
        }
    }

    txn.commit().await?;

    Ok(FanOut {
        message,
        recipients: recipients.len(),
        deliveries: delivery_count,
    })
}

/// Fetch all messages, newest first (admin history).
pub async fn get_all_messages(db: &DatabaseConnection) -> Result<Vec<messages::Model>, DbErr> {
    messages::Entity::find()
        .order_by_desc(messages::Column::CreatedAt)
        .all(db)
        .await
}

/// A user's inbox: notifications joined with their message content,
/// newest first, paginated.
pub async fn notifications_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    page: u64,
    limit: u64,
) -> Result<Vec<NotificationView>, DbErr> {
    let rows = notifications::Entity::find()
        .filter(notifications::Column::UserId.eq(user_id))
        .order_by_desc(notifications::Column::CreatedAt)
        .paginate(db, limit)
        .fetch_page(page.saturating_sub(1))
        .await?;

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let message_ids: Vec<Uuid> = rows.iter().map(|n| n.message_id).collect();
    let message_index: HashMap<Uuid, messages::Model> = messages::Entity::find()
        .filter(messages::Column::Id.is_in(message_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    Ok(rows
        .into_iter()
        .filter_map(|n| {
            message_index.get(&n.message_id).map(|m| NotificationView {
                id: n.id,
                message_id: n.message_id,
                subject: m.subject.clone(),
                content: m.content.clone(),
                is_read: n.is_read,
                created_at: n.created_at,
            })
        })
        .collect())
}

/// Fetch a single notification by ID.
pub async fn get_notification_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<notifications::Model>, DbErr> {
    notifications::Entity::find_by_id(id).one(db).await
}

/// Mark a notification read.
pub async fn mark_notification_read(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<notifications::Model, DbErr> {
    let notification = notifications::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Notification not found".to_string()))?;

    let mut active: notifications::ActiveModel = notification.into();
    active.is_read = Set(true);

    active.update(db).await
}

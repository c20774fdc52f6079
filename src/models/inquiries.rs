use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum InquiryStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "answered")]
    Answered,
}

/// SeaORM entity for the `inquiries` table.
///
/// Written by the inbound support-email webhook; answered by admins.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub from_email: String,
    pub from_name: Option<String>,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub status: InquiryStatus,
    pub created_at: DateTimeUtc,
    pub answered_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Inbound email payload posted by the mail provider's webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEmail {
    pub from: String,
    pub from_name: Option<String>,
    pub subject: String,
    pub text: String,
}

/// Request body for POST /api/inquiries/{id}/respond.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondToInquiry {
    pub body: String,
}

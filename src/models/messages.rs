use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which user set an authored message fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RecipientType {
    #[sea_orm(string_value = "all_users")]
    AllUsers,
    #[sea_orm(string_value = "approved_applicants")]
    ApprovedApplicants,
    #[sea_orm(string_value = "rejected_applicants")]
    RejectedApplicants,
}

/// SeaORM entity for the `messages` table (admin-authored broadcast).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub recipient_type: RecipientType,
    pub send_email: bool,
    pub send_in_app: bool,
    pub send_whatsapp: bool,
    pub sent_by: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SentBy",
        to = "super::users::Column::Id"
    )]
    Sender,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
    #[sea_orm(has_many = "super::deliveries::Entity")]
    Deliveries,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sender.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::deliveries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliveries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/messages. `sent_by` comes from the admin's JWT.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessage {
    pub subject: String,
    pub content: String,
    pub recipient_type: RecipientType,
    #[serde(default)]
    pub send_email: bool,
    #[serde(default)]
    pub send_in_app: bool,
    #[serde(default)]
    pub send_whatsapp: bool,
}

impl SendMessage {
    /// True when no delivery channel is enabled.
    pub fn no_channels(&self) -> bool {
        !(self.send_email || self.send_in_app || self.send_whatsapp)
    }
}

/// Response for POST /api/messages: the stored message plus fan-out counts.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageResponse {
    pub message: Model,
    pub recipients: usize,
    pub deliveries: usize,
}

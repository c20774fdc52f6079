use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Season lifecycle stored as a lowercase string in the database.
///
/// `Completed` means the champions have been written; `Ended` is a season
/// that was closed without a podium (archival state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SeasonStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "ended")]
    Ended,
}

/// SeaORM entity for the `seasons` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seasons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub application_start: Date,
    pub application_end: Date,
    pub status: SeasonStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stages::Entity")]
    Stages,
    #[sea_orm(has_many = "super::applications::Entity")]
    Applications,
    #[sea_orm(has_many = "super::champions::Entity")]
    Champions,
}

impl Related<super::stages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stages.def()
    }
}

impl Related<super::applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl Related<super::champions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Champions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSeason {
    pub name: String,
    pub year: i32,
    pub application_start: Date,
    pub application_end: Date,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSeason {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub application_start: Option<Date>,
    pub application_end: Option<Date>,
    pub status: Option<SeasonStatus>,
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stage lifecycle stored as a lowercase string in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum StageStatus {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "ongoing")]
    Ongoing,
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// SeaORM entity for the `stages` table.
///
/// `stage_order` is unique per season and contiguous from 1; the sequencing
/// rules that keep it that way live in `crate::rules::stage`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub season_id: Uuid,
    pub name: String,
    pub stage_order: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub status: StageStatus,
    pub max_winners: Option<i32>,
    pub is_final: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seasons::Entity",
        from = "Column::SeasonId",
        to = "super::seasons::Column::Id"
    )]
    Season,
    #[sea_orm(has_many = "super::performances::Entity")]
    Performances,
}

impl Related<super::seasons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl Related<super::performances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Performances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStage {
    pub season_id: Uuid,
    pub name: String,
    pub stage_order: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub max_winners: Option<i32>,
    #[serde(default)]
    pub is_final: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStage {
    pub name: Option<String>,
    pub stage_order: Option<i32>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub max_winners: Option<i32>,
    pub is_final: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStageStatus {
    pub status: StageStatus,
}

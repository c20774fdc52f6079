use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `stages` table and its columns.
#[derive(DeriveIden)]
enum Stages {
    Table,
    Id,
    SeasonId,
    Name,
    StageOrder,
    StartDate,
    EndDate,
    Status,
    MaxWinners,
    IsFinal,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Seasons {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Stages::SeasonId).uuid().not_null())
                    .col(ColumnDef::new(Stages::Name).string().not_null())
                    .col(ColumnDef::new(Stages::StageOrder).integer().not_null())
                    .col(ColumnDef::new(Stages::StartDate).date().not_null())
                    .col(ColumnDef::new(Stages::EndDate).date().not_null())
                    .col(ColumnDef::new(Stages::Status).string().not_null())
                    .col(ColumnDef::new(Stages::MaxWinners).integer())
                    .col(ColumnDef::new(Stages::IsFinal).boolean().not_null())
                    .col(
                        ColumnDef::new(Stages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stages_season_id")
                            .from(Stages::Table, Stages::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One order slot per season; the sequencing rules keep it contiguous.
        manager
            .create_index(
                Index::create()
                    .name("uq_stages_season_order")
                    .table(Stages::Table)
                    .col(Stages::SeasonId)
                    .col(Stages::StageOrder)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stages::Table).to_owned())
            .await
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `performances` table and its columns.
#[derive(DeriveIden)]
enum Performances {
    Table,
    Id,
    ApplicationId,
    StageId,
    Points,
    TimeSeconds,
    Position,
    Status,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Applications {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Stages {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Performances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Performances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Performances::ApplicationId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Performances::StageId).uuid().not_null())
                    .col(ColumnDef::new(Performances::Points).integer().not_null())
                    .col(ColumnDef::new(Performances::TimeSeconds).integer())
                    .col(ColumnDef::new(Performances::Position).integer())
                    .col(ColumnDef::new(Performances::Status).string().not_null())
                    .col(
                        ColumnDef::new(Performances::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performances_application_id")
                            .from(Performances::Table, Performances::ApplicationId)
                            .to(Applications::Table, Applications::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Deleting a stage removes its performances (stage
                    // deletion is restricted to the last stage in sequence).
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performances_stage_id")
                            .from(Performances::Table, Performances::StageId)
                            .to(Stages::Table, Stages::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One performance per participant per stage.
        manager
            .create_index(
                Index::create()
                    .name("uq_performances_application_stage")
                    .table(Performances::Table)
                    .col(Performances::ApplicationId)
                    .col(Performances::StageId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Performances::Table).to_owned())
            .await
    }
}

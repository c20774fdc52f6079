use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `champions` table and its columns.
#[derive(DeriveIden)]
enum Champions {
    Table,
    Id,
    SeasonId,
    UserId,
    Position,
    FinalPoints,
    PhotoUrl,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Seasons {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Champions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Champions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Champions::SeasonId).uuid().not_null())
                    .col(ColumnDef::new(Champions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Champions::Position).integer().not_null())
                    .col(
                        ColumnDef::new(Champions::FinalPoints)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Champions::PhotoUrl).string())
                    .col(
                        ColumnDef::new(Champions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_champions_season_id")
                            .from(Champions::Table, Champions::SeasonId)
                            .to(Seasons::Table, Seasons::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_champions_user_id")
                            .from(Champions::Table, Champions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One podium slot per season.
        manager
            .create_index(
                Index::create()
                    .name("uq_champions_season_position")
                    .table(Champions::Table)
                    .col(Champions::SeasonId)
                    .col(Champions::Position)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Champions::Table).to_owned())
            .await
    }
}

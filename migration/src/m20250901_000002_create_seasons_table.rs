use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `seasons` table and its columns.
#[derive(DeriveIden)]
enum Seasons {
    Table,
    Id,
    Name,
    Year,
    ApplicationStart,
    ApplicationEnd,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seasons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Seasons::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Seasons::Name).string().not_null())
                    .col(ColumnDef::new(Seasons::Year).integer().not_null())
                    .col(ColumnDef::new(Seasons::ApplicationStart).date().not_null())
                    .col(ColumnDef::new(Seasons::ApplicationEnd).date().not_null())
                    .col(ColumnDef::new(Seasons::Status).string().not_null())
                    .col(
                        ColumnDef::new(Seasons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seasons::Table).to_owned())
            .await
    }
}

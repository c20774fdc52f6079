use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `inquiries` table and its columns.
#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    FromEmail,
    FromName,
    Subject,
    Body,
    Status,
    CreatedAt,
    AnsweredAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inquiries::FromEmail).string().not_null())
                    .col(ColumnDef::new(Inquiries::FromName).string())
                    .col(ColumnDef::new(Inquiries::Subject).string().not_null())
                    .col(ColumnDef::new(Inquiries::Body).text().not_null())
                    .col(ColumnDef::new(Inquiries::Status).string().not_null())
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Inquiries::AnsweredAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `merch_items` table and its columns.
#[derive(DeriveIden)]
enum MerchItems {
    Table,
    Id,
    Name,
    Description,
    PriceCents,
    ImageUrl,
    InStock,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MerchItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MerchItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MerchItems::Name).string().not_null())
                    .col(ColumnDef::new(MerchItems::Description).text().not_null())
                    .col(
                        ColumnDef::new(MerchItems::PriceCents)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MerchItems::ImageUrl).string())
                    .col(ColumnDef::new(MerchItems::InStock).boolean().not_null())
                    .col(
                        ColumnDef::new(MerchItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MerchItems::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MerchItems::Table).to_owned())
            .await
    }
}

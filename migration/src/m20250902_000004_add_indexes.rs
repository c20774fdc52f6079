use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Stages {
    Table,
    SeasonId,
}

#[derive(DeriveIden)]
enum Applications {
    Table,
    SeasonId,
    UserId,
}

#[derive(DeriveIden)]
enum Performances {
    Table,
    StageId,
}

#[derive(DeriveIden)]
enum Champions {
    Table,
    SeasonId,
}

#[derive(DeriveIden)]
enum UserNotifications {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum MessageDeliveries {
    Table,
    MessageId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on stages.season_id for listing a season's stages
        manager
            .create_index(
                Index::create()
                    .name("idx_stages_season_id")
                    .table(Stages::Table)
                    .col(Stages::SeasonId)
                    .to_owned(),
            )
            .await?;

        // Index on applications.season_id for admin review lists
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_season_id")
                    .table(Applications::Table)
                    .col(Applications::SeasonId)
                    .to_owned(),
            )
            .await?;

        // Index on applications.user_id for fetching a user's applications
        manager
            .create_index(
                Index::create()
                    .name("idx_applications_user_id")
                    .table(Applications::Table)
                    .col(Applications::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on performances.stage_id for stage result listings
        manager
            .create_index(
                Index::create()
                    .name("idx_performances_stage_id")
                    .table(Performances::Table)
                    .col(Performances::StageId)
                    .to_owned(),
            )
            .await?;

        // Index on champions.season_id for the hall of fame
        manager
            .create_index(
                Index::create()
                    .name("idx_champions_season_id")
                    .table(Champions::Table)
                    .col(Champions::SeasonId)
                    .to_owned(),
            )
            .await?;

        // Index on user_notifications.user_id for the inbox listing
        manager
            .create_index(
                Index::create()
                    .name("idx_user_notifications_user_id")
                    .table(UserNotifications::Table)
                    .col(UserNotifications::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on message_deliveries.message_id for delivery audits
        manager
            .create_index(
                Index::create()
                    .name("idx_message_deliveries_message_id")
                    .table(MessageDeliveries::Table)
                    .col(MessageDeliveries::MessageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_stages_season_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_applications_season_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_applications_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_performances_stage_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_champions_season_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_notifications_user_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_deliveries_message_id")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

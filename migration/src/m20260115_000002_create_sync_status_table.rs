use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SyncStatus::Table)
                    .if_not_exists()
                    .col(string(SyncStatus::Id).primary_key())
                    .col(boolean(SyncStatus::IsRunning).default(false))
                    .col(integer(SyncStatus::Current).default(0))
                    .col(integer(SyncStatus::Total).default(0))
                    .col(integer(SyncStatus::Failed).default(0))
                    .col(timestamp_with_time_zone_null(SyncStatus::StartedAt))
                    .col(timestamp_with_time_zone_null(SyncStatus::CompletedAt))
                    .col(string_null(SyncStatus::LastError))
                    .col(timestamp_with_time_zone(SyncStatus::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SyncStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum SyncStatus {
    Table,
    Id,
    IsRunning,
    Current,
    Total,
    Failed,
    StartedAt,
    CompletedAt,
    LastError,
    UpdatedAt,
}

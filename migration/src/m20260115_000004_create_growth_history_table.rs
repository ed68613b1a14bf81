use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GrowthHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(GrowthHistory::Id))
                    .col(string(GrowthHistory::ServerId))
                    .col(integer(GrowthHistory::MemberCount))
                    .col(timestamp_with_time_zone(GrowthHistory::RecordedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_growth_history_server")
                    .table(GrowthHistory::Table)
                    .col(GrowthHistory::ServerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GrowthHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum GrowthHistory {
    Table,
    Id,
    ServerId,
    MemberCount,
    RecordedAt,
}

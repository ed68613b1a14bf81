use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(string(Favorite::UserId))
                    .col(string(Favorite::ServerId))
                    .col(timestamp_with_time_zone(Favorite::AddedAt))
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, server) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user_server")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::ServerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Favorite {
    Table,
    Id,
    UserId,
    ServerId,
    AddedAt,
}

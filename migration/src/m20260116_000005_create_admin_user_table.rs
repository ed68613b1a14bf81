use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(string(AdminUser::DiscordId).primary_key())
                    .col(string(AdminUser::Username))
                    .col(string_null(AdminUser::Avatar))
                    .col(string(AdminUser::AddedBy))
                    .col(timestamp_with_time_zone(AdminUser::AddedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum AdminUser {
    Table,
    DiscordId,
    Username,
    Avatar,
    AddedBy,
    AddedAt,
}

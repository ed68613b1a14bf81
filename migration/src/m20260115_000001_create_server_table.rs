use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(string(Server::Id).primary_key())
                    .col(string(Server::Name))
                    .col(string(Server::Link))
                    .col(string_null(Server::Description))
                    .col(string_null(Server::IconUrl))
                    .col(string_null(Server::BannerUrl))
                    .col(integer_null(Server::CurrentMemberCount))
                    .col(integer_null(Server::OnlineMemberCount))
                    .col(boolean(Server::IsPartner).default(false))
                    .col(timestamp_with_time_zone(Server::CreatedAt))
                    .col(timestamp_with_time_zone_null(Server::LastSynced))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum Server {
    Table,
    Id,
    Name,
    Link,
    Description,
    IconUrl,
    BannerUrl,
    CurrentMemberCount,
    OnlineMemberCount,
    IsPartner,
    CreatedAt,
    LastSynced,
}

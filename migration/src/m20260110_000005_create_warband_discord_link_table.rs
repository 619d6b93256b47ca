use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_warband_user_table::WarbandUser;

static FK_DISCORD_LINK_USER_ID: &str = "fk_warband_discord_link_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarbandDiscordLink::Table)
                    .if_not_exists()
                    .col(integer(WarbandDiscordLink::UserId).primary_key())
                    .col(string(WarbandDiscordLink::DiscordId))
                    .col(string(WarbandDiscordLink::DiscordName))
                    .col(timestamp(WarbandDiscordLink::CreatedAt))
                    .col(timestamp(WarbandDiscordLink::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DISCORD_LINK_USER_ID)
                    .from_tbl(WarbandDiscordLink::Table)
                    .from_col(WarbandDiscordLink::UserId)
                    .to_tbl(WarbandUser::Table)
                    .to_col(WarbandUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DISCORD_LINK_USER_ID)
                    .table(WarbandDiscordLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarbandDiscordLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WarbandDiscordLink {
    Table,
    UserId,
    DiscordId,
    DiscordName,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_warband_user_table::WarbandUser;

static FK_BATTLENET_LINK_USER_ID: &str = "fk_warband_battlenet_link_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarbandBattlenetLink::Table)
                    .if_not_exists()
                    .col(integer(WarbandBattlenetLink::UserId).primary_key())
                    .col(string(WarbandBattlenetLink::Battletag))
                    .col(timestamp(WarbandBattlenetLink::CreatedAt))
                    .col(timestamp(WarbandBattlenetLink::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BATTLENET_LINK_USER_ID)
                    .from_tbl(WarbandBattlenetLink::Table)
                    .from_col(WarbandBattlenetLink::UserId)
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
                    .name(FK_BATTLENET_LINK_USER_ID)
                    .table(WarbandBattlenetLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarbandBattlenetLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WarbandBattlenetLink {
    Table,
    UserId,
    Battletag,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

static IDX_USER_BATTLENET_ID: &str = "idx_warband_user_battlenet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarbandUser::Table)
                    .if_not_exists()
                    .col(pk_auto(WarbandUser::Id))
                    .col(string_uniq(WarbandUser::BattlenetId))
                    .col(string(WarbandUser::Battletag))
                    .col(timestamp(WarbandUser::CreatedAt))
                    .col(timestamp(WarbandUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_BATTLENET_ID)
                    .table(WarbandUser::Table)
                    .col(WarbandUser::BattlenetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_BATTLENET_ID)
                    .table(WarbandUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarbandUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum WarbandUser {
    Table,
    Id,
    BattlenetId,
    Battletag,
    CreatedAt,
    UpdatedAt,
}

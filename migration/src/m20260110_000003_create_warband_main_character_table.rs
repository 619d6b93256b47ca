use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_warband_user_table::WarbandUser;

static FK_MAIN_CHARACTER_USER_ID: &str = "fk_warband_main_character_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarbandMainCharacter::Table)
                    .if_not_exists()
                    .col(integer(WarbandMainCharacter::UserId).primary_key())
                    .col(string(WarbandMainCharacter::CharacterName))
                    .col(string(WarbandMainCharacter::Realm))
                    .col(timestamp(WarbandMainCharacter::CreatedAt))
                    .col(timestamp(WarbandMainCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MAIN_CHARACTER_USER_ID)
                    .from_tbl(WarbandMainCharacter::Table)
                    .from_col(WarbandMainCharacter::UserId)
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
                    .name(FK_MAIN_CHARACTER_USER_ID)
                    .table(WarbandMainCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarbandMainCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WarbandMainCharacter {
    Table,
    UserId,
    CharacterName,
    Realm,
    CreatedAt,
    UpdatedAt,
}

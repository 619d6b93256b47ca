use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_warband_user_table::WarbandUser;

static IDX_CHARACTER_USER_ID: &str = "idx_warband_character_user_id";
static IDX_CHARACTER_IDENTITY: &str = "idx_warband_character_user_id_name_realm";
static FK_CHARACTER_USER_ID: &str = "fk_warband_character_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarbandCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(WarbandCharacter::Id))
                    .col(integer(WarbandCharacter::UserId))
                    .col(string(WarbandCharacter::Name))
                    .col(string(WarbandCharacter::Realm))
                    .col(integer(WarbandCharacter::Level))
                    .col(string(WarbandCharacter::Class))
                    .col(string_null(WarbandCharacter::Guild))
                    .col(double(WarbandCharacter::KeystoneRating))
                    .col(string(WarbandCharacter::Spec))
                    .col(string(WarbandCharacter::Role))
                    .col(timestamp(WarbandCharacter::CreatedAt))
                    .col(timestamp(WarbandCharacter::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(WarbandCharacter::Table)
                    .col(WarbandCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_IDENTITY)
                    .table(WarbandCharacter::Table)
                    .col(WarbandCharacter::UserId)
                    .col(WarbandCharacter::Name)
                    .col(WarbandCharacter::Realm)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_USER_ID)
                    .from_tbl(WarbandCharacter::Table)
                    .from_col(WarbandCharacter::UserId)
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
                    .name(FK_CHARACTER_USER_ID)
                    .table(WarbandCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_IDENTITY)
                    .table(WarbandCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_USER_ID)
                    .table(WarbandCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WarbandCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum WarbandCharacter {
    Table,
    Id,
    UserId,
    Name,
    Realm,
    Level,
    Class,
    Guild,
    KeystoneRating,
    Spec,
    Role,
    CreatedAt,
    UpdatedAt,
}

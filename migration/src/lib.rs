pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_warband_user_table;
mod m20260110_000002_create_warband_character_table;
mod m20260110_000003_create_warband_main_character_table;
mod m20260110_000004_create_warband_battlenet_link_table;
mod m20260110_000005_create_warband_discord_link_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_warband_user_table::Migration),
            Box::new(m20260110_000002_create_warband_character_table::Migration),
            Box::new(m20260110_000003_create_warband_main_character_table::Migration),
            Box::new(m20260110_000004_create_warband_battlenet_link_table::Migration),
            Box::new(m20260110_000005_create_warband_discord_link_table::Migration),
        ]
    }
}

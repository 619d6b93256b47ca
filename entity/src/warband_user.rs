use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "warband_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stable battle.net account identifier (`sub` claim of the userinfo
    /// response), never an access token.
    #[sea_orm(unique)]
    pub battlenet_id: String,
    pub battletag: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::warband_character::Entity")]
    Character,
}

impl Related<super::warband_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

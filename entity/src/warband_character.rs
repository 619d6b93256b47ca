use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "warband_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    /// Display name in the provider's original casing; lookup keys are
    /// normalized separately and never stored here.
    pub name: String,
    pub realm: String,
    pub level: i32,
    pub class: String,
    /// NULL means "no guild"; the empty string is never written.
    pub guild: Option<String>,
    pub keystone_rating: f64,
    pub spec: String,
    pub role: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warband_user::Entity",
        from = "Column::UserId",
        to = "super::warband_user::Column::Id"
    )]
    User,
}

impl Related<super::warband_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

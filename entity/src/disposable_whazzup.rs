use sea_orm::entity::prelude::*;

/// Last downloaded pilot list of an online network, one row per network.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "disposable_whazzup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub network: String,
    /// Raw JSON array of pilots exactly as the network published it
    #[sea_orm(column_type = "Text")]
    pub pilots: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

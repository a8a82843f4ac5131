use sea_orm::entity::prelude::*;

/// Pivot granting a rank access to a subfleet.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subfleet_rank")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rank_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub subfleet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

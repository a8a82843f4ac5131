use sea_orm::entity::prelude::*;

/// Pivot listing the type ratings held by a pilot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "typerating_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub typerating_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

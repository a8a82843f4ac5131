use sea_orm::entity::prelude::*;

/// Pivot listing the subfleets covered by a type rating.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "typerating_subfleet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub typerating_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub subfleet_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

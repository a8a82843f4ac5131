use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pirep_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pirep_id: String,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::UserState;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub airline_id: i32,
    pub rank_id: Option<i32>,
    pub curr_airport_id: Option<String>,
    pub home_airport_id: Option<String>,
    pub vatsim_id: Option<String>,
    pub ivao_id: Option<String>,
    pub state: UserState,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

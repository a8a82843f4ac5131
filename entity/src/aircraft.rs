use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AircraftState, AircraftStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aircraft")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub subfleet_id: i32,
    pub airport_id: Option<String>,
    pub registration: String,
    pub icao: Option<String>,
    pub state: AircraftState,
    pub status: AircraftStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

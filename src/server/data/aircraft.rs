use entity::sea_orm_active_enums::{AircraftState, AircraftStatus};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AircraftRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AircraftRepository<'a, C> {
    /// Creates a new instance of [`AircraftRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Parked, active aircraft of the given subfleets ordered by registration
    pub async fn get_parked_in_subfleets(
        &self,
        subfleet_ids: Vec<i32>,
    ) -> Result<Vec<entity::aircraft::Model>, DbErr> {
        if subfleet_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::State.eq(AircraftState::Parked))
            .filter(entity::aircraft::Column::Status.eq(AircraftStatus::Active))
            .filter(entity::aircraft::Column::SubfleetId.is_in(subfleet_ids))
            .order_by_asc(entity::aircraft::Column::Registration)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        aircraft_ids: Vec<i32>,
    ) -> Result<Vec<entity::aircraft::Model>, DbErr> {
        if aircraft_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Aircraft::find()
            .filter(entity::aircraft::Column::Id.is_in(aircraft_ids))
            .all(self.db)
            .await
    }
}

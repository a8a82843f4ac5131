use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct AirlineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirlineRepository<'a, C> {
    /// Creates a new instance of [`AirlineRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// ICAO codes of every active airline
    pub async fn get_active_icao_codes(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Airline::find()
            .select_only()
            .column(entity::airline::Column::Icao)
            .filter(entity::airline::Column::Active.eq(true))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Airlines by id, soft deleted ones included so old flights keep their code
    pub async fn get_by_ids_with_trashed(
        &self,
        airline_ids: Vec<i32>,
    ) -> Result<Vec<entity::airline::Model>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Airline::find()
            .filter(entity::airline::Column::Id.is_in(airline_ids))
            .all(self.db)
            .await
    }
}

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AirportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AirportRepository<'a, C> {
    /// Creates a new instance of [`AirportRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, airport_id: &str) -> Result<Option<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find_by_id(airport_id.to_string())
            .filter(entity::airport::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Airports by id, soft deleted ones included
    ///
    /// Flights and PIREPs keep pointing at airports after they were removed from the
    /// schedule, so map edges still need their coordinates.
    pub async fn get_by_ids_with_trashed(
        &self,
        airport_ids: Vec<String>,
    ) -> Result<Vec<entity::airport::Model>, DbErr> {
        if airport_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(airport_ids))
            .all(self.db)
            .await
    }

    /// Non deleted airports by id, ordered by id
    pub async fn get_by_ids(
        &self,
        airport_ids: Vec<String>,
    ) -> Result<Vec<entity::airport::Model>, DbErr> {
        if airport_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(airport_ids))
            .filter(entity::airport::Column::DeletedAt.is_null())
            .order_by_asc(entity::airport::Column::Id)
            .all(self.db)
            .await
    }

    /// Every non deleted airport, ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::airport::Model>, DbErr> {
        entity::prelude::Airport::find()
            .filter(entity::airport::Column::DeletedAt.is_null())
            .order_by_asc(entity::airport::Column::Id)
            .all(self.db)
            .await
    }
}

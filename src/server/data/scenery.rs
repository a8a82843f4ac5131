use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SceneryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SceneryRepository<'a, C> {
    /// Creates a new instance of [`SceneryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sceneries a pilot owns, ordered by airport
    pub async fn get_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::disposable_scenery::Model>, DbErr> {
        entity::prelude::DisposableScenery::find()
            .filter(entity::disposable_scenery::Column::UserId.eq(user_id))
            .order_by_asc(entity::disposable_scenery::Column::AirportId)
            .all(self.db)
            .await
    }
}

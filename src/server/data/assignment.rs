use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct AssignmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignmentRepository<'a, C> {
    /// Creates a new instance of [`AssignmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Flights assigned to a pilot for one month
    pub async fn get_flight_ids(
        &self,
        user_id: i32,
        year: i32,
        month: i32,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::DisposableAssignment::find()
            .select_only()
            .column(entity::disposable_assignment::Column::FlightId)
            .filter(entity::disposable_assignment::Column::UserId.eq(user_id))
            .filter(entity::disposable_assignment::Column::AssignmentYear.eq(year))
            .filter(entity::disposable_assignment::Column::AssignmentMonth.eq(month))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

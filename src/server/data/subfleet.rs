use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct SubfleetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubfleetRepository<'a, C> {
    /// Creates a new instance of [`SubfleetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Ids of every subfleet, or only those of one airline
    pub async fn get_ids(&self, airline_id: Option<i32>) -> Result<Vec<i32>, DbErr> {
        let mut select = entity::prelude::Subfleet::find()
            .select_only()
            .column(entity::subfleet::Column::Id);

        if let Some(airline_id) = airline_id {
            select = select.filter(entity::subfleet::Column::AirlineId.eq(airline_id));
        }

        select.into_tuple::<i32>().all(self.db).await
    }

    /// Subfleets a rank is allowed to fly
    pub async fn get_ids_for_rank(&self, rank_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::RankSubfleet::find()
            .select_only()
            .column(entity::rank_subfleet::Column::SubfleetId)
            .filter(entity::rank_subfleet::Column::RankId.eq(rank_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Subfleets covered by any of the pilot's type ratings
    pub async fn get_ids_for_typeratings(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let typerating_ids = entity::prelude::TyperatingUser::find()
            .select_only()
            .column(entity::typerating_user::Column::TyperatingId)
            .filter(entity::typerating_user::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        if typerating_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TyperatingSubfleet::find()
            .select_only()
            .column(entity::typerating_subfleet::Column::SubfleetId)
            .filter(entity::typerating_subfleet::Column::TyperatingId.is_in(typerating_ids))
            .distinct()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod get_ids {
        use flightdeck_test_utils::prelude::*;

        use crate::server::data::subfleet::SubfleetRepository;

        /// Expect the airline filter to narrow the subfleet ids
        #[tokio::test]
        async fn filters_by_airline() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::Subfleet)
                .build()
                .await?;
            test.ops().insert_subfleet(1, Some(1)).await?;
            test.ops().insert_subfleet(2, Some(2)).await?;
            test.ops().insert_subfleet(3, None).await?;

            let subfleet_repo = SubfleetRepository::new(&test.db);
            let mut all = subfleet_repo.get_ids(None).await?;
            all.sort();
            let airline = subfleet_repo.get_ids(Some(2)).await?;

            assert_eq!(all, vec![1, 2, 3]);
            assert_eq!(airline, vec![2]);

            Ok(())
        }
    }

    mod get_ids_for_typeratings {
        use flightdeck_test_utils::prelude::*;

        use crate::server::data::subfleet::SubfleetRepository;

        /// Expect subfleets of all held type ratings, without duplicates
        #[tokio::test]
        async fn collects_subfleets_of_all_ratings() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_table(entity::prelude::TyperatingUser)
                .with_table(entity::prelude::TyperatingSubfleet)
                .build()
                .await?;
            test.user().insert_typerating(7, 1, vec![10, 11]).await?;
            test.user().insert_typerating(7, 2, vec![11, 12]).await?;
            test.user().insert_typerating(8, 3, vec![13]).await?;

            let subfleet_repo = SubfleetRepository::new(&test.db);
            let mut ids = subfleet_repo.get_ids_for_typeratings(7).await?;
            ids.sort();

            assert_eq!(ids, vec![10, 11, 12]);

            Ok(())
        }
    }
}

use std::collections::HashMap;

use entity::sea_orm_active_enums::PirepState;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct PirepRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PirepRepository<'a, C> {
    /// Creates a new instance of [`PirepRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Accepted PIREPs of a pilot, most recently submitted first
    pub async fn get_accepted_by_user(
        &self,
        user_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<entity::pirep::Model>, DbErr> {
        let mut select = entity::prelude::Pirep::find()
            .filter(entity::pirep::Column::UserId.eq(user_id))
            .filter(entity::pirep::Column::State.eq(PirepState::Accepted))
            .filter(entity::pirep::Column::DeletedAt.is_null())
            .order_by_desc(entity::pirep::Column::SubmittedAt);

        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        select.all(self.db).await
    }

    /// Departure and arrival pairs of every accepted PIREP of a pilot
    pub async fn get_flown_city_pairs(
        &self,
        user_id: i32,
    ) -> Result<Vec<(String, String)>, DbErr> {
        entity::prelude::Pirep::find()
            .select_only()
            .column(entity::pirep::Column::DptAirportId)
            .column(entity::pirep::Column::ArrAirportId)
            .filter(entity::pirep::Column::UserId.eq(user_id))
            .filter(entity::pirep::Column::State.eq(PirepState::Accepted))
            .filter(entity::pirep::Column::DeletedAt.is_null())
            .distinct()
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await
    }

    /// Most recently updated in-progress PIREP of a pilot
    pub async fn get_latest_in_progress(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::pirep::Model>, DbErr> {
        entity::prelude::Pirep::find()
            .filter(entity::pirep::Column::UserId.eq(user_id))
            .filter(entity::pirep::Column::State.eq(PirepState::InProgress))
            .order_by_desc(entity::pirep::Column::UpdatedAt)
            .one(self.db)
            .await
    }

    /// One page of every PIREP that is no longer in progress, newest submission first
    ///
    /// `page` is zero based. Returns the page alongside the total number of matching PIREPs.
    pub async fn get_page_excluding_in_progress(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::pirep::Model, Option<entity::user::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let paginator = entity::prelude::Pirep::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::pirep::Column::State.ne(PirepState::InProgress))
            .filter(entity::pirep::Column::DeletedAt.is_null())
            .order_by_desc(entity::pirep::Column::SubmittedAt)
            .order_by_desc(entity::pirep::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let pireps = paginator.fetch_page(page).await?;

        Ok((pireps, total))
    }

    /// Number of comments per PIREP id, PIREPs without comments are absent from the map
    pub async fn get_comment_counts(
        &self,
        pirep_ids: Vec<String>,
    ) -> Result<HashMap<String, u64>, DbErr> {
        if pirep_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = entity::prelude::PirepComment::find()
            .select_only()
            .column(entity::pirep_comment::Column::PirepId)
            .column_as(entity::pirep_comment::Column::Id.count(), "comments")
            .filter(entity::pirep_comment::Column::PirepId.is_in(pirep_ids))
            .group_by(entity::pirep_comment::Column::PirepId)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(pirep_id, count)| (pirep_id, count.max(0) as u64))
            .collect())
    }
}

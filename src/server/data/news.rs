use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

pub struct NewsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NewsRepository<'a, C> {
    /// Creates a new instance of [`NewsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// One page of news with their authors, newest first
    ///
    /// `page` is zero based. Returns the page alongside the total number of news items.
    pub async fn get_page(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<(entity::news::Model, Option<entity::user::Model>)>, u64), DbErr> {
        let paginator = entity::prelude::News::find()
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::news::Column::CreatedAt)
            .order_by_desc(entity::news::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let news = paginator.fetch_page(page).await?;

        Ok((news, total))
    }
}

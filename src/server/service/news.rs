use sea_orm::DatabaseConnection;

use crate::{
    model::news::{NewsDto, NewsPageDto},
    server::{
        data::news::NewsRepository,
        error::Error,
        util::{
            name::private_name,
            page::{page_index, pagination},
        },
    },
};

pub const NEWS_PER_PAGE: u64 = 10;

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    /// Creates a new instance of [`NewsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of news, newest first, signed with the author's public name
    pub async fn get_page(&self, page: Option<u64>) -> Result<NewsPageDto, Error> {
        let page = page_index(page);
        let (news, total) = NewsRepository::new(self.db)
            .get_page(page, NEWS_PER_PAGE)
            .await?;

        let news = news
            .into_iter()
            .map(|(item, author)| NewsDto {
                id: item.id,
                subject: item.subject,
                body: item.body,
                author: author.map(|user| private_name(&user.name)),
                created_at: item.created_at,
            })
            .collect();

        Ok(NewsPageDto {
            news,
            pagination: pagination(page, NEWS_PER_PAGE, total),
        })
    }
}

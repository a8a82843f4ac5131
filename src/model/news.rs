use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::api::PaginationDto;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub subject: String,
    /// HTML body as authored, rendered unescaped by the frontend
    pub body: String,
    pub author: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewsPageDto {
    pub news: Vec<NewsDto>,
    pub pagination: PaginationDto,
}

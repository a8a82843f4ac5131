use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, news::NewsPageDto},
    server::{
        controller::pirep::PageParams, error::Error, model::app::AppState,
        service::news::NewsService,
    },
};

pub static NEWS_TAG: &str = "news";

/// Lists news items, newest first
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when listing news", body = NewsPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = NewsService::new(&state.db).get_page(params.page).await?;

    Ok((StatusCode::OK, axum::Json(page)))
}

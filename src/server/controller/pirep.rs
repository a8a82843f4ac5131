use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, pirep::PirepPageDto},
    server::{error::Error, model::app::AppState, service::pirep::PirepService},
};

pub static PIREP_TAG: &str = "pirep";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageParams {
    /// Page number starting at 1
    pub page: Option<u64>,
}

/// Lists submitted PIREPs, newest first
#[utoipa::path(
    get,
    path = "/api/pireps",
    tag = PIREP_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when listing PIREPs", body = PirepPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pireps(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let page = PirepService::new(&state.db).get_page(params.page).await?;

    Ok((StatusCode::OK, axum::Json(page)))
}

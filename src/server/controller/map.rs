use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, map::MapViewModel},
    server::{
        controller::util::viewer::get_viewer_id,
        error::Error,
        model::app::AppState,
        service::map::{mode::MapMode, MapOptions, MapService},
    },
};

pub static MAP_TAG: &str = "map";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MapParams {
    /// `user`, `fleet`, `aerodromes`, `assignment`, `scenery`, an airline id (`0` for all
    /// airlines) or an airport ICAO code
    pub source: Option<String>,
    /// Only show flights flagged visible, defaults to true
    pub visible: Option<bool>,
    pub limit: Option<u64>,
    /// Only show flights departing the viewer's current airport
    pub location: Option<bool>,
    /// Only show flights of the viewer's airline
    pub company: Option<bool>,
    pub popups: Option<bool>,
    /// Airline whose fleet is shown on the fleet map
    pub airline: Option<i32>,
}

impl From<&MapParams> for MapOptions {
    fn from(params: &MapParams) -> Self {
        Self {
            visible: params.visible.unwrap_or(true),
            limit: params.limit,
            location: params.location,
            company: params.company,
            popups: params.popups,
            airline: params.airline,
        }
    }
}

/// Builds a map for the requested source
///
/// # Responses
/// - 200 (Success): Markers, city pairs and layers of the map
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/map",
    tag = MAP_TAG,
    params(MapParams),
    responses(
        (status = 200, description = "Success when building the map", body = MapViewModel),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_map(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MapParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = get_viewer_id(&session).await?;

    let mode = MapMode::parse(params.source.as_deref());
    let options = MapOptions::from(&params);

    let map = MapService::new(&state.db, &state.options)
        .build_map_view(mode, viewer_id, options)
        .await?;

    Ok((StatusCode::OK, axum::Json(map)))
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, roster::RosterViewModel},
    server::{
        controller::util::viewer::get_viewer_id,
        error::Error,
        model::app::AppState,
        service::roster::{network::Network, RosterRequest, RosterService},
    },
};

pub static WHAZZUP_TAG: &str = "whazzup";

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct WhazzupParams {
    /// `vatsim` or `ivao`, anything else selects IVAO
    pub network: Option<String>,
    /// Name of the profile field holding the pilots' network ids
    pub field_name: Option<String>,
    /// Seconds before the cached network data is downloaded again
    pub refresh: Option<i64>,
}

/// Lists the airline's pilots currently online on a network
///
/// # Responses
/// - 200 (Success): Roster of online pilots, carries an error message when the network data
///   could not be refreshed
/// - 500 (Internal Server Error): Database or session error
#[utoipa::path(
    get,
    path = "/api/whazzup",
    tag = WHAZZUP_TAG,
    params(WhazzupParams),
    responses(
        (status = 200, description = "Success when building the roster", body = RosterViewModel),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_whazzup(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<WhazzupParams>,
) -> Result<impl IntoResponse, Error> {
    let viewer_id = get_viewer_id(&session).await?;

    let request = RosterRequest {
        network: Network::from_selection(params.network.as_deref()),
        field_name: params.field_name,
        refresh_seconds: params.refresh,
    };

    let roster = RosterService::new(&state.db, &state.http_client, &state.options)
        .build_roster(request, viewer_id)
        .await?;

    Ok((StatusCode::OK, axum::Json(roster)))
}

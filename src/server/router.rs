//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers the map, roster and listing endpoints with their OpenAPI specifications and serves
//! Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/map` - Route, fleet, aerodrome or scenery map
/// - `GET /api/whazzup` - Airline pilots online on VATSIM or IVAO
/// - `GET /api/pireps` - Paginated PIREP listing
/// - `GET /api/news` - Paginated news listing
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let state = AppState::new(db, http_client, &config);
/// let router = routes().with_state(state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Flightdeck", description = "Flightdeck API"), tags(
        (name = controller::map::MAP_TAG, description = "Route and fleet maps"),
        (name = controller::whazzup::WHAZZUP_TAG, description = "Online network rosters"),
        (name = controller::pirep::PIREP_TAG, description = "PIREP listing"),
        (name = controller::news::NEWS_TAG, description = "News listing"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::map::get_map))
        .routes(routes!(controller::whazzup::get_whazzup))
        .routes(routes!(controller::pirep::get_pireps))
        .routes(routes!(controller::news::get_news))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

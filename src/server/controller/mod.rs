//! HTTP controller endpoints for the flightdeck web API.
//!
//! Axum handlers for the maps, the online network rosters and the PIREP and news listings.
//! Controllers read the viewer from the session, call a service and return its view-model as
//! JSON. Endpoints are documented with utoipa.

pub mod map;
pub mod news;
pub mod pirep;
pub mod util;
pub mod whazzup;

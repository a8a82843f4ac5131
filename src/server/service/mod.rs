//! Service layer for business logic and orchestration.
//!
//! Services combine repository queries into the view-models served over HTTP: the flight map,
//! the online network roster and the PIREP and news listings. The network feed service is the
//! only one that talks to the outside world.

pub mod feed;
pub mod map;
pub mod news;
pub mod pirep;
pub mod roster;
pub mod subfleet;

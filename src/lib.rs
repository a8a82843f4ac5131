//! Route map and online network roster backend for virtual airline flight operations.
//!
//! `model` holds the view-models returned to the rendering layer, `server` holds everything
//! that produces them: repositories, services, HTTP controllers and startup.

pub mod model;
pub mod server;

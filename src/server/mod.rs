//! Server application core modules.
//!
//! This module contains the backend of flightdeck: database repositories over the flight
//! operations tables, the map aggregation and network roster services, the network feed
//! fetch-and-cache collaborator, HTTP controllers and application startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

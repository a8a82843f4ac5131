//! Test fixture modules for database and HTTP mock creation.
//!
//! Each submodule provides fixtures for a different part of the system:
//!
//! - `ops` - Flight operations data (airports, airlines, schedules, PIREPs, fleet, settings)
//! - `user` - Pilots with their profile fields, roles, ranks and type ratings
//! - `network` - Online network snapshots and mock feed endpoints
//!
//! `factory` gathers the pure model and payload factories of all of them.

pub mod network;
pub mod ops;
pub mod user;

pub mod factory {
    pub use crate::fixtures::{
        network::factory::*, ops::factory::*, user::factory::*,
    };
}

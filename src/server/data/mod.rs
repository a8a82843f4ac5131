//! Data access layer repositories.
//!
//! Every query the services need lives here as a named method on a repository, grouped by
//! table. Host owned tables (airports, flights, PIREPs, users...) are only read; the network
//! snapshot table is the one place this service writes to.

pub mod aircraft;
pub mod airline;
pub mod airport;
pub mod assignment;
pub mod flight;
pub mod news;
pub mod pirep;
pub mod scenery;
pub mod setting;
pub mod snapshot;
pub mod subfleet;
pub mod user;

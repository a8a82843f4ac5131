//! Database model type aliases.
//!
//! Shorthands for the SeaORM models used by the services, so signatures don't need to spell out
//! the `entity` crate paths.

pub type AirportModel = entity::airport::Model;

pub type FlightModel = entity::flight::Model;

/// Pilot report. Only `Accepted` reports show up on user maps and only `InProgress` reports are
/// attached to roster entries.
pub type PirepModel = entity::pirep::Model;

/// Airframe with its current location and subfleet.
pub type AircraftModel = entity::aircraft::Model;

pub type UserModel = entity::user::Model;

pub type SceneryModel = entity::disposable_scenery::Model;

/// Cached pilot list of one online network.
pub type NetworkSnapshotModel = entity::disposable_whazzup::Model;

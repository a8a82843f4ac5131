//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main flightdeck crate to keep fixture signatures short.

pub type AirportModel = entity::airport::Model;

pub type AirlineModel = entity::airline::Model;

pub type FlightModel = entity::flight::Model;

pub type PirepModel = entity::pirep::Model;

pub type AircraftModel = entity::aircraft::Model;

pub type UserModel = entity::user::Model;

pub type SceneryModel = entity::disposable_scenery::Model;

pub type NetworkSnapshotModel = entity::disposable_whazzup::Model;

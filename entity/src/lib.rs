//! SeaORM entities for the tables read by flightdeck.
//!
//! Most tables belong to the host flight-operations application and are only ever read.
//! The `disposable_*` tables are owned by this service and created by the `migration` crate.

pub mod prelude;

pub mod aircraft;
pub mod airline;
pub mod airport;
pub mod disposable_assignment;
pub mod disposable_scenery;
pub mod disposable_whazzup;
pub mod flight;
pub mod news;
pub mod pirep;
pub mod pirep_comment;
pub mod rank_subfleet;
pub mod role_user;
pub mod sea_orm_active_enums;
pub mod setting;
pub mod subfleet;
pub mod typerating_subfleet;
pub mod typerating_user;
pub mod user;
pub mod user_field;
pub mod user_field_value;

//! Utility functions and helpers for server operations.
//!
//! Small pure helpers shared by the services: time arithmetic for feed refreshes and online
//! durations, pilot display names and pagination math.

pub mod name;
pub mod page;
pub mod time;

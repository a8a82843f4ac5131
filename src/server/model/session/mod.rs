//! Session data models and utilities.
//!
//! Type-safe wrappers around the tower-sessions store (Redis-backed). Sessions are written by
//! the host application's login flow, this service only reads who the viewer is.

pub mod user;

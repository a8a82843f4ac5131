//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state, database
//! model type aliases and session data structures. These bridge the gap between database
//! entities and HTTP handlers.

pub mod app;
pub mod db;
pub mod session;

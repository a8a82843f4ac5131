//! Utility functions for controller request handling.
//!
//! Provides the viewer lookup shared by every controller rendering a view for the logged in
//! pilot.

pub mod viewer;

//! View-models handed to the rendering layer.
//!
//! These are plain serializable records. HTML generation, marker styling and overlay
//! scripting belong to whoever renders them.

pub mod api;
pub mod map;
pub mod news;
pub mod pirep;
pub mod roster;

//! Data models for restaurant directory entities.
//!
//! The backend serves a single entity type: `Restaurant`, a directory
//! entry with display fields, an optional photograph reference, and a
//! `LatLng` position for map-rendering consumers.

pub mod restaurant;

pub use restaurant::{LatLng, Restaurant};

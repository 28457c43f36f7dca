//! Domain model for the city guide.
//!
//! # Responsibility
//! - Define canonical place records shared by map, list and search views.
//! - Provide viewport descriptors derived from place coordinates.
//!
//! # Invariants
//! - Every place is identified by a stable `PlaceId`.
//! - Curated places (`is_recommended`) cannot be removed by user action.

pub mod place;
pub mod region;

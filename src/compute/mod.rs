//! Compute layer: the pure geometry the geofence decisions rest on.
//!
//! This module separates computation from event handling and state. It provides:
//! - Point-in-polygon testing (`geometry`)
//! - Perimeter sampling of spraying points (`sampling`)
//! - Coordinate and polygon validation (`validation`)
//! - GeoJSON export for rendering collaborators (`geojson`)
//!
//! Nothing here locks, allocates shared state or logs above `debug` level
//! except for recovered degenerate input.

pub mod geometry;
pub mod sampling;
pub mod validation;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use geometry::is_point_in_polygon;
pub use sampling::{sample_spraying_points, samples_per_edge};

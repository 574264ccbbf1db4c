//! # sprayzone-types
//!
//! Plain value types shared by the sprayzone geofence core:
//!
//! - **Coordinates**: `Coordinate`, a latitude/longitude pair treated as a planar point
//! - **Polygons**: `Polygon`, `Edge`, `SprayingPoint`
//! - **Events**: `TransitionKind`, `TransitionEvent`, `SprayingRequest`
//!
//! All types are serializable with Serde and convert to the `geo` crate's
//! primitives where a geometric counterpart exists.
//!
//! ## Examples
//!
//! ```rust
//! use sprayzone_types::coordinate::Coordinate;
//! use sprayzone_types::polygon::Polygon;
//!
//! let field = Polygon::new(vec![
//!     Coordinate::new(0.0, 0.0),
//!     Coordinate::new(0.0, 10.0),
//!     Coordinate::new(10.0, 10.0),
//! ]);
//! assert!(field.is_complete());
//! assert_eq!(field.edges().count(), 3);
//! ```

pub mod coordinate;
pub mod event;
pub mod polygon;

//! Polygon geofence evaluation and perimeter spraying-point planning.
//!
//! ## Features
//! - **Containment**: even-odd point-in-polygon testing on latitude/longitude pairs
//! - **Perimeter sampling**: evenly spaced spraying points along every polygon edge
//! - **Transition evaluation**: ENTER/DWELL/EXIT handling against a shared polygon
//! - **Shared polygon state**: copy-on-read store safe for one editor and many evaluators
//!
//! All geometry is planar: longitude is x, latitude is y, and spacings are
//! applied directly to degree deltas.
//!
//! ```rust
//! use sprayzone::{Config, Coordinate, MemorySink, PolygonEditor, PolygonStore};
//! use sprayzone::{EvaluatorBuilder, TransitionEvent};
//!
//! let store = PolygonStore::new();
//! let editor = PolygonEditor::new(store.clone(), Config::default())?;
//! for (lat, lng) in [(34.0200, -6.8430), (34.0220, -6.8430), (34.0220, -6.8400), (34.0200, -6.8400)] {
//!     editor.add_vertex(Coordinate::new(lat, lng))?;
//! }
//!
//! let evaluator = EvaluatorBuilder::new(store, MemorySink::new()).build()?;
//! let outcomes = evaluator.evaluate(&TransitionEvent::enter("34.020882_-6.841650"))?;
//! assert!(outcomes[0].is_sprayed());
//! # Ok::<(), sprayzone::SprayError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod identifier;
pub mod region;
pub mod sink;
pub mod store;

pub use builder::EvaluatorBuilder;
pub use config::Config;
pub use editor::{PolygonEditor, VertexAdded};
pub use error::{Result, SprayError};
pub use evaluator::{Outcome, TransitionEvaluator};
pub use identifier::{decode_request_id, encode_request_id};
pub use region::GeofenceRegion;
pub use sink::{FnSink, MemorySink, ZoneSink};
pub use store::{PolygonSource, PolygonStore};

pub use sprayzone_types::coordinate::Coordinate;
pub use sprayzone_types::event::{SprayingRequest, TransitionEvent, TransitionKind};
pub use sprayzone_types::polygon::{Edge, MIN_VERTICES, Polygon, SprayingPoint};

pub use compute::{is_point_in_polygon, sample_spraying_points};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, EvaluatorBuilder, Result, SprayError};

    pub use crate::{Coordinate, Polygon, SprayingPoint};

    pub use crate::{SprayingRequest, TransitionEvent, TransitionKind};

    pub use crate::{MemorySink, Outcome, PolygonEditor, PolygonStore, ZoneSink};

    pub use crate::{is_point_in_polygon, sample_spraying_points};
}

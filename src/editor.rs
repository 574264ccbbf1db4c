//! Vertex-by-vertex polygon editing.
//!
//! This is the map long-press flow: every new vertex is appended to the
//! shared store and, once the polygon is complete, the spraying points for
//! the whole perimeter are recomputed so the caller can redraw them.

use crate::compute::sample_spraying_points;
use crate::config::Config;
use crate::error::Result;
use crate::store::PolygonStore;
use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::polygon::{MIN_VERTICES, SprayingPoint};

/// Result of appending one vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexAdded {
    pub vertex_count: usize,
    /// The full perimeter plan; empty while the polygon is incomplete.
    pub spraying_points: Vec<SprayingPoint>,
}

impl VertexAdded {
    pub fn is_complete(&self) -> bool {
        self.vertex_count >= MIN_VERTICES
    }
}

/// Appends vertices to a [`PolygonStore`] and replans the perimeter.
pub struct PolygonEditor {
    store: PolygonStore,
    config: Config,
}

impl PolygonEditor {
    pub fn new(store: PolygonStore, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub fn store(&self) -> &PolygonStore {
        &self.store
    }

    /// Append `vertex` and return the updated spraying plan.
    ///
    /// ```rust
    /// use sprayzone::{Config, Coordinate, PolygonEditor, PolygonStore};
    ///
    /// let editor = PolygonEditor::new(PolygonStore::new(), Config::default().with_spacing(5.0))?;
    /// editor.add_vertex(Coordinate::new(0.0, 0.0))?;
    /// editor.add_vertex(Coordinate::new(0.0, 10.0))?;
    /// let added = editor.add_vertex(Coordinate::new(10.0, 10.0))?;
    /// assert_eq!(added.vertex_count, 3);
    /// assert!(!added.spraying_points.is_empty());
    /// # Ok::<(), sprayzone::SprayError>(())
    /// ```
    pub fn add_vertex(&self, vertex: Coordinate) -> Result<VertexAdded> {
        let vertex_count = self.store.add_vertex(vertex)?;

        if vertex_count < MIN_VERTICES {
            log::info!(
                "A polygon needs at least {} points, have {}",
                MIN_VERTICES,
                vertex_count
            );
            return Ok(VertexAdded {
                vertex_count,
                spraying_points: Vec::new(),
            });
        }

        Ok(VertexAdded {
            vertex_count,
            spraying_points: self.spraying_points(),
        })
    }

    /// Spraying points for the store's current polygon.
    pub fn spraying_points(&self) -> Vec<SprayingPoint> {
        sample_spraying_points(&self.store.snapshot(), self.config.spacing)
    }
}

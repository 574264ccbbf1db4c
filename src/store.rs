//! Thread-safe polygon state shared between the vertex editor and the
//! geofence evaluator.
//!
//! `PolygonStore` wraps the polygon in `Arc<RwLock<Polygon>>`. Writers append
//! vertices under the write lock; readers take a copy under the read lock and
//! run all geometry on that copy, so a containment test never observes a
//! polygon that changes while it iterates.
//!
//! ```rust
//! use sprayzone::{Coordinate, PolygonStore};
//! use std::thread;
//!
//! let store = PolygonStore::new();
//! let writer = store.clone();
//!
//! let handle = thread::spawn(move || {
//!     writer.add_vertex(Coordinate::new(0.0, 0.0)).unwrap();
//! });
//! handle.join().unwrap();
//!
//! assert_eq!(store.snapshot().len(), 1);
//! ```

use crate::compute::validation::validate_coordinate;
use crate::error::Result;
use parking_lot::RwLock;
use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::polygon::Polygon;
use std::sync::Arc;

/// Anything the evaluator can read a consistent polygon from.
pub trait PolygonSource: Send + Sync {
    /// A copy of the current polygon, unaffected by later writes.
    fn snapshot(&self) -> Polygon;
}

/// Cloneable handle to a shared polygon.
///
/// Clones refer to the same polygon. Reads run concurrently; writes take
/// exclusive access for the duration of a single append or replace.
#[derive(Clone, Default)]
pub struct PolygonStore {
    inner: Arc<RwLock<Polygon>>,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_polygon(polygon: Polygon) -> Self {
        Self {
            inner: Arc::new(RwLock::new(polygon)),
        }
    }

    /// Append a vertex and return the new vertex count.
    ///
    /// The coordinate must be finite and within latitude/longitude range.
    /// A vertex equal to its predecessor is accepted but logged, since it
    /// produces a zero-length edge.
    pub fn add_vertex(&self, vertex: Coordinate) -> Result<usize> {
        validate_coordinate(&vertex)?;

        let mut polygon = self.inner.write();
        if polygon.vertices().last() == Some(&vertex) {
            log::warn!(
                "Vertex ({}, {}) repeats the previous vertex and creates a zero-length edge",
                vertex.lat(),
                vertex.lng()
            );
        }
        polygon.push(vertex);
        Ok(polygon.len())
    }

    /// Replace the whole polygon, returning the previous one.
    pub fn replace(&self, polygon: Polygon) -> Polygon {
        std::mem::replace(&mut *self.inner.write(), polygon)
    }

    /// Remove every vertex.
    pub fn clear(&self) {
        *self.inner.write() = Polygon::default();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.inner.read().is_complete()
    }

    pub fn snapshot(&self) -> Polygon {
        self.inner.read().clone()
    }
}

impl PolygonSource for PolygonStore {
    fn snapshot(&self) -> Polygon {
        PolygonStore::snapshot(self)
    }
}

impl PolygonSource for Polygon {
    fn snapshot(&self) -> Polygon {
        self.clone()
    }
}

impl<T: PolygonSource + ?Sized> PolygonSource for Arc<T> {
    fn snapshot(&self) -> Polygon {
        (**self).snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SprayError;
    use std::thread;

    #[test]
    fn test_add_vertex_counts() {
        let store = PolygonStore::new();
        assert!(store.is_empty());
        assert_eq!(store.add_vertex(Coordinate::new(0.0, 0.0)).unwrap(), 1);
        assert_eq!(store.add_vertex(Coordinate::new(0.0, 1.0)).unwrap(), 2);
        assert!(!store.is_complete());
        assert_eq!(store.add_vertex(Coordinate::new(1.0, 1.0)).unwrap(), 3);
        assert!(store.is_complete());
    }

    #[test]
    fn test_add_vertex_rejects_invalid_coordinates() {
        let store = PolygonStore::new();
        let err = store.add_vertex(Coordinate::new(f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, SprayError::InvalidInput(_)));
        assert!(store.add_vertex(Coordinate::new(0.0, 181.0)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeated_vertex_is_accepted() {
        let store = PolygonStore::new();
        store.add_vertex(Coordinate::new(1.0, 1.0)).unwrap();
        assert_eq!(store.add_vertex(Coordinate::new(1.0, 1.0)).unwrap(), 2);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_writes() {
        let store = PolygonStore::new();
        store.add_vertex(Coordinate::new(0.0, 0.0)).unwrap();
        let snap = store.snapshot();
        store.add_vertex(Coordinate::new(1.0, 1.0)).unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_and_clear() {
        let store = PolygonStore::new();
        store.add_vertex(Coordinate::new(0.0, 0.0)).unwrap();

        let square = Polygon::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(1.0, 0.0),
        ]);
        let previous = store.replace(square.clone());
        assert_eq!(previous.len(), 1);
        assert_eq!(store.snapshot(), square);

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = PolygonStore::new();
        let other = store.clone();
        other.add_vertex(Coordinate::new(5.0, 5.0)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let store = PolygonStore::new();

        let writers: Vec<_> = (0..4)
            .map(|w| {
                let store = store.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        store
                            .add_vertex(Coordinate::new(w as f64, i as f64))
                            .unwrap();
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let snap = PolygonSource::snapshot(&store);
                        assert!(snap.len() <= 200);
                        assert!(snap.vertices().iter().all(|v| v.is_finite()));
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 200);
    }

    #[test]
    fn test_plain_polygon_is_a_source() {
        let poly = Polygon::new(vec![Coordinate::new(0.0, 0.0)]);
        assert_eq!(PolygonSource::snapshot(&poly), poly);
        let shared: Arc<dyn PolygonSource> = Arc::new(poly.clone());
        assert_eq!(shared.snapshot(), poly);
    }
}

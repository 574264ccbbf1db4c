use crate::coordinate::Coordinate;
use geo::{Coord, LineString};
use serde::{Deserialize, Serialize};

/// Fewest vertices a polygon needs before any geometry is defined on it.
pub const MIN_VERTICES: usize = 3;

/// An ordered ring of coordinates.
///
/// Consecutive vertices define the edges and the last vertex connects back to
/// the first. The ring is stored open: the first vertex is never repeated at
/// the end. Polygons with fewer than [`MIN_VERTICES`] vertices are
/// *incomplete* and every geometric operation on them is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    pub fn new(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the polygon has enough vertices to enclose an area.
    pub fn is_complete(&self) -> bool {
        self.vertices.len() >= MIN_VERTICES
    }

    /// Append a vertex at the end of the ring.
    pub fn push(&mut self, vertex: Coordinate) {
        self.vertices.push(vertex);
    }

    /// Iterate the edges in ring order, including the closing edge.
    ///
    /// Incomplete polygons yield no edges.
    ///
    /// ```
    /// use sprayzone_types::coordinate::Coordinate;
    /// use sprayzone_types::polygon::Polygon;
    ///
    /// let tri = Polygon::new(vec![
    ///     Coordinate::new(0.0, 0.0),
    ///     Coordinate::new(0.0, 1.0),
    ///     Coordinate::new(1.0, 0.0),
    /// ]);
    /// let last = tri.edges().last().unwrap();
    /// assert_eq!(last.end, Coordinate::new(0.0, 0.0));
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = if self.is_complete() {
            self.vertices.len()
        } else {
            0
        };
        (0..n).map(move |index| Edge {
            index,
            start: self.vertices[index],
            end: self.vertices[(index + 1) % n],
        })
    }

    /// Convert to a closed `geo::Polygon` without interior rings.
    pub fn to_geo(&self) -> Option<geo::Polygon<f64>> {
        if !self.is_complete() {
            return None;
        }
        let ring: Vec<Coord<f64>> = self.vertices.iter().map(|v| Coord::from(*v)).collect();
        Some(geo::Polygon::new(LineString::from(ring), vec![]))
    }
}

impl From<Vec<Coordinate>> for Polygon {
    fn from(vertices: Vec<Coordinate>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Coordinate> for Polygon {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A directed polygon edge from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Position of `start` in the polygon's vertex list.
    pub index: usize,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Edge {
    /// Direction vector as `(dx, dy)` = (longitude delta, latitude delta).
    #[inline]
    pub fn delta(&self) -> (f64, f64) {
        (
            self.end.longitude - self.start.longitude,
            self.end.latitude - self.start.latitude,
        )
    }

    /// Planar length in degree units.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.planar_distance(&self.end)
    }

    /// Linear interpolation along the edge; `t = 0` is `start`, `t = 1` is `end`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Coordinate {
        let (dx, dy) = self.delta();
        Coordinate::new(self.start.latitude + t * dy, self.start.longitude + t * dx)
    }

    /// Whether both endpoints share a latitude.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.latitude == self.end.latitude
    }
}

/// A perimeter location selected for treatment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SprayingPoint {
    pub coordinate: Coordinate,
    /// Index of the polygon edge the point was sampled from.
    pub edge: usize,
}

impl SprayingPoint {
    pub fn new(coordinate: Coordinate, edge: usize) -> Self {
        Self { coordinate, edge }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

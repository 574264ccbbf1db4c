//! Perimeter sampling of spraying points.
//!
//! Each edge is sampled independently at evenly spaced parameters
//! `t = j / (n - 1)`, so both endpoints of every edge are always emitted and
//! vertices shared by adjacent edges appear twice in the output.

use sprayzone_types::polygon::{Polygon, SprayingPoint};

/// Fewest samples taken on any edge: its two endpoints.
pub const MIN_SAMPLES_PER_EDGE: usize = 2;

/// Most samples taken on any edge. Longer edges are skipped by
/// [`sample_spraying_points`].
pub const MAX_SAMPLES_PER_EDGE: usize = 1_000_000;

/// Number of samples to take on an edge of `length` at `spacing`.
///
/// This is `ceil(length / spacing)`, raised to [`MIN_SAMPLES_PER_EDGE`] so the
/// parametrization never divides by zero on short or zero-length edges, and
/// clamped to [`MAX_SAMPLES_PER_EDGE`].
///
/// ```
/// use sprayzone::compute::samples_per_edge;
///
/// assert_eq!(samples_per_edge(10.0, 5.0), 2);
/// assert_eq!(samples_per_edge(10.0, 1.45), 7);
/// assert_eq!(samples_per_edge(0.5, 1.45), 2);
/// assert_eq!(samples_per_edge(0.0, 1.45), 2);
/// assert_eq!(samples_per_edge(1.0, 1e-300), 1_000_000);
/// ```
pub fn samples_per_edge(length: f64, spacing: f64) -> usize {
    let raw = (length / spacing).ceil();
    if raw.is_nan() || raw <= MIN_SAMPLES_PER_EDGE as f64 {
        MIN_SAMPLES_PER_EDGE
    } else if raw >= MAX_SAMPLES_PER_EDGE as f64 {
        MAX_SAMPLES_PER_EDGE
    } else {
        raw as usize
    }
}

fn exceeds_sample_cap(length: f64, spacing: f64) -> bool {
    let raw = (length / spacing).ceil();
    !raw.is_finite() || raw > MAX_SAMPLES_PER_EDGE as f64
}

/// Sample spraying points around the perimeter of `polygon`.
///
/// Edges are visited in polygon order starting at the first vertex and
/// points within an edge in increasing distance from its start. Duplicated
/// shared vertices are kept.
///
/// Returns an empty vector when the polygon is incomplete or `spacing` is not
/// a positive finite number. Edges that are non-finite, or that would need
/// more than [`MAX_SAMPLES_PER_EDGE`] samples at `spacing`, are skipped.
///
/// # Examples
///
/// ```
/// use sprayzone::compute::sample_spraying_points;
/// use sprayzone::{Coordinate, Polygon};
///
/// let square = Polygon::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 10.0),
///     Coordinate::new(10.0, 10.0),
///     Coordinate::new(10.0, 0.0),
/// ]);
///
/// let points = sample_spraying_points(&square, 5.0);
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].coordinate, Coordinate::new(0.0, 0.0));
/// assert_eq!(points[1].coordinate, points[2].coordinate);
/// ```
pub fn sample_spraying_points(polygon: &Polygon, spacing: f64) -> Vec<SprayingPoint> {
    if !polygon.is_complete() {
        log::debug!(
            "Skipping perimeter sampling for incomplete polygon with {} vertices",
            polygon.len()
        );
        return Vec::new();
    }

    if !spacing.is_finite() || spacing <= 0.0 {
        log::warn!("Rejecting perimeter sampling with non-positive spacing {}", spacing);
        return Vec::new();
    }

    let mut points = Vec::new();

    for edge in polygon.edges() {
        let length = edge.length();

        if !length.is_finite() || exceeds_sample_cap(length, spacing) {
            log::warn!(
                "Skipping edge {}: length {} cannot be sampled at spacing {}",
                edge.index,
                length,
                spacing
            );
            continue;
        }

        if length == 0.0 {
            log::warn!(
                "Edge {} has zero length, emitting its endpoints only",
                edge.index
            );
        }

        let n = samples_per_edge(length, spacing);
        let last = (n - 1) as f64;
        points.reserve(n);

        for j in 0..n {
            let t = j as f64 / last;
            points.push(SprayingPoint::new(edge.point_at(t), edge.index));
        }
    }

    points
}

//! Validation for coordinates and polygons.

use crate::error::{Result, SprayError};
use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::polygon::{MIN_VERTICES, Polygon};

/// Validates a coordinate has finite, in-range latitude and longitude.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use sprayzone::compute::validation::validate_coordinate;
/// use sprayzone::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(34.020882, -6.841650)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, 0.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(0.0, f64::NAN)).is_err());
/// ```
pub fn validate_coordinate(coordinate: &Coordinate) -> Result<()> {
    let (lat, lng) = (coordinate.lat(), coordinate.lng());

    if !lat.is_finite() {
        return Err(SprayError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(SprayError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(SprayError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lng) {
        return Err(SprayError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates every vertex and edge of a polygon.
///
/// Fails with `IncompletePolygon` below three vertices, `InvalidInput` for a
/// bad vertex, and `DegenerateEdge` for the first edge whose endpoints
/// coincide. The geometry functions accept all of these; this check is for
/// callers that want to reject such input up front.
///
/// # Examples
///
/// ```
/// use sprayzone::compute::validation::validate_polygon;
/// use sprayzone::{Coordinate, Polygon, SprayError};
///
/// let repeated = Polygon::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(1.0, 0.0),
/// ]);
/// assert!(matches!(
///     validate_polygon(&repeated),
///     Err(SprayError::DegenerateEdge { index: 1 })
/// ));
/// ```
pub fn validate_polygon(polygon: &Polygon) -> Result<()> {
    if polygon.len() < MIN_VERTICES {
        return Err(SprayError::IncompletePolygon {
            vertices: polygon.len(),
        });
    }

    for (idx, vertex) in polygon.vertices().iter().enumerate() {
        validate_coordinate(vertex)
            .map_err(|e| SprayError::InvalidInput(format!("Vertex at index {}: {}", idx, e)))?;
    }

    if let Some(edge) = polygon.edges().find(|edge| edge.start == edge.end) {
        return Err(SprayError::DegenerateEdge { index: edge.index });
    }

    Ok(())
}

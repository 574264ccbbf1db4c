//! GeoJSON export for polygons and spraying points.
//!
//! Coordinates are written in GeoJSON order: `[longitude, latitude]`.

use crate::error::{Result, SprayError};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use sprayzone_types::polygon::{Polygon, SprayingPoint};

/// Converts a polygon to a GeoJSON Polygon geometry with a closed ring.
pub fn polygon_to_geojson(polygon: &Polygon) -> Result<String> {
    if !polygon.is_complete() {
        return Err(SprayError::IncompletePolygon {
            vertices: polygon.len(),
        });
    }

    let mut ring: Vec<Vec<f64>> = polygon
        .vertices()
        .iter()
        .map(|v| vec![v.lng(), v.lat()])
        .collect();
    ring.push(ring[0].clone());

    let geom = Geometry::new(Value::Polygon(vec![ring]));

    serde_json::to_string(&geom)
        .map_err(|e| SprayError::Serialization(format!("Failed to serialize polygon: {}", e)))
}

/// Converts spraying points to a FeatureCollection of Point features.
///
/// Each feature carries the source edge index in its `edge` property and its
/// position in the sequence in `order`.
pub fn spraying_points_to_geojson(points: &[SprayingPoint]) -> Result<String> {
    let features = points
        .iter()
        .enumerate()
        .map(|(order, point)| {
            let mut properties = JsonObject::new();
            properties.insert("edge".to_string(), point.edge.into());
            properties.insert("order".to_string(), order.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    point.coordinate.lng(),
                    point.coordinate.lat(),
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        SprayError::Serialization(format!("Failed to serialize spraying points: {}", e))
    })
}

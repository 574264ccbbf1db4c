//! Point-in-polygon testing in planar (longitude = x, latitude = y) space.

use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::polygon::{Edge, Polygon};

/// Test whether `point` lies inside `polygon` using the even-odd rule.
///
/// A horizontal ray is cast from the point towards increasing longitude and
/// the containment flag toggles at every edge it crosses. Each edge is taken
/// half-open in latitude (`lower <= lat < upper`), so a vertex shared by two
/// edges is counted once and horizontal edges never count.
///
/// Polygons with fewer than three vertices contain nothing.
///
/// # Examples
///
/// ```
/// use sprayzone::compute::is_point_in_polygon;
/// use sprayzone::{Coordinate, Polygon};
///
/// let square = Polygon::new(vec![
///     Coordinate::new(0.0, 0.0),
///     Coordinate::new(0.0, 10.0),
///     Coordinate::new(10.0, 10.0),
///     Coordinate::new(10.0, 0.0),
/// ]);
///
/// assert!(is_point_in_polygon(&square, &Coordinate::new(5.0, 5.0)));
/// assert!(!is_point_in_polygon(&square, &Coordinate::new(15.0, 5.0)));
/// ```
pub fn is_point_in_polygon(polygon: &Polygon, point: &Coordinate) -> bool {
    polygon
        .edges()
        .filter(|edge| ray_crosses(edge, point))
        .count()
        % 2
        == 1
}

/// Whether the rightward horizontal ray from `point` crosses `edge`.
fn ray_crosses(edge: &Edge, point: &Coordinate) -> bool {
    let (a, b) = (edge.start, edge.end);

    if edge.is_horizontal() {
        return false;
    }

    let spans = (a.lat() <= point.lat() && point.lat() < b.lat())
        || (b.lat() <= point.lat() && point.lat() < a.lat());
    if !spans {
        return false;
    }

    let crossing_lng =
        (b.lng() - a.lng()) * (point.lat() - a.lat()) / (b.lat() - a.lat()) + a.lng();
    point.lng() < crossing_lng
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Contains;

    fn square() -> Polygon {
        Polygon::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ])
    }

    /// An L-shaped (concave) polygon.
    fn ell() -> Polygon {
        Polygon::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 6.0),
            Coordinate::new(2.0, 6.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(6.0, 2.0),
            Coordinate::new(6.0, 0.0),
        ])
    }

    #[test]
    fn test_point_inside_square() {
        assert!(is_point_in_polygon(&square(), &Coordinate::new(5.0, 5.0)));
        assert!(is_point_in_polygon(&square(), &Coordinate::new(0.1, 9.9)));
    }

    #[test]
    fn test_point_outside_square() {
        let poly = square();
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(-1.0, 5.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(5.0, 11.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(20.0, 20.0)));
    }

    #[test]
    fn test_incomplete_polygons_contain_nothing() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!(!is_point_in_polygon(&Polygon::default(), &origin));
        assert!(!is_point_in_polygon(&Polygon::new(vec![origin]), &origin));
        let segment = Polygon::new(vec![Coordinate::new(-1.0, -1.0), Coordinate::new(1.0, 1.0)]);
        assert!(!is_point_in_polygon(&segment, &origin));
    }

    #[test]
    fn test_concave_notch_is_outside() {
        let poly = ell();
        assert!(is_point_in_polygon(&poly, &Coordinate::new(1.0, 1.0)));
        assert!(is_point_in_polygon(&poly, &Coordinate::new(5.0, 1.0)));
        assert!(is_point_in_polygon(&poly, &Coordinate::new(1.0, 5.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(4.0, 4.0)));
    }

    #[test]
    fn test_boundary_behaviour_is_half_open() {
        let poly = square();
        // Lower-latitude and lower-longitude sides count as inside.
        assert!(is_point_in_polygon(&poly, &Coordinate::new(0.0, 5.0)));
        assert!(is_point_in_polygon(&poly, &Coordinate::new(5.0, 0.0)));
        // Upper-latitude and upper-longitude sides count as outside.
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(10.0, 5.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(5.0, 10.0)));
        assert!(is_point_in_polygon(&poly, &Coordinate::new(0.0, 0.0)));
    }

    #[test]
    fn test_horizontal_edges_do_not_divide_by_zero() {
        let poly = square();
        // Ray at exactly the latitude of both horizontal edges.
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(10.0, -5.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(0.0, -5.0)));
    }

    #[test]
    fn test_ray_through_vertex_counts_once() {
        let diamond = Polygon::new(vec![
            Coordinate::new(0.0, 5.0),
            Coordinate::new(5.0, 10.0),
            Coordinate::new(10.0, 5.0),
            Coordinate::new(5.0, 0.0),
        ]);
        // Ray at latitude 5 passes through the vertex at (5, 10).
        assert!(is_point_in_polygon(&diamond, &Coordinate::new(5.0, 5.0)));
        assert!(!is_point_in_polygon(&diamond, &Coordinate::new(5.0, -1.0)));
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let mut reversed = square().vertices().to_vec();
        reversed.reverse();
        let poly = Polygon::new(reversed);
        assert!(is_point_in_polygon(&poly, &Coordinate::new(5.0, 5.0)));
        assert!(!is_point_in_polygon(&poly, &Coordinate::new(-5.0, 5.0)));
    }

    #[test]
    fn test_agrees_with_geo_for_strict_interior_and_exterior() {
        let poly = ell();
        let geo_poly = poly.to_geo().unwrap();
        for lat in [0.5, 1.5, 3.0, 4.5, 5.5, 7.0] {
            for lng in [-1.0, 0.5, 1.5, 3.0, 4.5, 5.5, 7.0] {
                let c = Coordinate::new(lat, lng);
                assert_eq!(
                    is_point_in_polygon(&poly, &c),
                    geo_poly.contains(&c.to_point()),
                    "disagreement at {:?}",
                    c
                );
            }
        }
    }

    #[test]
    fn test_real_world_field() {
        let field = Polygon::new(vec![
            Coordinate::new(34.0200, -6.8430),
            Coordinate::new(34.0220, -6.8430),
            Coordinate::new(34.0220, -6.8400),
            Coordinate::new(34.0200, -6.8400),
        ]);
        assert!(is_point_in_polygon(&field, &Coordinate::new(34.020882, -6.841650)));
        assert!(!is_point_in_polygon(&field, &Coordinate::new(34.030000, -6.841650)));
    }
}

use geo::{Coord, Distance, Euclidean, Point};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
///
/// Values are never normalized. All distance and direction math treats the
/// pair as a planar point with `x = longitude` and `y = latitude`.
///
/// # Examples
///
/// ```
/// use sprayzone_types::coordinate::Coordinate;
///
/// let rabat = Coordinate::new(34.020882, -6.841650);
/// assert_eq!(rabat.lat(), 34.020882);
/// assert_eq!(rabat.x(), -6.841650);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude, in that order.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.longitude
    }

    /// Planar x (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.longitude
    }

    /// Planar y (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.latitude
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Straight-line distance in degree units.
    ///
    /// This is not a geodesic distance; it is only meaningful for the planar
    /// approximation the sampler works in.
    ///
    /// ```
    /// use sprayzone_types::coordinate::Coordinate;
    ///
    /// let a = Coordinate::new(0.0, 0.0);
    /// let b = Coordinate::new(4.0, 3.0);
    /// assert_eq!(a.planar_distance(&b), 5.0);
    /// ```
    #[inline]
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        Euclidean.distance(self.to_point(), other.to_point())
    }

    /// Convert to a `geo::Point` (x = longitude, y = latitude).
    #[inline]
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(c: Coord<f64>) -> Self {
        Coordinate::new(c.y, c.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        c.to_point()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

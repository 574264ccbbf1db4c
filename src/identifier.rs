//! Request identifier codec.
//!
//! Geofences are registered with a request id that encodes the triggering
//! coordinate as `"<lat>_<lng>"`. `f64`'s `Display` prints the shortest
//! representation that parses back to the same value, so encoding and then
//! decoding is exact.

use crate::error::{Result, SprayError};
use sprayzone_types::coordinate::Coordinate;

pub const SEPARATOR: char = '_';

/// Encode a coordinate as a request id.
///
/// ```
/// use sprayzone::identifier::encode_request_id;
/// use sprayzone::Coordinate;
///
/// assert_eq!(encode_request_id(&Coordinate::new(34.020882, -6.84165)), "34.020882_-6.84165");
/// ```
pub fn encode_request_id(coordinate: &Coordinate) -> String {
    format!("{}{}{}", coordinate.lat(), SEPARATOR, coordinate.lng())
}

/// Decode a `"<lat>_<lng>"` request id.
///
/// The id must split into exactly two parts, each a finite floating point
/// number. Surrounding whitespace in a part is ignored.
///
/// ```
/// use sprayzone::identifier::decode_request_id;
/// use sprayzone::Coordinate;
///
/// let c = decode_request_id("34.020882_-6.841650").unwrap();
/// assert_eq!(c, Coordinate::new(34.020882, -6.841650));
/// assert!(decode_request_id("SOME_GEOFENCE_ID").is_err());
/// ```
pub fn decode_request_id(id: &str) -> Result<Coordinate> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    let [lat, lng] = parts.as_slice() else {
        return Err(malformed(
            id,
            format!("expected 2 parts separated by '{}', found {}", SEPARATOR, parts.len()),
        ));
    };

    let latitude = parse_component(id, "latitude", lat)?;
    let longitude = parse_component(id, "longitude", lng)?;

    Ok(Coordinate::new(latitude, longitude))
}

fn parse_component(id: &str, name: &str, raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| malformed(id, format!("{} {:?} is not a number: {}", name, raw, e)))?;

    if !value.is_finite() {
        return Err(malformed(id, format!("{} must be finite, got: {}", name, value)));
    }

    Ok(value)
}

fn malformed(id: &str, reason: String) -> SprayError {
    SprayError::MalformedIdentifier {
        id: id.to_string(),
        reason,
    }
}

//! Descriptors for the circular geofences the monitoring platform watches.
//!
//! The crate never registers anything with the platform. A `GeofenceRegion`
//! only carries what a registration needs, with a request id that the
//! evaluator can decode back into the region's center.

use crate::config::Config;
use crate::error::Result;
use crate::identifier::encode_request_id;
use serde::{Deserialize, Serialize};
use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::event::TransitionKind;

/// A circular geofence around a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRegion {
    pub request_id: String,
    pub center: Coordinate,
    /// Radius in metres, as the platform expects it.
    pub radius: f64,
    /// Transitions the platform should report for this region.
    pub transitions: Vec<TransitionKind>,
}

impl GeofenceRegion {
    /// Region around `center` using the configured radius, reporting ENTER,
    /// DWELL and EXIT.
    ///
    /// ```
    /// use sprayzone::{Config, Coordinate, GeofenceRegion};
    ///
    /// let region = GeofenceRegion::around(Coordinate::new(34.020882, -6.84165), &Config::default());
    /// assert_eq!(region.request_id, "34.020882_-6.84165");
    /// assert_eq!(region.radius, 200.0);
    /// ```
    pub fn around(center: Coordinate, config: &Config) -> Self {
        Self {
            request_id: encode_request_id(&center),
            center,
            radius: config.geofence_radius,
            transitions: vec![
                TransitionKind::Enter,
                TransitionKind::Dwell,
                TransitionKind::Exit,
            ],
        }
    }

    /// Bitmask of the platform transition codes this region reports.
    pub fn transition_mask(&self) -> i32 {
        self.transitions.iter().fold(0, |mask, kind| mask | kind.code())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

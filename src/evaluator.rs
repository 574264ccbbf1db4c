//! Geofence transition evaluation.
//!
//! The evaluator ties a platform transition to the geometry: for ENTER it
//! decodes the trigger coordinate from each request id, tests it against a
//! snapshot of the polygon and, when the trigger is inside, samples the
//! perimeter and hands the points to the sink. DWELL and EXIT only reach the
//! sink's hooks.
//!
//! Nothing that goes wrong for a single request id stops the others; those
//! failures come back as [`Outcome::Skipped`]. Only a failed platform event
//! or an unknown transition kind makes [`TransitionEvaluator::evaluate`]
//! return an error.

use crate::compute::{is_point_in_polygon, sample_spraying_points};
use crate::config::Config;
use crate::error::{Result, SprayError};
use crate::identifier::decode_request_id;
use crate::sink::ZoneSink;
use crate::store::PolygonSource;
use sprayzone_types::coordinate::Coordinate;
use sprayzone_types::event::{SprayingRequest, TransitionEvent, TransitionKind};
use sprayzone_types::polygon::{Polygon, SprayingPoint};

/// What happened to one request id of a transition event.
#[derive(Debug)]
pub enum Outcome {
    /// Trigger inside the polygon; `points` spraying points were delivered.
    Sprayed { request_id: String, points: usize },
    /// Trigger outside the polygon, or the polygon is incomplete.
    Outside { request_id: String },
    /// The request id could not be decoded or the sink refused it.
    Skipped {
        request_id: String,
        error: SprayError,
    },
    Dwelling { request_id: String },
    Exited { request_id: String },
}

impl Outcome {
    pub fn request_id(&self) -> &str {
        match self {
            Outcome::Sprayed { request_id, .. }
            | Outcome::Outside { request_id }
            | Outcome::Skipped { request_id, .. }
            | Outcome::Dwelling { request_id }
            | Outcome::Exited { request_id } => request_id,
        }
    }

    pub fn is_sprayed(&self) -> bool {
        matches!(self, Outcome::Sprayed { .. })
    }
}

/// Reacts to geofence transitions against a shared polygon.
///
/// The evaluator holds no mutable state of its own and can be shared across
/// threads and invoked concurrently for independent events.
///
/// # Examples
///
/// ```rust
/// use sprayzone::{Config, Coordinate, MemorySink, Polygon, TransitionEvaluator, TransitionEvent};
///
/// let field = Polygon::new(vec![
///     Coordinate::new(34.0200, -6.8430),
///     Coordinate::new(34.0220, -6.8430),
///     Coordinate::new(34.0220, -6.8400),
///     Coordinate::new(34.0200, -6.8400),
/// ]);
/// let evaluator = TransitionEvaluator::new(Config::default(), field, MemorySink::new())?;
///
/// let outcomes = evaluator.evaluate(&TransitionEvent::enter("34.020882_-6.841650"))?;
/// assert!(outcomes[0].is_sprayed());
/// assert_eq!(evaluator.sink().entered().len(), 1);
/// # Ok::<(), sprayzone::SprayError>(())
/// ```
pub struct TransitionEvaluator<P, S> {
    config: Config,
    polygon: P,
    sink: S,
}

impl<P: PolygonSource, S: ZoneSink> TransitionEvaluator<P, S> {
    /// Create an evaluator, rejecting an invalid configuration.
    pub fn new(config: Config, polygon: P, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            polygon,
            sink,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn polygon_source(&self) -> &P {
        &self.polygon
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Evaluate one transition event.
    ///
    /// Returns one [`Outcome`] per request id for ENTER, DWELL and EXIT.
    /// Fails with `GeofenceEvent` when the platform reported an error and
    /// with `UnknownTransition` for any other kind.
    pub fn evaluate(&self, event: &TransitionEvent) -> Result<Vec<Outcome>> {
        if let Some(code) = event.error_code {
            log::error!("Error receiving geofence event: {}", code);
            return Err(SprayError::GeofenceEvent(code));
        }

        match event.kind {
            TransitionKind::Enter => {
                let polygon = self.polygon.snapshot();
                Ok(event
                    .request_ids
                    .iter()
                    .map(|id| self.handle_enter(&polygon, id))
                    .collect())
            }
            TransitionKind::Dwell => Ok(event
                .request_ids
                .iter()
                .map(|id| self.handle_dwell(id))
                .collect()),
            TransitionKind::Exit => Ok(event
                .request_ids
                .iter()
                .map(|id| self.handle_exit(id))
                .collect()),
            TransitionKind::Unknown(code) => {
                log::error!("Unknown transition type: {}", code);
                Err(SprayError::UnknownTransition(code))
            }
        }
    }

    /// Decode the trigger coordinate carried by a request id.
    pub fn decode_trigger(&self, request_id: &str) -> Result<Coordinate> {
        decode_request_id(request_id)
    }

    /// Spraying points for `polygon` at the configured spacing.
    pub fn spraying_points(&self, polygon: &Polygon) -> Vec<SprayingPoint> {
        sample_spraying_points(polygon, self.config.spacing)
    }

    fn handle_enter(&self, polygon: &Polygon, request_id: &str) -> Outcome {
        let trigger = match self.decode_trigger(request_id) {
            Ok(trigger) => trigger,
            Err(error) => {
                log::warn!("Skipping geofence enter: {}", error);
                return skipped(request_id, error);
            }
        };

        if !is_point_in_polygon(polygon, &trigger) {
            log::debug!(
                "Trigger ({}, {}) for {} is outside the {}-vertex polygon",
                trigger.lat(),
                trigger.lng(),
                request_id,
                polygon.len()
            );
            return Outcome::Outside {
                request_id: request_id.to_string(),
            };
        }

        let points = self.spraying_points(polygon);
        let count = points.len();

        match self
            .sink
            .notify_zone_entered(SprayingRequest::new(request_id, points))
        {
            Ok(()) => {
                log::info!(
                    "Entered geofence zone {}: {} spraying points",
                    request_id,
                    count
                );
                Outcome::Sprayed {
                    request_id: request_id.to_string(),
                    points: count,
                }
            }
            Err(error) => {
                log::warn!("Spraying request for {} was not delivered: {}", request_id, error);
                skipped(request_id, error)
            }
        }
    }

    fn handle_dwell(&self, request_id: &str) -> Outcome {
        log::debug!("Dwelling in geofence {}", request_id);
        match self.sink.on_dwell(request_id) {
            Ok(()) => Outcome::Dwelling {
                request_id: request_id.to_string(),
            },
            Err(error) => skipped(request_id, error),
        }
    }

    fn handle_exit(&self, request_id: &str) -> Outcome {
        log::debug!("Exited geofence {}", request_id);
        match self.sink.on_exit(request_id) {
            Ok(()) => Outcome::Exited {
                request_id: request_id.to_string(),
            },
            Err(error) => skipped(request_id, error),
        }
    }
}

fn skipped(request_id: &str, error: SprayError) -> Outcome {
    Outcome::Skipped {
        request_id: request_id.to_string(),
        error,
    }
}

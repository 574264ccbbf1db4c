//! Evaluator builder for flexible configuration
//!
//! Collects the polygon source, the sink and individual configuration
//! overrides, and validates the result once in `build()`.

use crate::config::Config;
use crate::error::Result;
use crate::evaluator::TransitionEvaluator;
use crate::sink::ZoneSink;
use crate::store::PolygonSource;

/// Builder for a [`TransitionEvaluator`].
///
/// ```rust
/// use sprayzone::{Coordinate, EvaluatorBuilder, MemorySink, PolygonStore};
///
/// let store = PolygonStore::new();
/// let evaluator = EvaluatorBuilder::new(store.clone(), MemorySink::new())
///     .spacing(2.0)
///     .build()?;
///
/// assert_eq!(evaluator.config().spacing, 2.0);
/// # Ok::<(), sprayzone::SprayError>(())
/// ```
#[derive(Debug)]
pub struct EvaluatorBuilder<P, S> {
    config: Config,
    polygon: P,
    sink: S,
}

impl<P: PolygonSource, S: ZoneSink> EvaluatorBuilder<P, S> {
    /// Start from the default configuration.
    pub fn new(polygon: P, sink: S) -> Self {
        Self {
            config: Config::default(),
            polygon,
            sink,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn spacing(mut self, spacing: f64) -> Self {
        self.config = self.config.with_spacing(spacing);
        self
    }

    pub fn spraying_diameter(mut self, diameter: f64) -> Self {
        self.config = self.config.with_spraying_diameter(diameter);
        self
    }

    pub fn geofence_radius(mut self, radius: f64) -> Self {
        self.config = self.config.with_geofence_radius(radius);
        self
    }

    /// Build the evaluator. Fails when the configuration does not validate.
    pub fn build(self) -> Result<TransitionEvaluator<P, S>> {
        TransitionEvaluator::new(self.config, self.polygon, self.sink)
    }
}

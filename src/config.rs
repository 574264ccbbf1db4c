//! Tunable parameters for sampling and geofence registration.
//!
//! Every value is a plain number in the same units the geometry uses. The
//! spacing is applied directly to degree deltas; there is no metre-to-degree
//! conversion anywhere in the crate.

use crate::error::{Result, SprayError};
use serde::{Deserialize, Serialize};

/// Core configuration.
///
/// # Example
///
/// ```rust
/// use sprayzone::Config;
///
/// let config = Config::default();
/// assert_eq!(config.spacing, 1.45);
///
/// let json = r#"{ "spacing": 2.0 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.spacing, 2.0);
/// assert_eq!(config.spraying_diameter, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Distance between consecutive spraying points along an edge.
    #[serde(default = "Config::default_spacing")]
    pub spacing: f64,

    /// Nozzle footprint. Carried for callers but not used by the sampler.
    #[serde(default = "Config::default_spraying_diameter")]
    pub spraying_diameter: f64,

    /// Radius handed to the monitoring platform for each circular geofence.
    #[serde(default = "Config::default_geofence_radius")]
    pub geofence_radius: f64,
}

impl Config {
    const fn default_spacing() -> f64 {
        1.45
    }

    const fn default_spraying_diameter() -> f64 {
        1.5
    }

    const fn default_geofence_radius() -> f64 {
        200.0
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_spraying_diameter(mut self, diameter: f64) -> Self {
        self.spraying_diameter = diameter;
        self
    }

    pub fn with_geofence_radius(mut self, radius: f64) -> Self {
        self.geofence_radius = radius;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(SprayError::InvalidConfig(format!(
                "spacing must be finite and greater than zero, got: {}",
                self.spacing
            )));
        }

        if !self.spraying_diameter.is_finite() || self.spraying_diameter < 0.0 {
            return Err(SprayError::InvalidConfig(format!(
                "spraying diameter must be finite and non-negative, got: {}",
                self.spraying_diameter
            )));
        }

        if !self.geofence_radius.is_finite() || self.geofence_radius <= 0.0 {
            return Err(SprayError::InvalidConfig(format!(
                "geofence radius must be finite and greater than zero, got: {}",
                self.geofence_radius
            )));
        }

        if self.spacing > 1.0e6 {
            log::warn!(
                "Spacing of {} degrees is larger than any real polygon; every edge \
                will be sampled at its endpoints only.",
                self.spacing
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| SprayError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SprayError::Serialization(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: Self::default_spacing(),
            spraying_diameter: Self::default_spraying_diameter(),
            geofence_radius: Self::default_geofence_radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.spacing, 1.45);
        assert_eq!(config.spraying_diameter, 1.5);
        assert_eq!(config.geofence_radius, 200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::default()
            .with_spacing(5.0)
            .with_spraying_diameter(0.0)
            .with_geofence_radius(50.0);
        assert_eq!(config.spacing, 5.0);
        assert_eq!(config.spraying_diameter, 0.0);
        assert_eq!(config.geofence_radius, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_spacing() {
        for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = Config::default().with_spacing(spacing);
            assert!(matches!(
                config.validate(),
                Err(SprayError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_radius_and_diameter() {
        assert!(Config::default().with_geofence_radius(0.0).validate().is_err());
        assert!(
            Config::default()
                .with_spraying_diameter(-0.5)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::default().with_spacing(3.0);
        let json = config.to_json().unwrap();
        let parsed = Config::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let err = Config::from_json(r#"{ "spacing": 1.0, "nozzles": 4 }"#).unwrap_err();
        assert!(matches!(err, SprayError::Serialization(_)));
    }

    #[test]
    fn test_json_runs_validation() {
        let err = Config::from_json(r#"{ "spacing": -2.0 }"#).unwrap_err();
        assert!(matches!(err, SprayError::InvalidConfig(_)));
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_toml_parsing() {
        let config = Config::from_toml("spacing = 0.5\ngeofence_radius = 75.0\n").unwrap();
        assert_eq!(config.spacing, 0.5);
        assert_eq!(config.geofence_radius, 75.0);
        assert_eq!(config.spraying_diameter, 1.5);
    }
}

//! Controller configuration.

use crate::config::ConfigError;

/// Default arrival radius (distance units).
pub const DEFAULT_WAYPOINT_RADIUS: f64 = 10.0;

/// Default minimum spacing between consecutive waypoints (distance units).
pub const DEFAULT_WAYPOINT_SEPARATION: f64 = 25.0;

/// Distances fixed for the lifetime of a controller.
///
/// Both are in the same linear unit as positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// A waypoint counts as reached within this distance (inclusive).
    pub waypoint_radius: f64,

    /// Minimum distance between a new waypoint and the previous one.
    pub waypoint_separation: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            waypoint_radius: DEFAULT_WAYPOINT_RADIUS,
            waypoint_separation: DEFAULT_WAYPOINT_SEPARATION,
        }
    }
}

impl ControllerConfig {
    /// Create a configuration with explicit distances.
    pub fn new(waypoint_radius: f64, waypoint_separation: f64) -> Self {
        Self {
            waypoint_radius,
            waypoint_separation,
        }
    }

    /// Set the arrival radius.
    pub fn with_waypoint_radius(mut self, radius: f64) -> Self {
        self.waypoint_radius = radius;
        self
    }

    /// Set the minimum waypoint separation.
    pub fn with_waypoint_separation(mut self, separation: f64) -> Self {
        self.waypoint_separation = separation;
        self
    }

    /// Check that both distances are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_distance("waypoint_radius", self.waypoint_radius)?;
        check_distance("waypoint_separation", self.waypoint_separation)
    }
}

pub(crate) fn check_distance(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a finite, non-negative distance".to_string(),
        })
    }
}

//! Route types shared across the timestamping and expansion pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single geographic point on a route, with optional timing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    /// Unique identifier, stable for the lifetime of the point
    pub id: Uuid,
    /// Latitude in signed decimal degrees
    pub lat: f64,
    /// Longitude in signed decimal degrees
    pub lng: f64,
    /// Absolute timestamp; `None` until the route has been timestamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Minutes spent stationary at this point before departing toward the next
    #[serde(default)]
    pub pause_minutes: f64,
    /// True for points the user placed directly, false for interpolated points
    pub user_placed: bool,
}

impl Waypoint {
    /// Create a user-placed waypoint at the given coordinates.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            lat,
            lng,
            timestamp: None,
            pause_minutes: 0.0,
            user_placed: true,
        }
    }

    /// Set the pause duration, returning the waypoint for chaining.
    pub fn with_pause(mut self, minutes: f64) -> Self {
        self.pause_minutes = minutes;
        self
    }
}

/// Route-level settings controlling the export pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteSettings {
    /// Travel speed in miles per hour
    pub speed_mph: f64,
    /// Target time spacing between exported points, in seconds
    pub interval_secs: f64,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            // Walking pace
            speed_mph: 3.5,
            interval_secs: 1.0,
        }
    }
}

/// Errors from the route timestamping and expansion pipeline.
#[derive(Debug, Error)]
pub enum RouteError {
    /// Travel speed must be positive and finite
    #[error("Invalid travel speed: {0} mph (must be > 0)")]
    InvalidSpeed(f64),

    /// Sampling interval must be positive and finite
    #[error("Invalid sampling interval: {0} seconds (must be > 0)")]
    InvalidInterval(f64),
}

//! Route input files.
//!
//! A route file is a small JSON document describing the ordered points the
//! user placed, the file-based equivalent of clicking them onto a map.

use crate::route::types::Waypoint;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// An ordered route as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFile {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered points
    pub waypoints: Vec<RoutePoint>,
}

/// A single stored point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePoint {
    /// Latitude in signed decimal degrees
    pub lat: f64,
    /// Longitude in signed decimal degrees
    pub lng: f64,
    /// Minutes to remain stationary here before departing
    #[serde(default)]
    pub pause_minutes: f64,
}

/// Errors reading or writing route files.
#[derive(Debug, Error)]
pub enum RouteFileError {
    #[error("Failed to read route file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid route file: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

impl RouteFile {
    /// Convert stored points into user-placed waypoints ready for the
    /// pipeline (fresh ids, no timestamps), preserving file order.
    pub fn to_waypoints(&self) -> Vec<Waypoint> {
        self.waypoints
            .iter()
            .map(|p| Waypoint::new(p.lat, p.lng).with_pause(p.pause_minutes))
            .collect()
    }

    /// Build a route file from user-placed waypoints.
    pub fn from_waypoints(name: Option<String>, waypoints: &[Waypoint]) -> Self {
        Self {
            name,
            waypoints: waypoints
                .iter()
                .map(|wp| RoutePoint {
                    lat: wp.lat,
                    lng: wp.lng,
                    pause_minutes: wp.pause_minutes,
                })
                .collect(),
        }
    }
}

/// Load a route file from disk.
pub fn load_route(path: &Path) -> Result<RouteFile, RouteFileError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| RouteFileError::ParseError(e.to_string()))
}

/// Save a route file to disk as pretty-printed JSON.
pub fn save_route(path: &Path, route: &RouteFile) -> Result<(), RouteFileError> {
    let content = serde_json::to_string_pretty(route)
        .map_err(|e| RouteFileError::SerializeError(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}

//! Route planner holding waypoints and settings for an export run.

use crate::export::exporter_gpx::export_gpx;
use crate::export::ExportError;
use crate::route::expand::expand_route;
use crate::route::timestamps::calculate_timestamps;
use crate::route::types::{RouteError, RouteSettings, Waypoint};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Errors from a full planner export run.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Export requested with no waypoints placed
    #[error("Route is empty")]
    EmptyRoute,

    /// Pipeline error (invalid speed or interval)
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Serialization error
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Holds an ordered route under construction.
///
/// Waypoints are kept in placement order; no operation reorders them.
/// The planner owns only the user-placed points, the pipeline runs produce
/// fresh sequences and leave the planner state untouched.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    /// User-placed waypoints in placement order
    waypoints: Vec<Waypoint>,
    /// Travel speed and sampling interval
    settings: RouteSettings,
}

impl RoutePlanner {
    /// Create a planner with the given settings.
    pub fn new(settings: RouteSettings) -> Self {
        Self {
            waypoints: Vec::new(),
            settings,
        }
    }

    /// Create a planner with default settings.
    pub fn with_defaults() -> Self {
        Self::new(RouteSettings::default())
    }

    /// Append a waypoint at the given coordinates, returning its id.
    pub fn add_waypoint(&mut self, lat: f64, lng: f64) -> Uuid {
        let waypoint = Waypoint::new(lat, lng);
        let id = waypoint.id;
        tracing::debug!("Placed waypoint {} at ({}, {})", id, lat, lng);
        self.waypoints.push(waypoint);
        id
    }

    /// Remove a waypoint by id. Returns false if no waypoint matches.
    pub fn remove_waypoint(&mut self, id: Uuid) -> bool {
        let before = self.waypoints.len();
        self.waypoints.retain(|wp| wp.id != id);
        self.waypoints.len() < before
    }

    /// Set the pause duration (in minutes) at a waypoint. Returns false if
    /// no waypoint matches.
    pub fn set_pause(&mut self, id: Uuid, minutes: f64) -> bool {
        match self.waypoints.iter_mut().find(|wp| wp.id == id) {
            Some(wp) => {
                wp.pause_minutes = minutes;
                true
            }
            None => false,
        }
    }

    /// Remove all waypoints.
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    /// The user-placed waypoints in placement order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of user-placed waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// True when no waypoints have been placed.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Current settings.
    pub fn settings(&self) -> RouteSettings {
        self.settings
    }

    /// Set the travel speed in mph. Validated when the pipeline runs.
    pub fn set_speed(&mut self, speed_mph: f64) {
        self.settings.speed_mph = speed_mph;
    }

    /// Set the sampling interval in seconds. Validated when the pipeline runs.
    pub fn set_interval(&mut self, interval_secs: f64) {
        self.settings.interval_secs = interval_secs;
    }

    /// Replace the waypoint list with an already-ordered sequence, e.g. one
    /// loaded from a route file.
    pub fn set_waypoints(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
    }

    /// Run the timestamping and expansion pipeline, producing the sequence
    /// ready for serialization. Planner state is left untouched.
    pub fn build_export(&self, start_time: DateTime<Utc>) -> Result<Vec<Waypoint>, RouteError> {
        let timestamped =
            calculate_timestamps(&self.waypoints, self.settings.speed_mph, start_time)?;
        let expanded = expand_route(&timestamped, self.settings.interval_secs)?;
        tracing::info!(
            "Expanded {} user waypoints to {} points at {:.1} mph",
            self.waypoints.len(),
            expanded.len(),
            self.settings.speed_mph
        );
        Ok(expanded)
    }

    /// Run the full pipeline and serialize the result to a GPX document.
    pub fn export_gpx(
        &self,
        creator: &str,
        start_time: DateTime<Utc>,
    ) -> Result<String, PlannerError> {
        if self.waypoints.is_empty() {
            return Err(PlannerError::EmptyRoute);
        }
        let expanded = self.build_export(start_time)?;
        Ok(export_gpx(&expanded, creator)?)
    }
}

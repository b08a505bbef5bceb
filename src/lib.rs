//! RouteSim - Waypoint Route Planner with Timestamped GPX Export
//!
//! Builds timestamped GPX files for location simulation from an ordered
//! set of waypoints, a travel speed, and optional per-waypoint pauses.
//! The core pipeline computes absolute timestamps along the route and
//! inserts interpolated points at a fixed time cadence so the exported
//! track plays back smoothly.

pub mod export;
pub mod planner;
pub mod route;
pub mod storage;

// Re-export commonly used types
pub use export::exporter_gpx::export_gpx;
pub use planner::planner::RoutePlanner;
pub use route::expand::expand_route;
pub use route::timestamps::calculate_timestamps;
pub use route::types::{RouteError, RouteSettings, Waypoint};
pub use storage::config::AppConfig;

//! Route expansion: interpolated waypoints at a fixed time cadence.
//!
//! Positions are interpolated linearly in raw degrees, which is not
//! geodesically exact; at the short sampling intervals this tool targets
//! the deviation from the great circle is negligible.

use crate::route::types::{RouteError, Waypoint};
use chrono::Duration;
use uuid::Uuid;

/// Generate evenly spaced intermediate waypoints between two timestamped
/// waypoints. The endpoints themselves are not included.
///
/// If either endpoint lacks a timestamp, or the time gap is no longer than
/// `interval_secs` (including out-of-order timestamps), no intermediates
/// are produced.
pub fn intermediate_waypoints(
    start: &Waypoint,
    end: &Waypoint,
    interval_secs: f64,
) -> Vec<Waypoint> {
    let (Some(start_ts), Some(end_ts)) = (start.timestamp, end.timestamp) else {
        return Vec::new();
    };

    let time_diff_secs = (end_ts - start_ts).num_milliseconds() as f64 / 1000.0;
    if time_diff_secs <= interval_secs {
        return Vec::new();
    }

    let num_points = (time_diff_secs / interval_secs).floor() as i64 - 1;
    if num_points <= 0 {
        return Vec::new();
    }

    (1..=num_points)
        .map(|i| {
            let ratio = i as f64 / (num_points + 1) as f64;
            Waypoint {
                id: Uuid::new_v4(),
                lat: start.lat + (end.lat - start.lat) * ratio,
                lng: start.lng + (end.lng - start.lng) * ratio,
                timestamp: Some(
                    start_ts
                        + Duration::milliseconds((time_diff_secs * 1000.0 * ratio).round() as i64),
                ),
                pause_minutes: 0.0,
                user_placed: false,
            }
        })
        .collect()
}

/// Expand a timestamped route by inserting intermediate waypoints between
/// every consecutive pair, spaced at approximately `interval_secs`.
///
/// Original waypoints are preserved in order with their identity intact;
/// intermediates carry fresh ids and `user_placed = false`. Inputs with
/// fewer than two waypoints are returned as-is. A non-positive or
/// non-finite interval is rejected.
pub fn expand_route(
    waypoints: &[Waypoint],
    interval_secs: f64,
) -> Result<Vec<Waypoint>, RouteError> {
    if interval_secs <= 0.0 || !interval_secs.is_finite() {
        return Err(RouteError::InvalidInterval(interval_secs));
    }
    if waypoints.len() < 2 {
        return Ok(waypoints.to_vec());
    }

    let mut expanded = Vec::new();
    for pair in waypoints.windows(2) {
        expanded.push(pair[0].clone());
        expanded.extend(intermediate_waypoints(&pair[0], &pair[1], interval_secs));
    }
    expanded.push(waypoints[waypoints.len() - 1].clone());

    Ok(expanded)
}

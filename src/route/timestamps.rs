//! Timestamp calculation for ordered waypoint sequences.
//!
//! Walks the route in placement order with a running clock, adding the
//! pause at each departed waypoint and the travel time to the next one.

use crate::route::geodesic::haversine_distance;
use crate::route::types::{RouteError, Waypoint};
use chrono::{DateTime, Duration, Utc};

/// Meters in one statute mile
const METERS_PER_MILE: f64 = 1609.34;

/// Assign an absolute timestamp to every waypoint in the sequence.
///
/// The first waypoint gets `start_time` exactly. Each subsequent waypoint's
/// timestamp is the previous one plus the pause at the previous waypoint
/// and the travel time between the pair at `speed_mph`. Existing timestamps
/// on the input are ignored and overwritten. The input is not mutated;
/// output order matches input order.
///
/// An empty input yields an empty output. A non-positive or non-finite
/// speed is rejected rather than producing infinite or NaN timestamps.
pub fn calculate_timestamps(
    waypoints: &[Waypoint],
    speed_mph: f64,
    start_time: DateTime<Utc>,
) -> Result<Vec<Waypoint>, RouteError> {
    if speed_mph <= 0.0 || !speed_mph.is_finite() {
        return Err(RouteError::InvalidSpeed(speed_mph));
    }
    if waypoints.is_empty() {
        return Ok(Vec::new());
    }

    let speed_mps = speed_mph * METERS_PER_MILE / 3600.0;

    let mut result = Vec::with_capacity(waypoints.len());
    let mut clock = start_time;

    result.push(Waypoint {
        timestamp: Some(clock),
        ..waypoints[0].clone()
    });

    for pair in waypoints.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        // Pause at the previous waypoint happens before departure
        if prev.pause_minutes > 0.0 {
            clock += Duration::milliseconds((prev.pause_minutes * 60_000.0).round() as i64);
        }

        let distance = haversine_distance(prev.lat, prev.lng, curr.lat, curr.lng);
        let travel_secs = distance / speed_mps;
        clock += Duration::milliseconds((travel_secs * 1000.0).round() as i64);

        result.push(Waypoint {
            timestamp: Some(clock),
            ..curr.clone()
        });
    }

    Ok(result)
}

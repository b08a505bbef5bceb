//! Unit tests for the route planner.

use chrono::{TimeZone, Utc};
use routesim::planner::{PlannerError, RoutePlanner};
use routesim::route::types::RouteSettings;

fn start_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

#[test]
fn test_add_waypoints_in_order() {
    let mut planner = RoutePlanner::with_defaults();
    planner.add_waypoint(45.5, -122.5);
    planner.add_waypoint(45.51, -122.51);

    assert_eq!(planner.waypoint_count(), 2);
    assert!((planner.waypoints()[0].lat - 45.5).abs() < 1e-9);
    assert!((planner.waypoints()[1].lat - 45.51).abs() < 1e-9);
}

#[test]
fn test_remove_waypoint_by_id() {
    let mut planner = RoutePlanner::with_defaults();
    let first = planner.add_waypoint(45.5, -122.5);
    planner.add_waypoint(45.51, -122.51);

    assert!(planner.remove_waypoint(first));
    assert_eq!(planner.waypoint_count(), 1);
    assert!((planner.waypoints()[0].lat - 45.51).abs() < 1e-9);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut planner = RoutePlanner::with_defaults();
    planner.add_waypoint(45.5, -122.5);

    assert!(!planner.remove_waypoint(uuid::Uuid::new_v4()));
    assert_eq!(planner.waypoint_count(), 1);
}

#[test]
fn test_set_pause() {
    let mut planner = RoutePlanner::with_defaults();
    let id = planner.add_waypoint(45.5, -122.5);

    assert!(planner.set_pause(id, 5.0));
    assert_eq!(planner.waypoints()[0].pause_minutes, 5.0);

    assert!(!planner.set_pause(uuid::Uuid::new_v4(), 1.0));
}

#[test]
fn test_clear() {
    let mut planner = RoutePlanner::with_defaults();
    planner.add_waypoint(45.5, -122.5);
    planner.add_waypoint(45.51, -122.51);

    planner.clear();
    assert!(planner.is_empty());
}

#[test]
fn test_build_export_runs_full_pipeline() {
    // One degree of longitude at 3600 mph takes ~69.1 s; at a 1 s cadence
    // that expands to 68 intermediates between the two endpoints
    let mut planner = RoutePlanner::new(RouteSettings {
        speed_mph: 3600.0,
        interval_secs: 1.0,
    });
    planner.add_waypoint(0.0, 0.0);
    planner.add_waypoint(0.0, 1.0);

    let expanded = planner.build_export(start_time()).unwrap();

    assert_eq!(expanded.len(), 70);
    assert!(expanded[0].user_placed);
    assert!(expanded.last().unwrap().user_placed);
    assert!(expanded[1..69].iter().all(|wp| !wp.user_placed));
    assert!(expanded.iter().all(|wp| wp.timestamp.is_some()));
}

#[test]
fn test_build_export_leaves_planner_untouched() {
    let mut planner = RoutePlanner::new(RouteSettings {
        speed_mph: 3600.0,
        interval_secs: 1.0,
    });
    planner.add_waypoint(0.0, 0.0);
    planner.add_waypoint(0.0, 1.0);

    planner.build_export(start_time()).unwrap();

    assert_eq!(planner.waypoint_count(), 2);
    assert!(planner.waypoints().iter().all(|wp| wp.timestamp.is_none()));
}

#[test]
fn test_export_gpx_empty_route_rejected() {
    let planner = RoutePlanner::with_defaults();
    let result = planner.export_gpx("Xcode", start_time());
    assert!(matches!(result, Err(PlannerError::EmptyRoute)));
}

#[test]
fn test_export_gpx_invalid_speed_propagates() {
    let mut planner = RoutePlanner::with_defaults();
    planner.add_waypoint(45.5, -122.5);
    planner.set_speed(0.0);

    let result = planner.export_gpx("Xcode", start_time());
    assert!(matches!(result, Err(PlannerError::Route(_))));
}

#[test]
fn test_export_gpx_single_waypoint() {
    let mut planner = RoutePlanner::with_defaults();
    planner.add_waypoint(45.5, -122.5);

    let xml = planner.export_gpx("Xcode", start_time()).unwrap();
    assert_eq!(xml.matches("<wpt ").count(), 1);
    assert!(xml.contains("<time>2024-06-01T09:00:00.000Z</time>"));
}

//! Command-line interface: argument parsing and pipeline wiring.

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use routesim::export::exporter_gpx::generate_gpx_filename;
use routesim::route::types::RouteSettings;
use routesim::storage::{config, route_file};
use routesim::RoutePlanner;
use std::path::PathBuf;

/// Build a timestamped GPX file for location simulation from a route file.
#[derive(Debug, Parser)]
#[command(name = "routesim", version)]
pub struct Args {
    /// Route file (JSON) with the ordered waypoints
    route: PathBuf,

    /// Travel speed in miles per hour
    #[arg(long)]
    speed: Option<f64>,

    /// Seconds between exported points
    #[arg(long)]
    interval: Option<f64>,

    /// Route start time (RFC 3339); defaults to the current time
    #[arg(long)]
    start: Option<DateTime<Utc>>,

    /// Output path; defaults to a date-stamped filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// GPX creator attribute
    #[arg(long)]
    creator: Option<String>,
}

/// Parse arguments and run the export pipeline.
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        config::AppConfig::default()
    });

    let route = route_file::load_route(&args.route)
        .with_context(|| format!("Failed to load route file {}", args.route.display()))?;
    if let Some(name) = &route.name {
        tracing::info!("Loaded route \"{}\" ({} waypoints)", name, route.waypoints.len());
    }

    let settings = RouteSettings {
        speed_mph: args.speed.unwrap_or(config.route.speed_mph),
        interval_secs: args.interval.unwrap_or(config.route.interval_secs),
    };
    let creator = args.creator.unwrap_or(config.export.creator);
    let start_time = args.start.unwrap_or_else(Utc::now);

    let mut planner = RoutePlanner::new(settings);
    planner.set_waypoints(route.to_waypoints());

    let gpx = planner.export_gpx(&creator, start_time)?;

    let output = args.output.unwrap_or_else(|| {
        let filename = generate_gpx_filename(Utc::now());
        match &config.export.output_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    });
    std::fs::write(&output, gpx)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Wrote {}", output.display());
    Ok(())
}

//! RouteSim - Waypoint Route Planner with Timestamped GPX Export
//!
//! Main entry point for the command-line tool.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RouteSim v{}", env!("CARGO_PKG_VERSION"));

    cli::run()
}

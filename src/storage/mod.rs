//! Storage module for configuration and route input files.

pub mod config;
pub mod route_file;

pub use config::{AppConfig, ConfigError, ExportSettings, RouteDefaults};
pub use route_file::{RouteFile, RouteFileError, RoutePoint};

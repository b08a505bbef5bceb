//! Route export subsystem.
//!
//! Serializes an expanded, timestamped waypoint sequence into a GPX
//! document the location simulator accepts.

pub mod exporter_gpx;

use thiserror::Error;

/// Errors during route export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No waypoints to export
    #[error("Route has no waypoints to export")]
    NoData,

    /// XML generation error
    #[error("XML error: {0}")]
    XmlError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

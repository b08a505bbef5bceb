//! GPX export functionality for timestamped routes.

use crate::export::ExportError;
use crate::route::types::Waypoint;
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// GPX creator attribute expected by the Xcode location simulator
pub const DEFAULT_CREATOR: &str = "Xcode";

/// Export waypoints as a GPX 1.1 document.
///
/// Emits one `wpt` element per waypoint with its coordinates and an
/// ISO-8601 UTC time. Waypoints without a timestamp are omitted; a fully
/// timestamped sequence is expected here, so an omission means an upstream
/// stage was skipped.
pub fn export_gpx(waypoints: &[Waypoint], creator: &str) -> Result<String, ExportError> {
    if waypoints.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 4);

    // XML declaration
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    // Root element
    let mut root = BytesStart::new("gpx");
    root.push_attribute(("version", "1.1"));
    root.push_attribute(("creator", creator));
    writer
        .write_event(Event::Start(root))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    for waypoint in waypoints {
        let Some(timestamp) = waypoint.timestamp else {
            tracing::warn!("Skipping waypoint {} with no timestamp", waypoint.id);
            continue;
        };
        write_waypoint(&mut writer, waypoint, timestamp)?;
    }

    // Close gpx
    writer
        .write_event(Event::End(BytesEnd::new("gpx")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).map_err(|e| ExportError::XmlError(e.to_string()))
}

/// Write a single wpt element.
fn write_waypoint<W: std::io::Write>(
    writer: &mut Writer<W>,
    waypoint: &Waypoint,
    timestamp: DateTime<Utc>,
) -> Result<(), ExportError> {
    let mut wpt = BytesStart::new("wpt");
    wpt.push_attribute(("lat", waypoint.lat.to_string().as_str()));
    wpt.push_attribute(("lon", waypoint.lng.to_string().as_str()));
    writer
        .write_event(Event::Start(wpt))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    write_element(
        writer,
        "time",
        &timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    )?;

    writer
        .write_event(Event::End(BytesEnd::new("wpt")))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

/// Write a simple element with text content.
fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), ExportError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    writer
        .write_event(Event::Text(BytesText::new(value)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| ExportError::XmlError(e.to_string()))?;

    Ok(())
}

/// Export a route to GPX and write it to a file.
pub fn export_gpx_to_file(
    waypoints: &[Waypoint],
    creator: &str,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = export_gpx(waypoints, creator)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Generate a date-stamped default filename for a route export.
pub fn generate_gpx_filename(date: DateTime<Utc>) -> String {
    format!("xcode_route_{}.gpx", date.format("%Y-%m-%d"))
}

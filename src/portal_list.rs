//! Plain-text portal lists.
//!
//! One portal per line, either `lat,lon` or `name,lat,lon`. Blank lines and
//! lines starting with `#` are skipped. The coordinates are always the last
//! two comma-separated fields, so names may contain commas.
//!
//! Coordinates are written with Rust's shortest round-trip float formatting,
//! so a list written and read back yields bit-identical values.

use std::fmt::Write as _;

use tracing::debug;

use crate::error::PortalLineError;
use crate::model::{Portal, PortalInput};

/// Parses one line.
///
/// `Ok(None)` for blank and comment lines.
pub fn parse_portal_line(line: &str) -> Result<Option<PortalInput>, PortalLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.rsplitn(3, ',');
    let (Some(lon), Some(lat)) = (fields.next(), fields.next()) else {
        return Err(PortalLineError::WrongFieldCount { found: 1 });
    };
    let name = fields.next();

    let lat = parse_coordinate("latitude", lat)?;
    let lon = parse_coordinate("longitude", lon)?;

    Ok(Some(PortalInput {
        lat,
        lon,
        name: name.map(str::to_string),
    }))
}

fn parse_coordinate(axis: &'static str, raw: &str) -> Result<f64, PortalLineError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PortalLineError::not_a_number(axis, raw))?;
    if !value.is_finite() {
        return Err(PortalLineError::NonFinite { axis, value });
    }
    Ok(value)
}

/// Parses a whole list, skipping lines that do not hold a portal.
pub fn parse_portal_list(text: &str) -> Vec<PortalInput> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| match parse_portal_line(line) {
            Ok(input) => input,
            Err(err) => {
                debug!(line = index + 1, error = %err, "skipping malformed portal line");
                None
            }
        })
        .collect()
}

/// One portal as a list line, without the trailing newline.
pub fn format_portal_line(portal: &Portal) -> String {
    match portal.name() {
        Some(name) => format!("{},{},{}", name, portal.lat(), portal.lon()),
        None => format!("{},{}", portal.lat(), portal.lon()),
    }
}

/// Portals as a list, one line each.
pub fn format_portal_list(portals: &[Portal]) -> String {
    let mut out = String::new();
    for portal in portals {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", format_portal_line(portal));
    }
    out
}

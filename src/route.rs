//! Competition routes from waypoint files.
//!
//! A waypoint file has one `id,lon,lat,alt,description` record per line.
//! Blank lines and lines starting with `#` are skipped. Fields may be
//! quoted; an unquoted description may itself contain commas.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::catalog::{
    ListItemType, color, document, folder, line_string, line_style, list_item_type, list_style,
    name, open, placemark, point, style, tessellate, width,
};
use crate::catalog::{href, icon as icon_element, icon_style};
use crate::element::coordinates::{Coordinate, coordinates};
use crate::element::CompoundElement;
use crate::element::root::{KmlElement, kml};
use crate::encode::Color;
use crate::error::{Error, Result};
use crate::{elements, icon};

/// Color of the route line.
pub const ROUTE_COLOR: Color = Color::rgba(192, 0, 0, 192);

#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub coordinate: Coordinate,
    pub description: String,
}

/// Parse a waypoint file.
pub fn parse_waypoints(input: &str) -> Result<Vec<Waypoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(input.as_bytes());

    let mut waypoints = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line() as usize);
        waypoints.push(parse_record(line, &record)?);
    }
    Ok(waypoints)
}

fn parse_record(line: usize, record: &csv::StringRecord) -> Result<Waypoint> {
    let invalid = |reason: String| Error::InvalidWaypoint { line, reason };
    if record.len() < 4 {
        return Err(invalid(format!("expected at least 4 fields, got {}", record.len())));
    }
    let number = |index: usize, what: &str| -> Result<f64> {
        let field = record[index].trim();
        field
            .parse()
            .map_err(|_| invalid(format!("bad {what}: {field:?}")))
    };
    let id = record[0].trim();
    if id.is_empty() {
        return Err(invalid("empty id".to_string()));
    }
    let description: Vec<&str> = record.iter().skip(4).collect();
    let description = description.join(",");
    Ok(Waypoint {
        id: id.to_string(),
        coordinate: Coordinate::with_alt(
            number(1, "longitude")?,
            number(2, "latitude")?,
            number(3, "altitude")?,
        ),
        description: description.trim().to_string(),
    })
}

/// Build a document showing the route through `ids`, the turnpoints, and
/// the remaining waypoints.
pub fn build_route(route_name: &str, waypoints: &[Waypoint], ids: &[String]) -> Result<KmlElement> {
    let mut by_id: HashMap<&str, &Waypoint> = HashMap::new();
    for waypoint in waypoints {
        if by_id.insert(waypoint.id.as_str(), waypoint).is_some() {
            return Err(Error::DuplicateWaypoint(waypoint.id.clone()));
        }
    }

    let turnpoints = ids
        .iter()
        .map(|id| {
            by_id
                .get(id.as_str())
                .copied()
                .ok_or_else(|| Error::UnknownWaypoint(id.clone()))
        })
        .collect::<Result<Vec<_>>>()?;
    let used: HashSet<&str> = ids.iter().map(String::as_str).collect();
    debug!("route {route_name:?}: {} turnpoints", turnpoints.len());

    let route: Vec<Coordinate> = turnpoints.iter().map(|w| w.coordinate).collect();
    let route_folder = folder(elements![
        name("Route"),
        placemark(elements![
            line_string(elements![coordinates(route), tessellate(true)]),
            style(elements![line_style(elements![color(ROUTE_COLOR), width(3.0)])]),
        ]),
        hide_children(),
    ]);

    let last = turnpoints.len().saturating_sub(1);
    let mut turnpoints_folder = folder(elements![name("Turnpoints"), open(true)]);
    for (i, turnpoint) in turnpoints.iter().enumerate() {
        let (label, paddle) = match i {
            0 => ("START".to_string(), "go".to_string()),
            i if i == last => ("GOAL".to_string(), "stop".to_string()),
            i => (format!("TP{i:02}"), i.to_string()),
        };
        turnpoints_folder.push(folder(elements![
            name(&format!("{label} {}", turnpoint.description)),
            placemark(elements![
                point(elements![coordinates(vec![turnpoint.coordinate])]),
                style(elements![icon::paddle_icon_style(&paddle)]),
            ]),
            hide_children(),
        ]));
    }

    let mut waypoints_folder = folder(elements![name("Waypoints"), open(false)]);
    for waypoint in waypoints.iter().filter(|w| !used.contains(w.id.as_str())) {
        waypoints_folder.push(folder(elements![
            name(&waypoint.description),
            placemark(elements![
                point(elements![coordinates(vec![waypoint.coordinate])]),
                style(elements![icon_style(elements![icon_element(elements![href(
                    &icon::palette_href(2, 13)
                )])])]),
            ]),
        ]));
    }

    Ok(kml(document(elements![
        name(route_name),
        open(true),
        route_folder,
        turnpoints_folder,
        waypoints_folder,
    ])))
}

fn hide_children() -> CompoundElement {
    style(elements![list_style(elements![list_item_type(
        ListItemType::CheckHideChildren
    )])])
}

//! Elements whose text is a list of numbers.
//!
//! A `<coordinates>` element packs every point into one text node:
//! `lon,lat[,alt]` tokens separated by single spaces. Altitude is left out
//! when it is exactly zero, so a point at sea level and a point with no
//! altitude serialize the same way.

use std::fmt::Write as _;

use crate::element::{Element, StartTag};
use crate::encode::format_float;
use crate::error::Result;
use crate::ser::Encoder;

const COORDINATES: &str = "coordinates";

/// A geographical coordinate. `lon` and `lat` are in degrees, `alt` in
/// meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat, alt: 0.0 }
    }

    pub const fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((lon, lat, alt): (f64, f64, f64)) -> Self {
        Self::with_alt(lon, lat, alt)
    }
}

/// Accumulates `lon,lat[,alt]` tokens.
#[derive(Default)]
struct CoordinateText {
    buf: String,
}

impl CoordinateText {
    fn with_points(n: usize) -> Self {
        // Roughly three 18-character floats per point.
        Self {
            buf: String::with_capacity(n * 3 * 18),
        }
    }

    fn push(&mut self, lon: f64, lat: f64, alt: Option<f64>) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(self.buf, "{},{}", format_float(lon), format_float(lat));
        if let Some(alt) = alt.filter(|alt| *alt != 0.0) {
            let _ = write!(self.buf, ",{}", format_float(alt));
        }
    }

    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        encoder.leaf(&StartTag::new(COORDINATES), &self.buf)
    }
}

/// `<coordinates>` built from [`Coordinate`] values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinatesElement(pub Vec<Coordinate>);

impl Element for CoordinatesElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut text = CoordinateText::with_points(self.0.len());
        for c in &self.0 {
            text.push(c.lon, c.lat, Some(c.alt));
        }
        text.encode(encoder)
    }
}

/// `<coordinates>` built from an interleaved array of numbers.
///
/// Points start at `offset` and every `stride` values up to `end`; each
/// has `dim` components, of which the first three are used.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatesFlatElement {
    pub flat_coords: Vec<f64>,
    pub offset: usize,
    pub end: usize,
    pub stride: usize,
    pub dim: usize,
}

impl Element for CoordinatesFlatElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let end = self.end.min(self.flat_coords.len());
        let mut text = CoordinateText::default();
        if self.stride > 0 && self.dim >= 2 {
            for i in (self.offset..end).step_by(self.stride) {
                let (Some(&lon), Some(&lat)) = (self.flat_coords.get(i), self.flat_coords.get(i + 1))
                else {
                    break;
                };
                let alt = if self.dim > 2 {
                    self.flat_coords.get(i + 2).copied()
                } else {
                    None
                };
                text.push(lon, lat, alt);
            }
        }
        text.encode(encoder)
    }
}

/// `<coordinates>` built from points given as 2- or 3-element slices.
///
/// Points with fewer than two components are skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinatesSliceElement(pub Vec<Vec<f64>>);

impl Element for CoordinatesSliceElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let mut text = CoordinateText::with_points(self.0.len());
        for point in &self.0 {
            if let [lon, lat, rest @ ..] = point.as_slice() {
                text.push(*lon, *lat, rest.first().copied());
            }
        }
        text.encode(encoder)
    }
}

/// `<gx:coord>`: `lon lat alt`, altitude always written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GxCoordElement(pub Coordinate);

impl Element for GxCoordElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let Coordinate { lon, lat, alt } = self.0;
        encoder.leaf(&StartTag::new("gx:coord"), &space_separated(&[lon, lat, alt]))
    }
}

/// `<gx:angles>`: `heading tilt roll`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GxAnglesElement {
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
}

impl Element for GxAnglesElement {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
        let text = space_separated(&[self.heading, self.tilt, self.roll]);
        encoder.leaf(&StartTag::new("gx:angles"), &text)
    }
}

fn space_separated(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_float(*v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `<coordinates>` from a list of points.
pub fn coordinates(points: impl Into<Vec<Coordinate>>) -> CoordinatesElement {
    CoordinatesElement(points.into())
}

/// `<coordinates>` from flat, interleaved values.
pub fn coordinates_flat(
    flat_coords: impl Into<Vec<f64>>,
    offset: usize,
    end: usize,
    stride: usize,
    dim: usize,
) -> CoordinatesFlatElement {
    CoordinatesFlatElement {
        flat_coords: flat_coords.into(),
        offset,
        end,
        stride,
        dim,
    }
}

/// `<coordinates>` from variable-length points.
pub fn coordinates_slice(points: impl Into<Vec<Vec<f64>>>) -> CoordinatesSliceElement {
    CoordinatesSliceElement(points.into())
}

pub fn gx_coord(coordinate: Coordinate) -> GxCoordElement {
    GxCoordElement(coordinate)
}

pub fn gx_angles(heading: f64, tilt: f64, roll: f64) -> GxAnglesElement {
    GxAnglesElement { heading, tilt, roll }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn xml(e: impl Element) -> String {
        e.to_xml_string().unwrap()
    }

    #[test]
    fn test_coordinates() {
        assert_eq!(
            xml(coordinates(vec![Coordinate::with_alt(1.23, 4.56, 7.89)])),
            "<coordinates>1.23,4.56,7.89</coordinates>"
        );
        assert_eq!(
            xml(coordinates(vec![Coordinate::with_alt(1.23, 4.56, 0.0)])),
            "<coordinates>1.23,4.56</coordinates>"
        );
        assert_eq!(xml(coordinates(Vec::new())), "<coordinates></coordinates>");
    }

    #[test]
    fn test_coordinates_multiple_points() {
        let e = coordinates(vec![
            Coordinate::with_alt(-112.2550785337791, 36.07954952145647, 2357.0),
            Coordinate::new(-112.2549277039738, 36.08117083492122),
        ]);
        assert_eq!(
            xml(e),
            "<coordinates>-112.2550785337791,36.07954952145647,2357 \
             -112.2549277039738,36.08117083492122</coordinates>"
        );
    }

    #[test]
    fn test_coordinates_flat() {
        let flat = vec![9.0, 1.0, 2.0, 0.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(
            xml(coordinates_flat(flat.clone(), 1, 7, 3, 3)),
            "<coordinates>1,2 3,4,5</coordinates>"
        );
        assert_eq!(
            xml(coordinates_flat(flat.clone(), 1, 7, 3, 2)),
            "<coordinates>1,2 3,4</coordinates>"
        );
        assert_eq!(
            xml(coordinates_flat(flat, 0, 8, 0, 2)),
            "<coordinates></coordinates>"
        );
    }

    #[test]
    fn test_coordinates_slice() {
        let e = coordinates_slice(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0], vec![6.0], vec![7.0, 8.0, 0.0]]);
        assert_eq!(xml(e), "<coordinates>1,2 3,4,5 7,8</coordinates>");
    }

    #[test]
    fn test_gx_elements() {
        assert_eq!(
            xml(gx_coord(Coordinate::new(1.5, 2.5))),
            "<gx:coord>1.5 2.5 0</gx:coord>"
        );
        assert_eq!(
            xml(gx_angles(45.0, 10.0, 0.0)),
            "<gx:angles>45 10 0</gx:angles>"
        );
    }

    proptest! {
        #[test]
        fn prop_coordinates_round_trip(
            lon in -180.0f64..180.0,
            lat in -90.0f64..90.0,
            alt in prop_oneof![Just(0.0f64), -500.0f64..9000.0],
        ) {
            let text = xml(coordinates(vec![Coordinate::with_alt(lon, lat, alt)]));
            let body = text
                .strip_prefix("<coordinates>")
                .and_then(|t| t.strip_suffix("</coordinates>"))
                .unwrap();
            let parts: Vec<f64> = body.split(',').map(|p| p.parse().unwrap()).collect();
            prop_assert_eq!(parts[0].to_bits(), lon.to_bits());
            prop_assert_eq!(parts[1].to_bits(), lat.to_bits());
            if alt == 0.0 {
                prop_assert_eq!(parts.len(), 2);
            } else {
                prop_assert_eq!(parts.len(), 3);
                prop_assert_eq!(parts[2].to_bits(), alt.to_bits());
            }
        }

        #[test]
        fn prop_construction_forms_agree(
            points in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0, -100.0f64..100.0), 0..6),
        ) {
            let tuples = coordinates(points.iter().map(|&p| Coordinate::from(p)).collect::<Vec<_>>());
            let slices = coordinates_slice(points.iter().map(|&(a, b, c)| vec![a, b, c]).collect::<Vec<_>>());
            let flat: Vec<f64> = points.iter().flat_map(|&(a, b, c)| [a, b, c]).collect();
            let n = flat.len();
            let flat = coordinates_flat(flat, 0, n, 3, 3);
            let expected = xml(tuples);
            prop_assert_eq!(&xml(slices), &expected);
            prop_assert_eq!(&xml(flat), &expected);
        }
    }
}

//! # kmlkit
//!
//! Build KML documents as element trees and write them as XML or as KMZ
//! archives.
//!
//! ## Features
//!
//! - One constructor per KML 2.2 element, plus the Google Earth `gx:`
//!   extensions
//! - Compact or indented output with byte-exact formatting
//! - Coordinate lists from structs, flat buffers or nested slices
//! - KMZ packaging with reproducible entry order and timestamps
//! - Sphere and ellipsoid geometry helpers and standard icon hrefs
//!
//! ## Quick Start
//!
//! ```
//! use kmlkit::{Coordinate, coordinates, elements, kml, name, placemark, point};
//!
//! let doc = kml(placemark(elements![
//!     name("Simple placemark"),
//!     point(elements![coordinates(vec![Coordinate::new(-122.0822035425683, 37.42228990140251)])]),
//! ]));
//!
//! let mut out = Vec::new();
//! kmlkit::write_indent(&mut out, &doc, "", "  ")?;
//! assert!(String::from_utf8(out).unwrap().contains("<name>Simple placemark</name>"));
//! # Ok::<(), kmlkit::Error>(())
//! ```
//!
//! ## Shared styles
//!
//! Elements with an `id` are referenced by URL:
//!
//! ```
//! use kmlkit::{Color, elements, line_style, placemark, shared_style, style_url, width, color};
//!
//! let style = shared_style("thick", elements![line_style(elements![color(Color::rgb(255, 0, 0)), width(4.0)])]);
//! let feature = placemark(elements![style_url(&style.url())]);
//! # let _ = feature;
//! ```

pub mod catalog;
pub mod element;
pub mod ellipsoid;
pub mod encode;
pub mod error;
pub mod icon;
pub mod kmz;
pub mod route;
pub mod ser;
pub mod sphere;

pub use catalog::*;
pub use element::coordinates::{
    Coordinate, CoordinatesElement, CoordinatesFlatElement, CoordinatesSliceElement,
    GxAnglesElement, GxCoordElement, coordinates, coordinates_flat, coordinates_slice, gx_angles,
    gx_coord,
};
pub use element::root::{GX_NAMESPACE, GxKmlElement, KmlElement, NAMESPACE, gx_kml, kml};
pub use element::schema::{
    SchemaFieldElement, ValueElement, data, gx_float64_value, gx_int_value, gx_simple_array_data,
    gx_simple_array_field, gx_value, named_schema, schema, schema_data, simple_data, simple_field,
    value,
};
pub use element::snippet::{SnippetElement, link_snippet, snippet};
pub use element::{Attr, CompoundElement, Element, SharedElement, SimpleElement, StartTag};
pub use ellipsoid::Ellipsoid;
pub use encode::{Color, Scalar, Value};
pub use error::{Error, Result};
pub use kmz::{Compression, DOC_KML, KmzConfig, KmzWriter, Payload, write_kmz};
pub use ser::{Encoder, Indent, to_xml_string, write, write_indent, write_with};
pub use sphere::Sphere;

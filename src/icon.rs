//! Hrefs of the standard Google Earth icons.
//!
//! See <http://kml4earth.appspot.com/icons.html> for the catalog.

use crate::catalog::{Units, Vec2, hot_spot, href, icon, icon_style};
use crate::element::CompoundElement;
use crate::elements;

/// The icon showing `c`, for `'1'..='9'` and `'A'..='Z'`.
pub fn character_href(c: char) -> Option<String> {
    match c {
        '1'..='9' => Some(palette_href(3, c as u32 - '1' as u32)),
        'A'..='Z' => {
            let i = c as u32 - 'A' as u32;
            Some(palette_href(5, i % 8 + 16 * ((31 - i) / 8)))
        }
        _ => None,
    }
}

/// The default yellow pushpin.
pub fn default_href() -> String {
    pushpin_href("ylw")
}

/// The empty icon.
pub fn none_href() -> String {
    palette_href(2, 15)
}

/// The icon showing `n`, for `1..=10`.
pub fn number_href(n: u32) -> Option<String> {
    match n {
        1..=10 => Some(palette_href(3, (n - 1) % 8 + 16 * ((n - 1) / 8))),
        _ => None,
    }
}

pub fn paddle_href(id: &str) -> String {
    format!("https://maps.google.com/mapfiles/kml/paddle/{id}.png")
}

/// An `<IconStyle>` for the paddle icon `id`, anchored at the bottom
/// center of the image.
pub fn paddle_icon_style(id: &str) -> CompoundElement {
    icon_style(elements![
        hot_spot(Vec2::new(0.5, 0.0, Units::Fraction, Units::Fraction)),
        icon(elements![href(&paddle_href(id))]),
    ])
}

pub fn palette_href(palette: u32, icon: u32) -> String {
    format!("https://maps.google.com/mapfiles/kml/pal{palette}/icon{icon}.png")
}

/// Pushpin of `color`: one of `blue`, `green`, `ltblu`, `pink`, `purple`,
/// `red`, `wht` or `ylw`.
pub fn pushpin_href(color: &str) -> String {
    format!("https://maps.google.com/mapfiles/kml/pushpin/{color}-pushpin.png")
}

pub fn shape_href(shape: &str) -> String {
    format!("http://maps.google.com/mapfiles/kml/shapes/{shape}.png")
}

/// Directional track icon `i`.
pub fn track_href(i: u32) -> String {
    format!("https://earth.google.com/images/kml-icons/track-directional/track-{i}.png")
}

/// Track icon for when there is no heading.
pub fn track_none_href() -> String {
    "https://earth.google.com/images/kml-icons/track-directional/track-none.png".to_string()
}

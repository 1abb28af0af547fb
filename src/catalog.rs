//! One constructor per KML element.
//!
//! Each function maps an element name to a leaf or compound element; the
//! tables below are the whole catalog. Specialized elements live in
//! [`crate::element`] and are re-exported from the crate root.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::element::{CompoundElement, Element, SharedElement, SimpleElement, StartTag};
use crate::encode::{Color, Scalar, format_float};

macro_rules! kml_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// The schema token for this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Scalar for $name {
            fn encode(&self) -> Cow<'_, str> {
                Cow::Borrowed(self.as_str())
            }
        }
    };
}

kml_enum! {
    AltitudeMode {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
    }
}

kml_enum! {
    ColorMode {
        Normal => "normal",
        Random => "random",
    }
}

kml_enum! {
    DisplayMode {
        Default => "default",
        Hide => "hide",
    }
}

kml_enum! {
    GridOrigin {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
}

kml_enum! {
    ItemIconMode {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
}

kml_enum! {
    ListItemType {
        RadioFolder => "radioFolder",
        Check => "check",
        CheckHideChildren => "checkHideChildren",
        CheckOffOnly => "checkOffOnly",
    }
}

kml_enum! {
    RefreshMode {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
}

kml_enum! {
    Shape {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
}

kml_enum! {
    StyleState {
        Normal => "normal",
        Highlight => "highlight",
    }
}

kml_enum! {
    /// Units of a [`Vec2`] component.
    Units {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
}

kml_enum! {
    ViewRefreshMode {
        Never => "never",
        OnRequest => "onRequest",
        OnStop => "onStop",
        OnRegion => "onRegion",
    }
}

kml_enum! {
    GxAltitudeMode {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
        ClampToSeaFloor => "clampToSeaFloor",
        RelativeToSeaFloor => "relativeToSeaFloor",
    }
}

kml_enum! {
    GxFlyToMode {
        Bounce => "bounce",
        Smooth => "smooth",
    }
}

kml_enum! {
    GxPlayMode {
        Pause => "pause",
    }
}

kml_enum! {
    GxOptionName {
        HistoricalImagery => "historicalimagery",
        StreetView => "streetview",
        Sunlight => "sunlight",
    }
}

/// A screen position, written as `x`, `y`, `xunits` and `yunits`
/// attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
    pub x_units: Units,
    pub y_units: Units,
}

impl Vec2 {
    pub fn new(x: f64, y: f64, x_units: Units, y_units: Units) -> Self {
        Self {
            x,
            y,
            x_units,
            y_units,
        }
    }

    fn start_tag(&self, name: &'static str) -> StartTag {
        StartTag::new(name)
            .with_attr("x", format_float(self.x))
            .with_attr("y", format_float(self.y))
            .with_attr("xunits", self.x_units.as_str())
            .with_attr("yunits", self.y_units.as_str())
    }
}

macro_rules! leaves {
    ($($fn_name:ident($ty:ty) => $tag:literal;)*) => {
        $(
            #[doc = concat!("A `<", $tag, ">` element.")]
            pub fn $fn_name(value: $ty) -> SimpleElement {
                SimpleElement::new($tag, value)
            }
        )*
    };
}

macro_rules! time_leaves {
    ($($fn_name:ident => $tag:literal;)*) => {
        $(
            #[doc = concat!("A `<", $tag, ">` element holding an RFC 3339 time.")]
            pub fn $fn_name<Tz>(value: DateTime<Tz>) -> SimpleElement
            where
                Tz: TimeZone,
                Tz::Offset: fmt::Display,
            {
                SimpleElement::new($tag, value)
            }
        )*
    };
}

macro_rules! vec2_leaves {
    ($($fn_name:ident => $tag:literal;)*) => {
        $(
            #[doc = concat!("A `<", $tag, ">` element.")]
            pub fn $fn_name(value: Vec2) -> SimpleElement {
                SimpleElement::with_tag(value.start_tag($tag), "")
            }
        )*
    };
}

macro_rules! compounds {
    ($($fn_name:ident => $tag:literal;)*) => {
        $(
            #[doc = concat!("A `<", $tag, ">` element.")]
            pub fn $fn_name(children: Vec<Box<dyn Element>>) -> CompoundElement {
                CompoundElement::new($tag, children)
            }
        )*
    };
}

leaves! {
    address(&str) => "address";
    altitude(f64) => "altitude";
    altitude_mode(AltitudeMode) => "altitudeMode";
    bg_color(Color) => "bgColor";
    bottom_fov(f64) => "bottomFov";
    color(Color) => "color";
    color_mode(ColorMode) => "colorMode";
    cookie(&str) => "cookie";
    description(&str) => "description";
    display_mode(DisplayMode) => "displayMode";
    display_name(&str) => "displayName";
    draw_order(i32) => "drawOrder";
    east(f64) => "east";
    extrude(bool) => "extrude";
    fill(bool) => "fill";
    fly_to_view(bool) => "flyToView";
    grid_origin(GridOrigin) => "gridOrigin";
    heading(f64) => "heading";
    href(&str) => "href";
    http_query(&str) => "httpQuery";
    key(StyleState) => "key";
    latitude(f64) => "latitude";
    left_fov(f64) => "leftFov";
    link_description(&str) => "linkDescription";
    link_name(&str) => "linkName";
    list_item_type(ListItemType) => "listItemType";
    longitude(f64) => "longitude";
    max_altitude(f64) => "maxAltitude";
    max_fade_extent(f64) => "maxFadeExtent";
    max_height(i32) => "maxHeight";
    max_lod_pixels(f64) => "maxLodPixels";
    max_session_length(f64) => "maxSessionLength";
    max_snippet_lines(i32) => "maxSnippetLines";
    max_width(i32) => "maxWidth";
    message(&str) => "message";
    min_altitude(f64) => "minAltitude";
    min_fade_extent(f64) => "minFadeExtent";
    min_lod_pixels(f64) => "minLodPixels";
    min_refresh_period(f64) => "minRefreshPeriod";
    name(&str) => "name";
    near(f64) => "near";
    north(f64) => "north";
    open(bool) => "open";
    outline(bool) => "outline";
    phone_number(&str) => "phoneNumber";
    range(f64) => "range";
    refresh_interval(f64) => "refreshInterval";
    refresh_mode(RefreshMode) => "refreshMode";
    refresh_visibility(bool) => "refreshVisibility";
    right_fov(f64) => "rightFov";
    roll(f64) => "roll";
    rotation(f64) => "rotation";
    scale(f64) => "scale";
    shape(Shape) => "shape";
    source_href(&str) => "sourceHref";
    south(f64) => "south";
    state(ItemIconMode) => "state";
    style_url(&str) => "styleUrl";
    target_href(&str) => "targetHref";
    tessellate(bool) => "tessellate";
    text(&str) => "text";
    text_color(Color) => "textColor";
    tile_size(i32) => "tileSize";
    tilt(f64) => "tilt";
    top_fov(f64) => "topFov";
    view_bound_scale(f64) => "viewBoundScale";
    view_format(&str) => "viewFormat";
    view_refresh_mode(ViewRefreshMode) => "viewRefreshMode";
    view_refresh_time(f64) => "viewRefreshTime";
    visibility(bool) => "visibility";
    west(f64) => "west";
    width(f64) => "width";
    x(f64) => "x";
    y(f64) => "y";
    z(f64) => "z";

    gx_altitude_mode(GxAltitudeMode) => "gx:altitudeMode";
    gx_altitude_offset(f64) => "gx:altitudeOffset";
    gx_balloon_visibility(bool) => "gx:balloonVisibility";
    gx_delayed_start(f64) => "gx:delayedStart";
    gx_draw_order(i32) => "gx:drawOrder";
    gx_duration(f64) => "gx:duration";
    gx_fly_to_mode(GxFlyToMode) => "gx:flyToMode";
    gx_h(i32) => "gx:h";
    gx_horiz_fov(f64) => "gx:horizFov";
    gx_interpolate(bool) => "gx:interpolate";
    gx_label_visibility(bool) => "gx:labelVisibility";
    gx_outer_color(Color) => "gx:outerColor";
    gx_outer_width(f64) => "gx:outerWidth";
    gx_physical_width(f64) => "gx:physicalWidth";
    gx_play_mode(GxPlayMode) => "gx:playMode";
    gx_rank(f64) => "gx:rank";
    gx_w(i32) => "gx:w";
    gx_x(i32) => "gx:x";
    gx_y(i32) => "gx:y";
}

time_leaves! {
    begin => "begin";
    end => "end";
    expires => "expires";
    when => "when";
}

vec2_leaves! {
    hot_spot => "hotSpot";
    overlay_xy => "overlayXY";
    rotation_xy => "rotationXY";
    screen_xy => "screenXY";
    size => "size";
}

compounds! {
    alias => "Alias";
    balloon_style => "BalloonStyle";
    camera => "Camera";
    change => "Change";
    create => "Create";
    delete => "Delete";
    document => "Document";
    extended_data => "ExtendedData";
    folder => "Folder";
    ground_overlay => "GroundOverlay";
    icon => "Icon";
    icon_style => "IconStyle";
    image_pyramid => "ImagePyramid";
    item_icon => "ItemIcon";
    label_style => "LabelStyle";
    lat_lon_alt_box => "LatLonAltBox";
    lat_lon_box => "LatLonBox";
    line_string => "LineString";
    line_style => "LineStyle";
    linear_ring => "LinearRing";
    link => "Link";
    list_style => "ListStyle";
    location => "Location";
    lod => "Lod";
    look_at => "LookAt";
    model => "Model";
    model_scale => "Scale";
    multi_geometry => "MultiGeometry";
    network_link => "NetworkLink";
    network_link_control => "NetworkLinkControl";
    orientation => "Orientation";
    pair => "Pair";
    photo_overlay => "PhotoOverlay";
    placemark => "Placemark";
    point => "Point";
    poly_style => "PolyStyle";
    polygon => "Polygon";
    region => "Region";
    resource_map => "ResourceMap";
    screen_overlay => "ScreenOverlay";
    style => "Style";
    style_map => "StyleMap";
    time_span => "TimeSpan";
    time_stamp => "TimeStamp";
    update => "Update";
    view_volume => "ViewVolume";

    gx_animated_update => "gx:AnimatedUpdate";
    gx_fly_to => "gx:FlyTo";
    gx_lat_lon_quad => "gx:LatLonQuad";
    gx_multi_track => "gx:MultiTrack";
    gx_playlist => "gx:Playlist";
    gx_sound_cue => "gx:SoundCue";
    gx_time_span => "gx:TimeSpan";
    gx_time_stamp => "gx:TimeStamp";
    gx_tour => "gx:Tour";
    gx_tour_control => "gx:TourControl";
    gx_track => "gx:Track";
    gx_viewer_options => "gx:ViewerOptions";
    gx_wait => "gx:Wait";
}

/// An `<innerBoundaryIs>` element around one ring.
pub fn inner_boundary_is<E: Element + 'static>(ring: E) -> CompoundElement {
    CompoundElement::new("innerBoundaryIs", vec![Box::new(ring)])
}

/// An `<outerBoundaryIs>` element around one ring.
pub fn outer_boundary_is<E: Element + 'static>(ring: E) -> CompoundElement {
    CompoundElement::new("outerBoundaryIs", vec![Box::new(ring)])
}

/// A `<Style>` that other features reference through its
/// [`url`](SharedElement::url).
pub fn shared_style(id: impl Into<String>, children: Vec<Box<dyn Element>>) -> SharedElement {
    SharedElement::new("Style", id, children)
}

/// A `<StyleMap>` that other features reference through its
/// [`url`](SharedElement::url).
pub fn shared_style_map(id: impl Into<String>, children: Vec<Box<dyn Element>>) -> SharedElement {
    SharedElement::new("StyleMap", id, children)
}

/// A `<gx:option>` element, `enabled` written as `true` or `false`.
pub fn gx_option(name: GxOptionName, enabled: bool) -> SimpleElement {
    let tag = StartTag::new("gx:option")
        .with_attr("name", name.as_str())
        .with_attr("enabled", enabled.to_string());
    SimpleElement::with_tag(tag, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements;
    use chrono::Utc;

    fn xml(e: impl Element) -> String {
        e.to_xml_string().unwrap()
    }

    #[test]
    fn test_simple_elements() {
        assert_eq!(xml(altitude(0.0)), "<altitude>0</altitude>");
        assert_eq!(
            xml(altitude_mode(AltitudeMode::Absolute)),
            "<altitudeMode>absolute</altitudeMode>"
        );
        assert_eq!(
            xml(begin(Utc.with_ymd_and_hms(1876, 8, 1, 0, 0, 0).unwrap())),
            "<begin>1876-08-01T00:00:00Z</begin>"
        );
        assert_eq!(xml(bg_color(Color::BLACK)), "<bgColor>ff000000</bgColor>");
        assert_eq!(xml(color(Color::WHITE)), "<color>ffffffff</color>");
        assert_eq!(xml(description("text")), "<description>text</description>");
        assert_eq!(
            xml(end(Utc.with_ymd_and_hms(2015, 12, 31, 23, 59, 59).unwrap())),
            "<end>2015-12-31T23:59:59Z</end>"
        );
        assert_eq!(xml(extrude(false)), "<extrude>0</extrude>");
        assert_eq!(xml(extrude(true)), "<extrude>1</extrude>");
        assert_eq!(xml(folder(elements![])), "<Folder></Folder>");
        assert_eq!(xml(heading(0.0)), "<heading>0</heading>");
        assert_eq!(
            xml(href("https://www.google.com/")),
            "<href>https://www.google.com/</href>"
        );
        assert_eq!(xml(draw_order(-1)), "<drawOrder>-1</drawOrder>");
        assert_eq!(
            xml(list_item_type(ListItemType::Check)),
            "<listItemType>check</listItemType>"
        );
    }

    #[test]
    fn test_vec2_elements() {
        assert_eq!(
            xml(hot_spot(Vec2::new(0.5, 0.5, Units::Pixels, Units::Pixels))),
            r#"<hotSpot x="0.5" y="0.5" xunits="pixels" yunits="pixels"></hotSpot>"#
        );
        assert_eq!(
            xml(overlay_xy(Vec2::new(0.0, 0.0, Units::Fraction, Units::Fraction))),
            r#"<overlayXY x="0" y="0" xunits="fraction" yunits="fraction"></overlayXY>"#
        );
    }

    #[test]
    fn test_boundaries() {
        let p = polygon(elements![
            outer_boundary_is(linear_ring(elements![])),
            inner_boundary_is(linear_ring(elements![])),
        ]);
        assert_eq!(
            xml(p),
            "<Polygon><outerBoundaryIs><LinearRing></LinearRing></outerBoundaryIs>\
             <innerBoundaryIs><LinearRing></LinearRing></innerBoundaryIs></Polygon>"
        );
    }

    #[test]
    fn test_shared_style() {
        let s = shared_style("yellowLineGreenPoly", elements![line_style(elements![width(4.0)])]);
        assert_eq!(s.url(), "#yellowLineGreenPoly");
        assert_eq!(
            xml(s),
            r#"<Style id="yellowLineGreenPoly"><LineStyle><width>4</width></LineStyle></Style>"#
        );
        let m = shared_style_map("", elements![pair(elements![key(StyleState::Normal)])]);
        assert_eq!(m.url(), "");
        assert_eq!(xml(m), "<StyleMap><Pair><key>normal</key></Pair></StyleMap>");
    }

    #[test]
    fn test_gx_elements() {
        assert_eq!(
            xml(gx_option(GxOptionName::StreetView, false)),
            r#"<gx:option name="streetview" enabled="false"></gx:option>"#
        );
        assert_eq!(
            xml(gx_altitude_mode(GxAltitudeMode::ClampToSeaFloor)),
            "<gx:altitudeMode>clampToSeaFloor</gx:altitudeMode>"
        );
        assert_eq!(
            xml(gx_tour(elements![gx_playlist(elements![gx_wait(elements![gx_duration(2.5)])])])),
            "<gx:Tour><gx:Playlist><gx:Wait><gx:duration>2.5</gx:duration></gx:Wait></gx:Playlist></gx:Tour>"
        );
    }
}

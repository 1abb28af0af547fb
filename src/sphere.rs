//! Coordinates on a sphere. All angles are in degrees.

use crate::element::coordinates::Coordinate;

/// A sphere of radius `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
}

impl Sphere {
    /// The unit sphere.
    pub const UNIT: Sphere = Sphere { radius: 1.0 };

    /// The FAI sphere, in meters.
    pub const FAI: Sphere = Sphere { radius: 6_371_000.0 };

    /// A sphere whose radius is the semi-major axis of the WGS84 ellipsoid,
    /// in meters.
    pub const WGS84: Sphere = Sphere { radius: 6_378_137.0 };

    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// The coordinate `distance` away from `origin` along `bearing`.
    /// Altitude is carried over from `origin`.
    pub fn offset(&self, origin: Coordinate, distance: f64, bearing: f64) -> Coordinate {
        let lat1 = origin.lat.to_radians();
        let bearing = bearing.to_radians();
        let angular = distance / self.radius;
        let lat = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon = origin.lon.to_radians()
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat.sin());
        Coordinate::with_alt(lon.to_degrees(), lat.to_degrees(), origin.alt)
    }

    /// A closed ring approximating a circle of `radius` around `center`,
    /// never straying more than `max_err` from the true circle.
    ///
    /// The last coordinate repeats the first.
    pub fn circle(&self, center: Coordinate, radius: f64, max_err: f64) -> Vec<Coordinate> {
        let vertices = (std::f64::consts::PI / ((radius - max_err) / (radius + max_err)).acos())
            .ceil() as usize;
        let mut ring: Vec<Coordinate> = (0..vertices)
            .map(|i| self.offset(center, radius, 360.0 * i as f64 / vertices as f64))
            .collect();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        ring
    }

    /// Great-circle distance between `c1` and `c2`.
    pub fn haversine_distance(&self, c1: Coordinate, c2: Coordinate) -> f64 {
        let lat1 = c1.lat.to_radians();
        let lat2 = c2.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (c2.lon - c1.lon).to_radians();
        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * self.radius * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Initial bearing from `c1` to `c2`, in `-180..=180`.
    pub fn initial_bearing_to(&self, c1: Coordinate, c2: Coordinate) -> f64 {
        let lat1 = c1.lat.to_radians();
        let lat2 = c2.lat.to_radians();
        let dlon = (c2.lon - c1.lon).to_radians();
        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        y.atan2(x).to_degrees()
    }
}

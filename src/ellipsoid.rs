//! Distances on an ellipsoid.

use crate::element::coordinates::Coordinate;

/// An ellipsoid with semi-major axis `a` and flattening `flattening`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub a: f64,
    pub flattening: f64,
}

impl Ellipsoid {
    /// The WGS84 ellipsoid.
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        flattening: 1.0 / 298.257223563,
    };

    /// Distance between `c1` and `c2` in the units of `a`, using the
    /// ellipsoid formula from annex C of the FAI Sporting Code, Section 7F
    /// (XC scoring).
    pub fn distance(&self, c1: Coordinate, c2: Coordinate) -> f64 {
        let (lat1, lon1) = (c1.lat.to_radians(), c1.lon.to_radians());
        let (lat2, lon2) = (c2.lat.to_radians(), c2.lon.to_radians());
        if lat1 == lat2 && lon1 == lon2 {
            return 0.0;
        }

        let one_minus_f = 1.0 - self.flattening;
        let theta1 = (one_minus_f * lat1.tan()).atan();
        let theta2 = (one_minus_f * lat2.tan()).atan();
        let theta_m = (theta1 + theta2) / 2.0;
        let d_theta_m = (theta2 - theta1) / 2.0;
        let d_lambda_m = (lon2 - lon1) / 2.0;

        let sin2_theta_m = theta_m.sin().powi(2);
        let cos2_theta_m = theta_m.cos().powi(2);
        let sin2_d_theta_m = d_theta_m.sin().powi(2);
        let cos2_d_theta_m = d_theta_m.cos().powi(2);
        let sin2_d_lambda_m = d_lambda_m.sin().powi(2);

        let h = cos2_theta_m - sin2_d_theta_m;
        let l = sin2_d_theta_m + h * sin2_d_lambda_m;
        let cos_d = 1.0 - 2.0 * l;
        let d = cos_d.acos();
        let sin_d = d.sin();
        let one_minus_l = 1.0 - l;
        if sin_d == 0.0 || l == 0.0 || one_minus_l == 0.0 {
            return 0.0;
        }

        let u = 2.0 * sin2_theta_m * cos2_d_theta_m / one_minus_l;
        let v = 2.0 * sin2_d_theta_m * cos2_theta_m / l;
        let x = u + v;
        let y = u - v;
        let t = d / sin_d;
        let dd = 4.0 * t * t;
        let e = 2.0 * cos_d;
        let a = dd * e;
        let b = 2.0 * dd;
        let c = t - (a - e) / 2.0;
        let n1 = x * (a + c * x);
        let n2 = y * (b + e * y);
        let n3 = dd * x * y;
        let delta1 = self.flattening * (t * x - y) / 4.0;
        let delta2 = self.flattening * self.flattening / 64.0 * (n1 - n2 + n3);
        self.a * sin_d * (t - delta1 + delta2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    #[test]
    fn test_identical_points() {
        let c = Coordinate::new(6.5, 46.5);
        assert_eq!(Ellipsoid::WGS84.distance(c, c), 0.0);
    }

    #[test]
    fn test_close_to_spherical_distance() {
        // A 0.02 degree step is about 3 km near the equator.
        const DELTA: f64 = 0.02;
        const TOLERANCE: f64 = 11.0;
        for lat in (-89..=89).step_by(2) {
            for lon in (-179..=179).step_by(2) {
                let c1 = Coordinate::new(lon as f64, lat as f64);
                for dlat in [-DELTA, DELTA] {
                    for dlon in [-DELTA, DELTA] {
                        let c2 = Coordinate::new(lon as f64 + dlon, lat as f64 + dlat);
                        let spherical = Sphere::WGS84.haversine_distance(c1, c2);
                        let ellipsoidal = Ellipsoid::WGS84.distance(c1, c2);
                        assert!(
                            (ellipsoidal - spherical).abs() < TOLERANCE,
                            "{c1:?} -> {c2:?}: {ellipsoidal} vs {spherical}"
                        );
                    }
                }
            }
        }
    }
}

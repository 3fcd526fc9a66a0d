//! Latitude/longitude pairs and their conversion to and from [`Point`].

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use orbis_math::{Angle, remainder};
use serde::{Deserialize, Serialize};

use crate::Point;

/// A point on the unit sphere as a pair of angles.
///
/// A `LatLng` is valid when `|lat| ≤ π/2` and `|lng| ≤ π`. Validity is not
/// enforced at construction; check it with [`LatLng::is_valid`] or repair
/// it with [`LatLng::normalized`].
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: Angle,
    pub lng: Angle,
}

impl LatLng {
    /// Tolerance, in radians per component, used by [`LatLng::approx_equal`].
    pub const APPROX_EPSILON: f64 = 1e-15;

    /// Create a `LatLng` from two angles.
    pub const fn new(lat: Angle, lng: Angle) -> Self {
        Self { lat, lng }
    }

    /// Create a `LatLng` from coordinates in degrees.
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lng))
    }

    /// Create a `LatLng` from coordinates in radians.
    pub const fn from_radians(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_radians(lat), Angle::from_radians(lng))
    }

    /// The latitude and longitude of a (not necessarily unit) direction.
    ///
    /// Latitude is `atan2(z, √(x² + y²))` and longitude `atan2(y, x)`. At
    /// the poles the longitude is undefined and comes out as 0.
    pub fn from_point(p: Point) -> Self {
        Self::new(latitude(p), longitude(p))
    }

    /// The unit point `(cos φ·cos θ, cos φ·sin θ, sin φ)`.
    pub fn to_point(self) -> Point {
        let phi = self.lat.radians();
        let theta = self.lng.radians();
        let cos_phi = phi.cos();
        Point::new(theta.cos() * cos_phi, theta.sin() * cos_phi, phi.sin())
    }

    /// Returns true if the latitude is within ±π/2 and the longitude within ±π.
    pub fn is_valid(self) -> bool {
        self.lat.radians().abs() <= FRAC_PI_2 && self.lng.radians().abs() <= PI
    }

    /// The equivalent valid `LatLng`: latitude clamped to [-π/2, π/2] and
    /// longitude wrapped into [-π, π].
    pub fn normalized(self) -> Self {
        let lat = self.lat.radians().clamp(-FRAC_PI_2, FRAC_PI_2);
        let lng = remainder(self.lng.radians(), 2.0 * PI);
        Self::from_radians(lat, lng)
    }

    /// Great-circle distance to `other`, by the haversine formula.
    ///
    /// Stays accurate for small separations where the spherical law of
    /// cosines does not.
    pub fn distance(self, other: LatLng) -> Angle {
        let (lat1, lat2) = (self.lat.radians(), other.lat.radians());
        let (lng1, lng2) = (self.lng.radians(), other.lng.radians());
        let dlat = (0.5 * (lat2 - lat1)).sin();
        let dlng = (0.5 * (lng2 - lng1)).sin();
        let x = dlat * dlat + dlng * dlng * lat1.cos() * lat2.cos();
        Angle::from_radians(2.0 * x.sqrt().atan2((1.0 - x).max(0.0).sqrt()))
    }

    /// Returns true if both components agree to within [`Self::APPROX_EPSILON`].
    pub fn approx_equal(self, other: LatLng) -> bool {
        (self.lat.radians() - other.lat.radians()).abs() < Self::APPROX_EPSILON
            && (self.lng.radians() - other.lng.radians()).abs() < Self::APPROX_EPSILON
    }
}

/// Latitude of a direction, in [-π/2, π/2].
pub(crate) fn latitude(p: Point) -> Angle {
    let v = p.vector();
    Angle::from_radians(v.z.atan2((v.x * v.x + v.y * v.y).sqrt()))
}

/// Longitude of a direction, in [-π, π].
pub(crate) fn longitude(p: Point) -> Angle {
    let v = p.vector();
    Angle::from_radians(v.y.atan2(v.x))
}

impl From<Point> for LatLng {
    fn from(p: Point) -> Self {
        LatLng::from_point(p)
    }
}

impl From<LatLng> for Point {
    fn from(ll: LatLng) -> Self {
        ll.to_point()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lat, self.lng)
    }
}

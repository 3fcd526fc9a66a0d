//! Spherical caps: the part of the unit sphere within a fixed angle of a
//! center point.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use orbis_math::{Angle, ArcInterval, Interval, remainder};
use serde::{Deserialize, Serialize};

use crate::latlng::{latitude, longitude};
use crate::{Point, Rect};

/// Multiplier applied to squared chord distances in [`Cap::add_point`] so
/// that the grown cap contains the added point despite rounding.
const ROUND_UP: f64 = 1.0 + 1.0 / (1u64 << 52) as f64;

/// Height of a cap with the given angular radius, `1 - cos(radius)`.
///
/// Negative radii map to [`Cap::EMPTY_HEIGHT`] and radii of π or more to
/// [`Cap::FULL_HEIGHT`].
pub fn radius_to_height(radius: Angle) -> f64 {
    let r = radius.radians();
    if r < 0.0 {
        return Cap::EMPTY_HEIGHT;
    }
    if r >= PI {
        return Cap::FULL_HEIGHT;
    }
    // 2·sin²(r/2) is 1 - cos(r) without the cancellation for small radii.
    let s = (0.5 * r).sin();
    2.0 * s * s
}

/// A disc-shaped region of the sphere, bounded by a plane cutting the
/// sphere at distance `1 - height` from the origin along `center`.
///
/// The height is `1 - cos(r)` for angular radius `r`: 0 is a single point,
/// 1 a hemisphere and 2 the whole sphere. A negative height is empty.
///
/// The center is expected to be unit length. Constructors do not check
/// this; see [`Cap::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cap {
    center: Point,
    height: f64,
}

impl Cap {
    /// Height of the empty cap.
    pub const EMPTY_HEIGHT: f64 = -1.0;
    /// Height of a cap containing exactly its center.
    pub const ZERO_HEIGHT: f64 = 0.0;
    /// Height of the cap covering the whole sphere.
    pub const FULL_HEIGHT: f64 = 2.0;
    /// Height tolerance used by [`Cap::approx_equal`].
    pub const APPROX_EPSILON: f64 = 1e-14;

    const SENTINEL_CENTER: Point = Point::new(1.0, 0.0, 0.0);

    /// The cap containing only `center`.
    pub const fn from_point(center: Point) -> Self {
        Self { center, height: Self::ZERO_HEIGHT }
    }

    /// A cap with the given center and height, taken as-is.
    pub const fn from_center_height(center: Point, height: f64) -> Self {
        Self { center, height }
    }

    /// The cap of all points within `radius` of `center`. A negative radius
    /// gives the empty cap and a radius of π or more the full one.
    pub fn from_center_angle(center: Point, radius: Angle) -> Self {
        Self { center, height: radius_to_height(radius) }
    }

    /// The cap containing no points.
    pub const fn empty() -> Self {
        Self { center: Self::SENTINEL_CENTER, height: Self::EMPTY_HEIGHT }
    }

    /// The cap containing every point.
    pub const fn full() -> Self {
        Self { center: Self::SENTINEL_CENTER, height: Self::FULL_HEIGHT }
    }

    /// The center of the cap.
    pub const fn center(self) -> Point {
        self.center
    }

    /// Distance from the cap's boundary plane to the tangent plane at `center`.
    pub const fn height(self) -> f64 {
        self.height
    }

    /// Returns true if the center is unit length and the height lies in
    /// `[EMPTY_HEIGHT, FULL_HEIGHT]`.
    pub fn is_valid(self) -> bool {
        self.center.is_unit() && self.height <= Self::FULL_HEIGHT && self.height >= Self::EMPTY_HEIGHT
    }

    /// Returns true if the cap contains no points.
    pub fn is_empty(self) -> bool {
        self.height < 0.0
    }

    /// Returns true if the cap covers the whole sphere.
    pub fn is_full(self) -> bool {
        self.height >= Self::FULL_HEIGHT
    }

    /// Angular radius of the cap: 0 when empty, π when full.
    pub fn radius(self) -> Angle {
        if self.is_empty() {
            return Angle::ZERO;
        }
        if self.is_full() {
            return Angle::STRAIGHT;
        }
        // Inverse of 2·sin²(r/2); better conditioned than acos(1 - h) for small caps.
        Angle::from_radians(2.0 * (0.5 * self.height).sqrt().asin())
    }

    /// Surface area of the cap on the unit sphere.
    pub fn area(self) -> f64 {
        2.0 * PI * self.height.max(0.0)
    }

    /// The closure of the region outside this cap. The complements of the
    /// empty and full caps are each other, and the complement of a single
    /// point is full.
    pub fn complement(self) -> Cap {
        let height = if self.is_full() {
            Self::EMPTY_HEIGHT
        } else {
            Self::FULL_HEIGHT - self.height.max(Self::ZERO_HEIGHT)
        };
        Cap::from_center_height(self.center.antipode(), height)
    }

    /// Returns true if `p` lies in the closed cap.
    pub fn contains_point(self, p: Point) -> bool {
        (self.center.vector() - p.vector()).norm2() <= 2.0 * self.height
    }

    /// Returns true if `p` lies strictly inside the cap.
    pub fn interior_contains_point(self, p: Point) -> bool {
        self.is_full() || (self.center.vector() - p.vector()).norm2() < 2.0 * self.height
    }

    /// Returns true if `other` is a subset of this cap.
    pub fn contains(self, other: Cap) -> bool {
        if self.is_full() || other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        self.radius().radians()
            >= self.center.angle(other.center).radians() + other.radius().radians()
    }

    /// Returns true if the two closed caps share at least one point.
    pub fn intersects(self, other: Cap) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.radius().radians() + other.radius().radians()
            >= self.center.angle(other.center).radians()
    }

    /// Returns true if the interior of this cap meets `other`. A cap of
    /// zero height has no interior.
    pub fn interior_intersects(self, other: Cap) -> bool {
        if self.height <= Self::ZERO_HEIGHT || other.is_empty() {
            return false;
        }
        self.radius().radians() + other.radius().radians()
            > self.center.angle(other.center).radians()
    }

    /// The smallest cap with the same center that contains both this cap
    /// and `p`. Adding a point to the empty cap gives the cap at that point.
    pub fn add_point(self, p: Point) -> Cap {
        if self.is_empty() {
            return Cap::from_point(p);
        }
        let dist2 = (self.center.vector() - p.vector()).norm2();
        let height = self.height.max(ROUND_UP * 0.5 * dist2).min(Self::FULL_HEIGHT);
        Cap::from_center_height(self.center, height)
    }

    /// The cap with the same center whose radius is larger by `distance`.
    /// Expanding the empty cap, or by a negative distance, gives the empty cap.
    pub fn expanded(self, distance: Angle) -> Cap {
        if distance.radians() < 0.0 || self.is_empty() {
            return Cap::empty();
        }
        Cap::from_center_angle(self.center, self.radius() + distance)
    }

    /// The smallest latitude/longitude rectangle containing the cap.
    pub fn rect_bound(self) -> Rect {
        if self.is_empty() {
            return Rect::empty();
        }
        let cap_angle = self.radius().radians();
        let center_lat = latitude(self.center).radians();
        let mut lat = Interval::new(center_lat - cap_angle, center_lat + cap_angle);
        let mut all_longitudes = false;
        if lat.lo <= -FRAC_PI_2 {
            lat.lo = -FRAC_PI_2;
            all_longitudes = true;
        }
        if lat.hi >= FRAC_PI_2 {
            lat.hi = FRAC_PI_2;
            all_longitudes = true;
        }

        let mut lng = ArcInterval::full();
        if !all_longitudes {
            // Law of sines on the triangle formed by the pole, the cap
            // center and a point where a meridian is tangent to the cap.
            let sin_a = cap_angle.sin();
            let sin_c = center_lat.cos();
            if sin_a <= sin_c {
                let angle_a = (sin_a / sin_c).asin();
                let center_lng = longitude(self.center).radians();
                lng = ArcInterval::new(
                    remainder(center_lng - angle_a, 2.0 * PI),
                    remainder(center_lng + angle_a, 2.0 * PI),
                );
            }
        }
        Rect::new(lat, lng)
    }

    /// Returns true if the caps have approximately the same center and
    /// height. Caps that are nearly empty or nearly full compare equal to
    /// the empty or full cap regardless of center.
    pub fn approx_equal(self, other: Cap) -> bool {
        let eps = Self::APPROX_EPSILON;
        (self.center.approx_equal(other.center) && (self.height - other.height).abs() <= eps)
            || (self.is_empty() && other.height <= eps)
            || (other.is_empty() && self.height <= eps)
            || (self.is_full() && other.height >= Self::FULL_HEIGHT - eps)
            || (other.is_full() && self.height >= Self::FULL_HEIGHT - eps)
    }
}

impl Default for Cap {
    fn default() -> Self {
        Cap::empty()
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[center={}, radius={}]", self.center, self.radius())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LatLng;

    const EPSILON: f64 = 1e-14;
    const TINY_RAD: f64 = 1e-10;

    const X_AXIS_PT: Point = Point::new(1.0, 0.0, 0.0);
    const Y_AXIS_PT: Point = Point::new(0.0, 1.0, 0.0);

    fn x_axis() -> Cap {
        Cap::from_point(X_AXIS_PT)
    }

    fn hemi() -> Cap {
        Cap::from_center_height(Point::new(1.0, 0.0, 1.0).normalize(), 1.0)
    }

    fn concave() -> Cap {
        Cap::from_center_angle(
            LatLng::from_degrees(80.0, 10.0).to_point(),
            Angle::from_degrees(150.0),
        )
    }

    fn tiny() -> Cap {
        Cap::from_center_angle(
            Point::new(1.0, 2.0, 3.0).normalize(),
            Angle::from_radians(TINY_RAD),
        )
    }

    #[test]
    fn test_empty_full_valid() {
        let x_comp = x_axis().complement();
        let cases = [
            // (cap, empty, full, valid)
            (Cap::from_center_height(Point::default(), 0.0), false, false, false),
            (Cap::empty(), true, false, true),
            (Cap::empty().complement(), false, true, true),
            (Cap::full(), false, true, true),
            (Cap::full().complement(), true, false, true),
            (Cap::default(), true, false, true),
            (x_comp, false, true, true),
            (x_comp.complement(), true, false, true),
            (tiny(), false, false, true),
            (concave(), false, false, true),
            (hemi(), false, false, true),
        ];
        for (cap, empty, full, valid) in cases {
            assert_eq!(cap.is_empty(), empty, "{cap}.is_empty()");
            assert_eq!(cap.is_full(), full, "{cap}.is_full()");
            assert_eq!(cap.is_valid(), valid, "{cap}.is_valid()");
        }
    }

    #[test]
    fn test_center_height_radius() {
        let x = x_axis();
        assert!(x.approx_equal(x.complement().complement()));
        assert_eq!(Cap::full().height(), Cap::FULL_HEIGHT);
        assert_eq!(Cap::full().radius().radians(), PI);
        assert_eq!(Cap::empty().radius().radians(), 0.0);
        assert_eq!(Cap::empty().center(), Cap::default().center());
        assert_eq!(Cap::from_point(Y_AXIS_PT).height(), Cap::ZERO_HEIGHT);
        assert_eq!(x.radius().radians(), 0.0);

        let h = hemi();
        assert_eq!(h.complement().center(), h.center().antipode());
        assert_eq!(h.height(), 1.0);
        assert!((h.radius().radians() - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_complement_is_exact() {
        let c = Cap::from_center_height(Point::new(0.0, 0.6, 0.8), 0.25);
        let cc = c.complement().complement();
        assert_eq!(cc.center(), c.center());
        assert_eq!(cc.height(), c.height());
        assert!(Cap::empty().complement().is_full());
        assert!(Cap::full().complement().is_empty());
    }

    #[test]
    fn test_contains() {
        let cases = [
            (Cap::empty(), Cap::empty(), true),
            (Cap::full(), Cap::empty(), true),
            (Cap::full(), Cap::full(), true),
            (Cap::empty(), x_axis(), false),
            (Cap::full(), x_axis(), true),
            (x_axis(), Cap::full(), false),
            (x_axis(), x_axis(), true),
            (x_axis(), Cap::empty(), true),
            (hemi(), tiny(), true),
            (
                hemi(),
                Cap::from_center_angle(X_AXIS_PT, Angle::from_radians(PI / 4.0 - EPSILON)),
                true,
            ),
            (
                hemi(),
                Cap::from_center_angle(X_AXIS_PT, Angle::from_radians(PI / 4.0 + EPSILON)),
                false,
            ),
            (concave(), hemi(), true),
            (
                concave(),
                Cap::from_center_height(concave().center().antipode(), 0.1),
                false,
            ),
        ];
        for (c1, c2, want) in cases {
            assert_eq!(c1.contains(c2), want, "{c1}.contains({c2})");
        }
    }

    #[test]
    fn test_contains_same_center() {
        let p = Point::new(0.0, 0.0, 1.0);
        for r1 in [0.0, 10.0, 45.0, 90.0, 135.0] {
            for r2 in [0.0, 5.0, 10.0, 60.0, 120.0] {
                let c1 = Cap::from_center_angle(p, Angle::from_degrees(r1));
                let c2 = Cap::from_center_angle(p, Angle::from_degrees(r2));
                assert_eq!(c1.contains(c2), r2 <= r1, "{r1}° cap contains {r2}° cap");
            }
        }
    }

    #[test]
    fn test_contains_point() {
        let tiny = tiny();
        let tangent = tiny
            .center()
            .vector()
            .cross(Point::new(3.0, 2.0, 1.0).vector())
            .normalize();
        let x_comp = x_axis().complement();
        let concave = concave();
        let cases = [
            (x_axis(), X_AXIS_PT, true),
            (x_axis(), Point::new(1.0, 1e-20, 0.0), false),
            (Cap::from_point(Y_AXIS_PT), X_AXIS_PT, false),
            (x_comp, X_AXIS_PT, true),
            (x_comp.complement(), X_AXIS_PT, false),
            (tiny, Point::from(tiny.center().vector() + tangent * (TINY_RAD * 0.99)), true),
            (tiny, Point::from(tiny.center().vector() + tangent * (TINY_RAD * 1.01)), false),
            (hemi(), Point::new(1.0, 0.0, -(1.0 - EPSILON)).normalize(), true),
            (hemi(), X_AXIS_PT, true),
            (hemi().complement(), X_AXIS_PT, false),
            (concave, LatLng::from_degrees(-70.0 * (1.0 - EPSILON), 10.0).to_point(), true),
            (concave, LatLng::from_degrees(-70.0 * (1.0 + EPSILON), 10.0).to_point(), false),
            (concave, LatLng::from_degrees(-50.0 * (1.0 - EPSILON), -170.0).to_point(), true),
            (concave, LatLng::from_degrees(-50.0 * (1.0 + EPSILON), -170.0).to_point(), false),
        ];
        for (cap, p, want) in cases {
            assert_eq!(cap.contains_point(p), want, "{cap}.contains_point({p})");
        }
    }

    #[test]
    fn test_interior_contains_point() {
        let h = hemi();
        assert!(!h.interior_contains_point(Point::new(1.0, 0.0, -(1.0 + EPSILON)).normalize()));
        assert!(h.interior_contains_point(X_AXIS_PT));
        assert!(Cap::full().interior_contains_point(X_AXIS_PT.antipode()));
        assert!(!x_axis().interior_contains_point(X_AXIS_PT));
        assert!(!Cap::empty().interior_contains_point(X_AXIS_PT));
    }

    #[test]
    fn test_interior_intersects() {
        let cases = [
            (Cap::empty(), Cap::empty(), false),
            (Cap::empty(), x_axis(), false),
            (Cap::full(), Cap::empty(), false),
            (Cap::full(), Cap::full(), true),
            (Cap::full(), x_axis(), true),
            (x_axis(), Cap::full(), false),
            (x_axis(), x_axis(), false),
            (x_axis(), Cap::empty(), false),
            (concave(), hemi().complement(), true),
        ];
        for (c1, c2, want) in cases {
            assert_eq!(c1.interior_intersects(c2), want, "{c1}.interior_intersects({c2})");
        }
    }

    #[test]
    fn test_intersects() {
        let north = Cap::from_center_angle(Point::new(0.0, 0.0, 1.0), Angle::from_degrees(50.0));
        let south = Cap::from_center_angle(Point::new(0.0, 0.0, -1.0), Angle::from_degrees(50.0));
        let equator = Cap::from_center_angle(X_AXIS_PT, Angle::from_degrees(45.0));
        assert!(!north.intersects(south));
        assert!(north.intersects(equator));
        assert!(south.intersects(equator));
        assert!(x_axis().intersects(x_axis()));
        assert!(!x_axis().intersects(Cap::empty()));
        assert!(Cap::full().intersects(Cap::from_point(Y_AXIS_PT)));
    }

    #[test]
    fn test_add_point() {
        let c = Cap::empty().add_point(X_AXIS_PT);
        assert_eq!(c.center(), X_AXIS_PT);
        assert_eq!(c.height(), 0.0);

        let c = c.add_point(Y_AXIS_PT);
        assert_eq!(c.center(), X_AXIS_PT);
        assert!((c.height() - 1.0).abs() < 1e-15);
        assert!(c.contains_point(Y_AXIS_PT));

        // Points already inside leave the cap unchanged.
        let same = c.add_point(Point::new(1.0, 1.0, 0.0).normalize());
        assert_eq!(same, c);

        let p = Point::new(-0.3, 0.4, -0.5).normalize();
        assert!(hemi().add_point(p).contains_point(p));
    }

    #[test]
    fn test_add_antipode_gives_valid_full_cap() {
        let c = x_axis().add_point(X_AXIS_PT.antipode());
        assert!(c.is_full(), "{c}");
        assert!(c.is_valid(), "height {} exceeds the full height", c.height());
        assert_eq!(c.height(), Cap::FULL_HEIGHT);
    }

    #[test]
    fn test_expanded() {
        let cap50 = Cap::from_center_angle(X_AXIS_PT, Angle::from_degrees(50.0));
        let cap51 = Cap::from_center_angle(X_AXIS_PT, Angle::from_degrees(51.0));

        assert!(Cap::empty().expanded(Angle::from_radians(Cap::FULL_HEIGHT)).is_empty());
        assert!(Cap::full().expanded(Angle::from_radians(Cap::FULL_HEIGHT)).is_full());
        assert!(cap50.expanded(Angle::ZERO).approx_equal(cap50));
        assert!(cap50.expanded(Angle::from_degrees(1.0)).approx_equal(cap51));
        assert!(!cap50.expanded(Angle::from_degrees(129.99)).is_full());
        assert!(cap50.expanded(Angle::from_degrees(130.01)).is_full());
        assert!(cap50.expanded(Angle::from_degrees(-1.0)).is_empty());
    }

    #[test]
    fn test_radius_to_height() {
        let cases = [
            (Angle::from_radians(-0.5), Cap::EMPTY_HEIGHT),
            (Angle::from_radians(0.0), 0.0),
            (Angle::from_radians(PI), Cap::FULL_HEIGHT),
            (Angle::from_radians(2.0 * PI), Cap::FULL_HEIGHT),
            (Angle::from_degrees(-7.0), Cap::EMPTY_HEIGHT),
            (Angle::from_degrees(-0.0), 0.0),
            (Angle::from_degrees(12.0), 0.02185239926619),
            (Angle::from_degrees(30.0), 0.13397459621556),
            (Angle::from_degrees(45.0), 0.29289321881345),
            (Angle::from_degrees(90.0), 1.0),
            (Angle::from_degrees(179.99), 1.99999998476912),
            (Angle::from_degrees(180.0), Cap::FULL_HEIGHT),
            (Angle::from_degrees(270.0), Cap::FULL_HEIGHT),
            (Angle::from_radians(-1.0), Cap::EMPTY_HEIGHT),
            (Angle::from_radians(1.0), 0.45969769413186),
            (Angle::from_radians(FRAC_PI_2), 1.0),
            (Angle::from_radians(2.0), 1.41614683654714),
            (Angle::from_radians(3.0), 1.98999249660044),
            (Angle::from_radians(4.0), Cap::FULL_HEIGHT),
        ];
        for (radius, want) in cases {
            let got = radius_to_height(radius);
            assert!((got - want).abs() < 1e-13, "radius_to_height({radius}) = {got}, want {want}");
        }
    }

    #[test]
    fn test_area() {
        assert_eq!(Cap::empty().area(), 0.0);
        assert_eq!(Cap::from_point(X_AXIS_PT).area(), 0.0);
        assert!((Cap::full().area() - 4.0 * PI).abs() < 1e-15);
        assert!((hemi().area() - 2.0 * PI).abs() < 1e-15);
    }

    #[test]
    fn test_rect_bound() {
        let deg = |d: f64| d.to_radians();
        let tol = 1e-13;

        let r = Cap::from_center_angle(
            LatLng::from_degrees(-45.0, 57.0).to_point(),
            Angle::from_degrees(50.0),
        )
        .rect_bound();
        assert!((r.lat.lo - deg(-90.0)).abs() < tol, "lat.lo = {}", r.lat.lo);
        assert!((r.lat.hi - deg(5.0)).abs() < tol, "lat.hi = {}", r.lat.hi);
        assert!(r.lng.is_full());

        let r = Cap::from_center_angle(
            LatLng::from_degrees(0.0, 50.0).to_point(),
            Angle::from_degrees(20.0),
        )
        .rect_bound();
        assert!((r.lat.lo - deg(-20.0)).abs() < tol, "lat.lo = {}", r.lat.lo);
        assert!((r.lat.hi - deg(20.0)).abs() < tol, "lat.hi = {}", r.lat.hi);
        assert!((r.lng.lo - deg(30.0)).abs() < tol, "lng.lo = {}", r.lng.lo);
        assert!((r.lng.hi - deg(70.0)).abs() < tol, "lng.hi = {}", r.lng.hi);

        let r = Cap::from_center_angle(
            LatLng::from_degrees(90.0, 123.0).to_point(),
            Angle::from_degrees(10.0),
        )
        .rect_bound();
        assert!((r.lat.lo - deg(80.0)).abs() < tol, "lat.lo = {}", r.lat.lo);
        assert_eq!(r.lat.hi, FRAC_PI_2);
        assert!(r.lng.is_full());

        assert!(Cap::empty().rect_bound().is_empty());
        assert!(Cap::full().rect_bound().is_full());
    }

    #[test]
    fn test_rect_bound_contains_cap_points() {
        let cap = concave().complement();
        let rect = cap.rect_bound();
        for lat in [-80.0, -60.0, -30.0, 0.0, 30.0] {
            for lng in [-170.0, -90.0, 10.0, 100.0] {
                let p = LatLng::from_degrees(lat, lng).to_point();
                if cap.contains_point(p) {
                    assert!(rect.contains_point(p), "{rect} misses ({lat}, {lng})");
                }
            }
        }
    }

    #[test]
    fn test_approx_equal_sentinels() {
        let nearly_empty = Cap::from_center_height(Y_AXIS_PT, 1e-15);
        let nearly_full = Cap::from_center_height(Y_AXIS_PT, 2.0 - 1e-15);
        assert!(Cap::empty().approx_equal(nearly_empty));
        assert!(nearly_full.approx_equal(Cap::full()));
        assert!(!hemi().approx_equal(hemi().complement()));
    }
}

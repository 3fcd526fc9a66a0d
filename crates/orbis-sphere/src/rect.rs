//! Closed latitude/longitude rectangles.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use orbis_math::{Angle, ArcInterval, Interval, remainder};
use serde::{Deserialize, Serialize};

use crate::{Cap, LatLng, Point};

/// Latitude range of every valid rectangle.
const VALID_LAT: Interval = Interval::new(-FRAC_PI_2, FRAC_PI_2);

/// A closed rectangle in latitude/longitude space.
///
/// Latitude is a linear interval within [-π/2, π/2]; longitude is a
/// circular interval that may wrap through ±π. The rectangle is empty
/// exactly when both intervals are empty.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Rect {
    pub lat: Interval,
    pub lng: ArcInterval,
}

impl Rect {
    /// Create a rectangle from its latitude and longitude intervals, in radians.
    pub const fn new(lat: Interval, lng: ArcInterval) -> Self {
        Self { lat, lng }
    }

    /// The rectangle containing no points.
    pub const fn empty() -> Self {
        Self::new(Interval::empty(), ArcInterval::empty())
    }

    /// The rectangle covering the whole sphere.
    pub const fn full() -> Self {
        Self::new(VALID_LAT, ArcInterval::full())
    }

    /// The degenerate rectangle containing only `ll`.
    pub fn from_lat_lng(ll: LatLng) -> Self {
        Self::new(
            Interval::from_point(ll.lat.radians()),
            ArcInterval::from_point(ll.lng.radians()),
        )
    }

    /// The smallest rectangle containing both points. Longitude takes the
    /// shorter way round.
    pub fn from_point_pair(a: LatLng, b: LatLng) -> Self {
        Self::new(
            Interval::from_point_pair(a.lat.radians(), b.lat.radians()),
            ArcInterval::from_point_pair(a.lng.radians(), b.lng.radians()),
        )
    }

    /// The rectangle centred on `center` with the given latitude and
    /// longitude extents.
    ///
    /// Latitude is clamped to [-90°, 90°] and longitude wraps, becoming full
    /// once the longitude size reaches 360°. For example (in degrees):
    ///
    /// - center (80, 170), size (40, 60) gives lat [60, 90], lng [140, -160]
    /// - center (10, 40), size (210, 400) gives the full rectangle
    /// - center (-90, 180), size (20, 50) gives lat [-90, -80], lng [155, -155]
    pub fn from_center_size(center: LatLng, size: LatLng) -> Self {
        Self::from_lat_lng(center).expanded(LatLng::new(size.lat / 2.0, size.lng / 2.0))
    }

    /// The smallest rectangle containing every point in `points`. Invalid
    /// points are skipped.
    pub fn from_lat_lngs(points: &[LatLng]) -> Self {
        points.iter().fold(Self::empty(), |rect, &ll| rect.add_point(ll))
    }

    /// Returns true if the latitude bounds lie in [-π/2, π/2], the longitude
    /// interval is valid, and the two are either both empty or both not.
    pub fn is_valid(self) -> bool {
        self.lat.lo.abs() <= FRAC_PI_2
            && self.lat.hi.abs() <= FRAC_PI_2
            && self.lng.is_valid()
            && self.lat.is_empty() == self.lng.is_empty()
    }

    /// Returns true if the rectangle contains no points.
    pub fn is_empty(self) -> bool {
        self.lat.is_empty()
    }

    /// Returns true if the rectangle covers the whole sphere.
    pub fn is_full(self) -> bool {
        self.lat == VALID_LAT && self.lng.is_full()
    }

    /// Returns true if the rectangle is a single point.
    pub fn is_point(self) -> bool {
        self.lat.lo == self.lat.hi && self.lng.lo == self.lng.hi
    }

    /// The south-west corner.
    pub fn lo(self) -> LatLng {
        LatLng::from_radians(self.lat.lo, self.lng.lo)
    }

    /// The north-east corner.
    pub fn hi(self) -> LatLng {
        LatLng::from_radians(self.lat.hi, self.lng.hi)
    }

    /// The midpoint of both intervals.
    pub fn center(self) -> LatLng {
        LatLng::from_radians(self.lat.center(), self.lng.center())
    }

    /// Latitude and longitude extents. Both are negative for the empty rectangle.
    pub fn size(self) -> LatLng {
        LatLng::from_radians(self.lat.length(), self.lng.length())
    }

    /// Corner `k` for `k` in 0..4, counter-clockwise from the south-west
    /// corner (SW, SE, NE, NW).
    pub fn vertex(self, k: usize) -> LatLng {
        LatLng::from_radians(self.lat.bound(k >> 1), self.lng.bound((k >> 1) ^ (k & 1)))
    }

    /// Surface area of the rectangle on the unit sphere.
    pub fn area(self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let cap_diff = (self.lat.hi.sin() - self.lat.lo.sin()).abs();
        self.lng.length() * cap_diff
    }

    /// The smallest rectangle containing this one and `ll`. Invalid points
    /// leave the rectangle unchanged.
    pub fn add_point(self, ll: LatLng) -> Rect {
        if !ll.is_valid() {
            tracing::debug!(
                lat = ll.lat.degrees(),
                lng = ll.lng.degrees(),
                "ignoring invalid LatLng added to Rect"
            );
            return self;
        }
        Rect::new(
            self.lat.add_point(ll.lat.radians()),
            self.lng.add_point(ll.lng.radians()),
        )
    }

    /// Rectangle grown by `margin.lat` in latitude and `margin.lng` in
    /// longitude on every side. Latitude is clamped to [-π/2, π/2] and
    /// longitude wraps. Negative margins shrink the rectangle; if either
    /// axis collapses the result is empty. An empty rectangle stays empty.
    pub fn expanded(self, margin: LatLng) -> Rect {
        let lat = self.lat.expanded(margin.lat.radians()).intersection(VALID_LAT);
        let lng = self.lng.expanded(margin.lng.radians());
        if lat.is_empty() || lng.is_empty() {
            return Rect::empty();
        }
        Rect::new(lat, lng)
    }

    /// Returns true if `ll` lies in the closed rectangle.
    pub fn contains(self, ll: LatLng) -> bool {
        self.lat.contains(ll.lat.radians()) && self.lng.contains(ll.lng.radians())
    }

    /// Returns true if `p` lies in the closed rectangle.
    pub fn contains_point(self, p: Point) -> bool {
        self.contains(LatLng::from_point(p))
    }

    /// Returns true if `ll` lies strictly inside the rectangle.
    pub fn interior_contains(self, ll: LatLng) -> bool {
        self.lat.interior_contains(ll.lat.radians()) && self.lng.interior_contains(ll.lng.radians())
    }

    /// Returns true if `other` is a subset of this rectangle.
    pub fn contains_rect(self, other: Rect) -> bool {
        self.lat.contains_interval(other.lat) && self.lng.contains_interval(other.lng)
    }

    /// Returns true if the rectangles share at least one point.
    pub fn intersects(self, other: Rect) -> bool {
        self.lat.intersects(other.lat) && self.lng.intersects(other.lng)
    }

    /// The smallest rectangle containing both.
    pub fn union(self, other: Rect) -> Rect {
        Rect::new(self.lat.union(other.lat), self.lng.union(other.lng))
    }

    /// The smallest rectangle containing the intersection of both.
    pub fn intersection(self, other: Rect) -> Rect {
        let lat = self.lat.intersection(other.lat);
        let lng = self.lng.intersection(other.lng);
        if lat.is_empty() || lng.is_empty() {
            return Rect::empty();
        }
        Rect::new(lat, lng)
    }

    /// A cap that contains the rectangle.
    ///
    /// Two candidates are considered: a cap around whichever pole is nearer
    /// the latitude range, and, for rectangles spanning less than 180° of
    /// longitude, a cap around the rectangle's center grown to its four
    /// vertices. The one with the smaller height wins.
    pub fn cap_bound(self) -> Cap {
        if self.is_empty() {
            return Cap::empty();
        }
        let (pole_z, pole_angle) = if self.lat.lo + self.lat.hi < 0.0 {
            (-1.0, FRAC_PI_2 + self.lat.hi)
        } else {
            (1.0, FRAC_PI_2 - self.lat.lo)
        };
        let pole_cap = Cap::from_center_angle(
            Point::new(0.0, 0.0, pole_z),
            Angle::from_radians(pole_angle),
        );

        // Past 180° of longitude the widest point of the rectangle need not
        // be a vertex, so only the pole cap is reliable.
        let lng_span = self.lng.hi - self.lng.lo;
        if remainder(lng_span, 2.0 * PI) >= 0.0 && lng_span < 2.0 * PI {
            let mid_cap = (0..4).fold(
                Cap::from_center_angle(self.center().to_point(), Angle::ZERO),
                |cap, k| cap.add_point(self.vertex(k).to_point()),
            );
            if mid_cap.height() < pole_cap.height() {
                tracing::trace!(
                    mid_height = mid_cap.height(),
                    pole_height = pole_cap.height(),
                    "cap bound centred on rect"
                );
                return mid_cap;
            }
        }
        tracing::trace!(pole_z, pole_height = pole_cap.height(), "cap bound centred on pole");
        pole_cap
    }

    /// Returns true if the latitude and longitude intervals are each
    /// approximately equal.
    pub fn approx_equal(self, other: Rect) -> bool {
        self.lat.approx_equal(other.lat) && self.lng.approx_equal(other.lng)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::empty()
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Rect) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lo{}, Hi{}]", self.lo(), self.hi())
    }
}

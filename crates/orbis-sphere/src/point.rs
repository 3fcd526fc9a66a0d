//! Points on the unit sphere.

use std::fmt;

use glam::DVec3;
use orbis_math::{Angle, Vector};
use serde::{Deserialize, Serialize};

/// A direction in ℝ³, normally of unit length, standing for a point on the
/// unit sphere.
///
/// Unit length is the caller's contract: constructors never normalize on
/// their own, and operations that assume a unit vector do not re-normalize.
/// Use [`Point::normalize`] on raw directions and [`Point::is_unit`] to
/// check untrusted input.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(pub Vector);

impl Point {
    /// Maximum angle, in radians, between two points that
    /// [`Point::approx_equal`] still treats as the same.
    pub const APPROX_EPSILON: f64 = 1e-15;

    /// Create a point from raw coordinates, without normalizing.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point(Vector::new(x, y, z))
    }

    /// Wrap a vector as a point, without normalizing.
    pub const fn from_vector(v: Vector) -> Self {
        Point(v)
    }

    /// The underlying vector.
    pub const fn vector(self) -> Vector {
        self.0
    }

    /// The point scaled to unit length. See [`Vector::normalize`] for the
    /// behaviour on the zero vector.
    pub fn normalize(self) -> Point {
        Point(self.0.normalize())
    }

    /// Returns true if the underlying vector has unit length.
    pub fn is_unit(self) -> bool {
        self.0.is_unit()
    }

    /// The diametrically opposite point.
    pub fn antipode(self) -> Point {
        Point(-self.0)
    }

    /// Dot product of the two directions.
    pub fn dot(self, other: Point) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product of the two directions. The result is not a point.
    pub fn cross(self, other: Point) -> Vector {
        self.0.cross(other.0)
    }

    /// Angle between the two directions, in [0, π].
    pub fn angle(self, other: Point) -> Angle {
        self.0.angle(other.0)
    }

    /// Great-circle distance between two unit points, as an angle.
    pub fn distance(self, other: Point) -> Angle {
        self.angle(other)
    }

    /// Straight-line (chord) distance between the two points.
    pub fn chord_distance(self, other: Point) -> f64 {
        self.0.distance(other.0)
    }

    /// Squared chord distance. For unit points this equals `2·(1 - cos θ)`.
    pub fn chord_distance2(self, other: Point) -> f64 {
        (self.0 - other.0).norm2()
    }

    /// Returns true if the points are within [`Self::APPROX_EPSILON`]
    /// radians of each other.
    pub fn approx_equal(self, other: Point) -> bool {
        self.angle(other).radians() <= Self::APPROX_EPSILON
    }
}

impl From<Vector> for Point {
    fn from(v: Vector) -> Self {
        Point(v)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Point(Vector::from(v))
    }
}

impl From<Point> for DVec3 {
    fn from(p: Point) -> Self {
        p.0.into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

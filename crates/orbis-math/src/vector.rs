use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::Angle;

/// 3D vector in f64 space.
///
/// A pure value type with no invariant on magnitude. The derived
/// `PartialOrd` compares `x`, then `y`, then `z`, which is the
/// deterministic total order used by [`Vector::less_than`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    /// Tolerance on `|norm² - 1|` used by [`Vector::is_unit`].
    pub const UNIT_EPSILON: f64 = 5e-14;

    /// Per-component tolerance used by [`Vector::approx_equal`].
    pub const APPROX_EPSILON: f64 = 1e-16;

    /// Zero vector (0, 0, 0).
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    /// Unit vector in the X direction (1, 0, 0).
    pub const X: Vector = Vector::new(1.0, 0.0, 0.0);

    /// Unit vector in the Y direction (0, 1, 0).
    pub const Y: Vector = Vector::new(0.0, 1.0, 0.0);

    /// Unit vector in the Z direction (0, 0, 1).
    pub const Z: Vector = Vector::new(0.0, 0.0, 1.0);

    /// Create a new Vector with the given coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length √(x² + y² + z²).
    pub fn norm(self) -> f64 {
        self.norm2().sqrt()
    }

    /// Squared length x² + y² + z².
    pub fn norm2(self) -> f64 {
        self.dot(self)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// The zero vector has no direction: dividing by its zero length yields
    /// non-finite components. Callers holding untrusted input should check
    /// [`Vector::is_finite`] or [`Vector::is_unit`] on the result.
    pub fn normalize(self) -> Vector {
        self * (1.0 / self.norm())
    }

    /// Returns true if the squared length is within [`Self::UNIT_EPSILON`] of 1.
    pub fn is_unit(self) -> bool {
        (self.norm2() - 1.0).abs() <= Self::UNIT_EPSILON
    }

    /// Returns true if every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Vector {
        Vector::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the dot product: x₁x₂ + y₁y₂ + z₁z₂
    pub fn dot(self, rhs: Vector) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the right-handed cross product self × rhs.
    pub fn cross(self, rhs: Vector) -> Vector {
        Vector::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Chord length `‖self - rhs‖` between the two vectors.
    pub fn distance(self, rhs: Vector) -> f64 {
        (self - rhs).norm()
    }

    /// Angle between the two vectors, in [0, π].
    ///
    /// Computed as `atan2(‖a × b‖, a · b)`, which stays accurate for nearly
    /// parallel and nearly antiparallel inputs where `acos` of the
    /// normalized dot product loses most of its digits.
    pub fn angle(self, rhs: Vector) -> Angle {
        Angle::from_radians(self.cross(rhs).norm().atan2(self.dot(rhs)))
    }

    /// Index (0 = X, 1 = Y, 2 = Z) of the component with the smallest
    /// absolute value. Ties resolve to the earlier axis.
    pub fn smallest_component(self) -> usize {
        let a = self.abs();
        if a.x <= a.y && a.x <= a.z {
            0
        } else if a.y <= a.z {
            1
        } else {
            2
        }
    }

    /// Index (0 = X, 1 = Y, 2 = Z) of the component with the largest
    /// absolute value. Ties resolve to the earlier axis.
    pub fn largest_component(self) -> usize {
        let a = self.abs();
        if a.x >= a.y && a.x >= a.z {
            0
        } else if a.y >= a.z {
            1
        } else {
            2
        }
    }

    /// Returns a unit vector orthogonal to this one.
    ///
    /// The result is `self × e` normalized, where `e` is the standard basis
    /// axis most nearly orthogonal to `self` (its smallest-magnitude
    /// component). That axis is never parallel to a non-zero `self`, so the
    /// cross product cannot collapse.
    pub fn ortho(self) -> Vector {
        let axis = match self.smallest_component() {
            0 => Vector::X,
            1 => Vector::Y,
            _ => Vector::Z,
        };
        self.cross(axis).normalize()
    }

    /// Lexicographic comparison on (x, y, z).
    pub fn less_than(self, rhs: Vector) -> bool {
        self < rhs
    }

    /// Returns true if every component differs by less than [`Self::APPROX_EPSILON`].
    pub fn approx_equal(self, rhs: Vector) -> bool {
        (self.x - rhs.x).abs() < Self::APPROX_EPSILON
            && (self.y - rhs.y).abs() < Self::APPROX_EPSILON
            && (self.z - rhs.z).abs() < Self::APPROX_EPSILON
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<DVec3> for Vector {
    fn from(v: DVec3) -> Self {
        Vector::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for DVec3 {
    fn from(v: Vector) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Self::Output {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::remainder;

/// A one-dimensional angle, stored in radians.
///
/// Degrees only appear at the boundary ([`Angle::from_degrees`],
/// [`Angle::degrees`]); all arithmetic is radian based.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// One radian.
    pub const RADIAN: Angle = Angle(1.0);

    /// One degree, π/180 radians.
    pub const DEGREE: Angle = Angle(PI / 180.0);

    /// Half a turn, π radians.
    pub const STRAIGHT: Angle = Angle(PI);

    /// Create an angle from a value in radians.
    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// Create an angle from a value in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees * (PI / 180.0))
    }

    /// Create an angle from degrees scaled by 10⁵.
    pub fn from_e5(e5: i32) -> Self {
        Angle::from_degrees(f64::from(e5) * 1e-5)
    }

    /// Create an angle from degrees scaled by 10⁶.
    pub fn from_e6(e6: i32) -> Self {
        Angle::from_degrees(f64::from(e6) * 1e-6)
    }

    /// Create an angle from degrees scaled by 10⁷.
    pub fn from_e7(e7: i32) -> Self {
        Angle::from_degrees(f64::from(e7) * 1e-7)
    }

    /// The angle in radians.
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// The angle in degrees.
    pub fn degrees(self) -> f64 {
        self.0 * (180.0 / PI)
    }

    /// The angle in degrees scaled by 10⁵ and rounded.
    pub fn e5(self) -> i32 {
        (self.degrees() * 1e5).round() as i32
    }

    /// The angle in degrees scaled by 10⁶ and rounded.
    pub fn e6(self) -> i32 {
        (self.degrees() * 1e6).round() as i32
    }

    /// The angle in degrees scaled by 10⁷ and rounded.
    pub fn e7(self) -> i32 {
        (self.degrees() * 1e7).round() as i32
    }

    /// Absolute value of the angle.
    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }

    /// Equivalent angle in the range (-π, π].
    pub fn normalized(self) -> Angle {
        let r = remainder(self.0, 2.0 * PI);
        if r <= -PI { Angle(PI) } else { Angle(r) }
    }

    /// Larger of two angles.
    pub fn max(self, other: Angle) -> Angle {
        Angle(self.0.max(other.0))
    }

    /// Smaller of two angles.
    pub fn min(self, other: Angle) -> Angle {
        Angle(self.0.min(other.0))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}", self.degrees())
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Self::Output {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Self::Output {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Self::Output {
        Angle(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Self::Output {
        Angle(self * rhs.0)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, rhs: f64) -> Self::Output {
        Angle(self.0 / rhs)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        self.0 -= rhs.0;
    }
}

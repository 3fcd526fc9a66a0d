use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::remainder;

/// A closed arc of the unit circle, stored as endpoints `lo` and `hi` in
/// [-π, π] traversed counter-clockwise from `lo` to `hi`.
///
/// When `lo > hi` the arc is "inverted" and passes through ±π. The point -π
/// is always stored as π, except in [`ArcInterval::full`] which is
/// `(-π, π)`. [`ArcInterval::empty`] is `(π, -π)`. Both sentinels are
/// distinct from every proper sub-arc, including the single point π.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcInterval {
    pub lo: f64,
    pub hi: f64,
}

/// Counter-clockwise distance from `a` to `b`, in [0, 2π).
fn positive_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    if d >= 0.0 {
        return d;
    }
    // Written this way so that the result stays exact for a = -π or b = π.
    (b + PI) - (a - PI)
}

impl ArcInterval {
    /// Tolerance used by [`ArcInterval::approx_equal`].
    pub const APPROX_EPSILON: f64 = 1e-15;

    /// Create an arc from its endpoints, folding an endpoint of -π to π
    /// unless the pair describes the full circle.
    pub fn new(lo: f64, hi: f64) -> Self {
        let mut i = Self { lo, hi };
        if lo == -PI && hi != PI {
            i.lo = PI;
        }
        if hi == -PI && lo != PI {
            i.hi = PI;
        }
        i
    }

    /// The empty arc `(π, -π)`.
    pub const fn empty() -> Self {
        Self { lo: PI, hi: -PI }
    }

    /// The full circle `(-π, π)`.
    pub const fn full() -> Self {
        Self { lo: -PI, hi: PI }
    }

    /// The degenerate arc containing only `p`.
    pub fn from_point(p: f64) -> Self {
        let p = if p == -PI { PI } else { p };
        Self { lo: p, hi: p }
    }

    /// The shorter arc between `a` and `b`. When both arcs have length π the
    /// one running counter-clockwise from `a` to `b` is returned.
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        let a = if a == -PI { PI } else { a };
        let b = if b == -PI { PI } else { b };
        if positive_distance(a, b) <= PI {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns true if both endpoints lie in [-π, π] and -π only appears as
    /// part of the full or empty sentinel.
    pub fn is_valid(self) -> bool {
        self.lo.abs() <= PI
            && self.hi.abs() <= PI
            && !(self.lo == -PI && self.hi != PI)
            && !(self.hi == -PI && self.lo != PI)
    }

    /// Returns true if this is the full circle.
    pub fn is_full(self) -> bool {
        self.lo == -PI && self.hi == PI
    }

    /// Returns true if this is the empty arc.
    pub fn is_empty(self) -> bool {
        self.lo == PI && self.hi == -PI
    }

    /// Returns true if the arc wraps through ±π (`lo > hi`). The empty arc
    /// is inverted; the full circle is not.
    pub fn is_inverted(self) -> bool {
        self.lo > self.hi
    }

    /// The arc with its endpoints swapped.
    pub fn invert(self) -> Self {
        Self { lo: self.hi, hi: self.lo }
    }

    /// Midpoint of the arc, in [-π, π].
    pub fn center(self) -> f64 {
        let c = 0.5 * (self.lo + self.hi);
        if !self.is_inverted() {
            return c;
        }
        if c <= 0.0 { c + PI } else { c - PI }
    }

    /// Angular length of the arc; -1 for the empty arc.
    pub fn length(self) -> f64 {
        let l = self.hi - self.lo;
        if l >= 0.0 {
            return l;
        }
        let l = l + 2.0 * PI;
        if l > 0.0 { l } else { -1.0 }
    }

    /// `lo` for `i == 0`, `hi` otherwise.
    pub fn bound(self, i: usize) -> f64 {
        if i == 0 { self.lo } else { self.hi }
    }

    /// The closure of the points not in this arc. The complement of a single
    /// point is the full circle.
    pub fn complement(self) -> Self {
        if self.lo == self.hi {
            return Self::full();
        }
        self.invert()
    }

    /// Containment test for `p` in (-π, π].
    fn fast_contains(self, p: f64) -> bool {
        if self.is_inverted() {
            (p >= self.lo || p <= self.hi) && !self.is_empty()
        } else {
            p >= self.lo && p <= self.hi
        }
    }

    /// Returns true if the closed arc contains the angle `p` in [-π, π].
    pub fn contains(self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        self.fast_contains(p)
    }

    /// Returns true if the open arc contains the angle `p` in [-π, π].
    pub fn interior_contains(self, p: f64) -> bool {
        let p = if p == -PI { PI } else { p };
        if self.is_inverted() {
            p > self.lo || p < self.hi
        } else {
            (p > self.lo && p < self.hi) || self.is_full()
        }
    }

    /// Returns true if `other` is a subset of this arc.
    pub fn contains_interval(self, other: ArcInterval) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                return other.lo >= self.lo && other.hi <= self.hi;
            }
            return (other.lo >= self.lo || other.hi <= self.hi) && !self.is_empty();
        }
        if other.is_inverted() {
            return self.is_full() || other.is_empty();
        }
        other.lo >= self.lo && other.hi <= self.hi
    }

    /// Returns true if `other` is a subset of this arc's interior.
    pub fn interior_contains_interval(self, other: ArcInterval) -> bool {
        if self.is_inverted() {
            if other.is_inverted() {
                return (other.lo > self.lo && other.hi < self.hi) || other.is_empty();
            }
            return other.lo > self.lo || other.hi < self.hi;
        }
        if other.is_inverted() {
            return self.is_full() || other.is_empty();
        }
        (other.lo > self.lo && other.hi < self.hi) || self.is_full()
    }

    /// Returns true if the two closed arcs share at least one point.
    pub fn intersects(self, other: ArcInterval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if self.is_inverted() {
            return other.is_inverted() || other.lo <= self.hi || other.hi >= self.lo;
        }
        if other.is_inverted() {
            return other.lo <= self.hi || other.hi >= self.lo;
        }
        other.lo <= self.hi && other.hi >= self.lo
    }

    /// Returns true if the interior of this arc meets `other`.
    pub fn interior_intersects(self, other: ArcInterval) -> bool {
        if self.is_empty() || other.is_empty() || self.lo == self.hi {
            return false;
        }
        if self.is_inverted() {
            return other.is_inverted() || other.lo < self.hi || other.hi > self.lo;
        }
        if other.is_inverted() {
            return other.lo < self.hi || other.hi > self.lo;
        }
        (other.lo < self.hi && other.hi > self.lo) || self.is_full()
    }

    /// Smallest arc containing both arcs. When the arcs are disjoint the
    /// shorter of the two possible gaps is filled.
    pub fn union(self, other: ArcInterval) -> ArcInterval {
        if other.is_empty() {
            return self;
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                // Either other ⊂ self, or together they wrap the whole circle.
                if self.contains_interval(other) {
                    return self;
                }
                return Self::full();
            }
            return Self { lo: self.lo, hi: other.hi };
        }
        if self.fast_contains(other.hi) {
            return Self { lo: other.lo, hi: self.hi };
        }
        // Neither endpoint of other is in self: self ⊂ other, or they are disjoint.
        if self.is_empty() || other.fast_contains(self.lo) {
            return other;
        }
        if positive_distance(other.hi, self.lo) < positive_distance(self.hi, other.lo) {
            return Self { lo: other.lo, hi: self.hi };
        }
        Self { lo: self.lo, hi: other.hi }
    }

    /// Smallest arc containing the intersection of both arcs. When the arcs
    /// overlap in two disjoint pieces the shorter of the two inputs is returned.
    pub fn intersection(self, other: ArcInterval) -> ArcInterval {
        if other.is_empty() {
            return Self::empty();
        }
        if self.fast_contains(other.lo) {
            if self.fast_contains(other.hi) {
                if other.length() < self.length() {
                    return other;
                }
                return self;
            }
            return Self { lo: other.lo, hi: self.hi };
        }
        if self.fast_contains(other.hi) {
            return Self { lo: self.lo, hi: other.hi };
        }
        if other.fast_contains(self.lo) {
            return self;
        }
        Self::empty()
    }

    /// Smallest arc containing this one and the angle `p`. Angles outside
    /// [-π, π] are ignored.
    pub fn add_point(self, p: f64) -> ArcInterval {
        if p.abs() > PI {
            return self;
        }
        let p = if p == -PI { PI } else { p };
        if self.fast_contains(p) {
            return self;
        }
        if self.is_empty() {
            return Self { lo: p, hi: p };
        }
        if positive_distance(p, self.lo) < positive_distance(self.hi, p) {
            return Self { lo: p, hi: self.hi };
        }
        Self { lo: self.lo, hi: p }
    }

    /// Arc grown by `margin` at both ends, wrapping around ±π. The result is
    /// full once the grown length reaches 2π. A negative margin shrinks the
    /// arc, possibly to empty. The empty arc never grows.
    pub fn expanded(self, margin: f64) -> ArcInterval {
        if margin >= 0.0 {
            if self.is_empty() {
                return self;
            }
            // Allow for a rounding error in each endpoint.
            if self.length() + 2.0 * margin + 2.0 * f64::EPSILON >= 2.0 * PI {
                return Self::full();
            }
        } else {
            if self.is_full() {
                return self;
            }
            if self.length() + 2.0 * margin - 2.0 * f64::EPSILON <= 0.0 {
                return Self::empty();
            }
        }
        let mut result = Self::new(
            remainder(self.lo - margin, 2.0 * PI),
            remainder(self.hi + margin, 2.0 * PI),
        );
        if result.lo <= -PI {
            result.lo = PI;
        }
        result
    }

    /// Returns true if `other` can be obtained from this arc by moving each
    /// endpoint by at most [`Self::APPROX_EPSILON`], without the arc
    /// collapsing to empty or becoming full in between.
    pub fn approx_equal(self, other: ArcInterval) -> bool {
        let eps = Self::APPROX_EPSILON;
        if self.is_empty() {
            return other.length() <= 2.0 * eps;
        }
        if other.is_empty() {
            return self.length() <= 2.0 * eps;
        }
        if self.is_full() {
            return other.length() >= 2.0 * (PI - eps);
        }
        if other.is_full() {
            return self.length() >= 2.0 * (PI - eps);
        }
        remainder(other.lo - self.lo, 2.0 * PI).abs() <= eps
            && remainder(other.hi - self.hi, 2.0 * PI).abs() <= eps
            && (self.length() - other.length()).abs() <= 2.0 * eps
    }
}

impl Default for ArcInterval {
    fn default() -> Self {
        ArcInterval::empty()
    }
}

impl fmt::Display for ArcInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.lo, self.hi)
    }
}

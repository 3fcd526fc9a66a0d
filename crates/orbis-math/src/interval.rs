use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed interval `[lo, hi]` on the real line.
///
/// Any interval with `lo > hi` is empty; [`Interval::empty`] returns the
/// canonical `(1, 0)` sentinel. All empty intervals compare equal.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    /// Tolerance used by [`Interval::approx_equal`].
    pub const APPROX_EPSILON: f64 = 1e-15;

    /// Create an interval with the given bounds. No ordering is enforced;
    /// `lo > hi` produces an empty interval.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The canonical empty interval.
    pub const fn empty() -> Self {
        Self { lo: 1.0, hi: 0.0 }
    }

    /// The interval containing exactly `p`.
    pub const fn from_point(p: f64) -> Self {
        Self { lo: p, hi: p }
    }

    /// Smallest interval containing both `a` and `b`.
    pub fn from_point_pair(a: f64, b: f64) -> Self {
        if a <= b { Self::new(a, b) } else { Self::new(b, a) }
    }

    /// Returns true if the interval contains no points.
    pub fn is_empty(self) -> bool {
        self.lo > self.hi
    }

    /// Midpoint of the interval. Meaningless for empty intervals.
    pub fn center(self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Length `hi - lo`; negative for empty intervals.
    pub fn length(self) -> f64 {
        self.hi - self.lo
    }

    /// `lo` for `i == 0`, `hi` otherwise.
    pub fn bound(self, i: usize) -> f64 {
        if i == 0 { self.lo } else { self.hi }
    }

    /// Returns true if `p` lies in the closed interval.
    pub fn contains(self, p: f64) -> bool {
        self.lo <= p && p <= self.hi
    }

    /// Returns true if `p` lies strictly inside the interval.
    pub fn interior_contains(self, p: f64) -> bool {
        self.lo < p && p < self.hi
    }

    /// Returns true if `other` is a subset of this interval.
    /// The empty interval is contained by everything.
    pub fn contains_interval(self, other: Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Returns true if `other` is a subset of this interval's interior.
    pub fn interior_contains_interval(self, other: Interval) -> bool {
        if other.is_empty() {
            return true;
        }
        self.lo < other.lo && other.hi < self.hi
    }

    /// Returns true if the two closed intervals share at least one point.
    pub fn intersects(self, other: Interval) -> bool {
        if self.lo <= other.lo {
            other.lo <= self.hi && other.lo <= other.hi
        } else {
            self.lo <= other.hi && self.lo <= self.hi
        }
    }

    /// Returns true if the interiors of the two intervals overlap.
    pub fn interior_intersects(self, other: Interval) -> bool {
        other.lo < self.hi && self.lo < other.hi && self.lo < self.hi && other.lo <= other.hi
    }

    /// Largest interval contained in both.
    pub fn intersection(self, other: Interval) -> Interval {
        Interval::new(self.lo.max(other.lo), self.hi.min(other.hi))
    }

    /// Smallest interval containing both.
    pub fn union(self, other: Interval) -> Interval {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        Interval::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }

    /// Smallest interval containing this one and `p`.
    pub fn add_point(self, p: f64) -> Interval {
        if self.is_empty() {
            Interval::from_point(p)
        } else if p < self.lo {
            Interval::new(p, self.hi)
        } else if p > self.hi {
            Interval::new(self.lo, p)
        } else {
            self
        }
    }

    /// The point of the interval closest to `p`. The interval must be non-empty.
    pub fn clamp_point(self, p: f64) -> f64 {
        self.lo.max(self.hi.min(p))
    }

    /// Interval grown by `margin` on both sides. A negative margin shrinks
    /// it, collapsing to [`Interval::empty`] once the bounds cross. An empty
    /// interval stays empty.
    pub fn expanded(self, margin: f64) -> Interval {
        if self.is_empty() {
            return self;
        }
        let result = Interval::new(self.lo - margin, self.hi + margin);
        if result.is_empty() {
            Interval::empty()
        } else {
            result
        }
    }

    /// Returns true if `other` can be obtained from this interval by moving
    /// each bound by at most [`Self::APPROX_EPSILON`]. Empty intervals are
    /// approximately equal to any interval of length up to twice the tolerance.
    pub fn approx_equal(self, other: Interval) -> bool {
        if self.is_empty() {
            return other.length() <= 2.0 * Self::APPROX_EPSILON;
        }
        if other.is_empty() {
            return self.length() <= 2.0 * Self::APPROX_EPSILON;
        }
        (other.lo - self.lo).abs() <= Self::APPROX_EPSILON
            && (other.hi - self.hi).abs() <= Self::APPROX_EPSILON
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::empty()
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Interval) -> bool {
        (self.lo == other.lo && self.hi == other.hi) || (self.is_empty() && other.is_empty())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.7}, {:.7}]", self.lo, self.hi)
    }
}

//! Scalar helpers shared by the angle and interval types.

/// IEEE 754 remainder of `x / y`: `x - n·y` where `n` is `x / y` rounded to
/// the nearest integer, ties to even.
///
/// Unlike `%`, the result lies in `[-|y|/2, |y|/2]`, which is what
/// wrapping a longitude into (-π, π] needs.
pub fn remainder(x: f64, y: f64) -> f64 {
    let n = (x / y).round_ties_even();
    (-n).mul_add(y, x)
}

//! Approximate floating-point comparisons
//!
//! Eigenvalues, row sums and propagated masses are all products of
//! floating-point arithmetic, so equality checks go through these helpers
//! rather than `==`.

use crate::io::configuration::{ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE};
use num_traits::Float;

/// Check whether `a` is within `atol + rtol * |b|` of `b`
///
/// Mirrors the asymmetric definition commonly used by numerical libraries:
/// `b` is the reference value.
pub fn is_close<T: Float>(a: T, b: T, rtol: T, atol: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() <= rtol.mul_add(b.abs(), atol)
}

/// [`is_close`] with the crate's default tolerances
pub fn approx_eq(a: f64, b: f64) -> bool {
    is_close(a, b, RELATIVE_TOLERANCE, ABSOLUTE_TOLERANCE)
}

/// Check whether a sequence of values sums to one within `tolerance`
pub fn sums_to_one<'a, T, I>(values: I, tolerance: T) -> bool
where
    T: Float + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let total = values.into_iter().fold(T::zero(), |acc, &v| acc + v);
    (total - T::one()).abs() <= tolerance
}

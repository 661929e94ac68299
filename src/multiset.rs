//! Order-insensitive comparison of vectors.

use crate::primitives::Vector;
use crate::traits::Scalar;

/// Returns true if `x` and `y` hold the same values with the same multiplicities.
///
/// Both inputs are sorted ascending and compared position by position, so
/// order is ignored but duplicates count. Vectors of different length are
/// never equal. NaN is not equal to anything, including another NaN.
///
/// # Examples
///
/// ```
/// use arrkit::multiset::are_multisets_equal;
/// use arrkit::primitives::Vector;
///
/// let a = Vector::from_slice(&[1, 2, 2, 4]);
/// let b = Vector::from_slice(&[4, 2, 1, 2]);
/// let c = Vector::from_slice(&[4, 2, 1, 1]);
/// assert!(are_multisets_equal(&a, &b));
/// assert!(!are_multisets_equal(&a, &c));
/// ```
#[must_use]
pub fn are_multisets_equal<T: Scalar>(x: &Vector<T>, y: &Vector<T>) -> bool {
    if x.len() != y.len() {
        return false;
    }
    x.sorted()
        .iter()
        .zip(y.sorted().iter())
        .all(|(a, b)| a == b)
}

//! Searches keyed on zero positions.

use std::cmp::Ordering;

use log::debug;

use crate::error::{ArrayError, Result};
use crate::primitives::Vector;
use crate::traits::Scalar;

/// Collects every element that directly follows a zero, in order of appearance.
///
/// A trailing zero contributes nothing.
///
/// # Examples
///
/// ```
/// use arrkit::search::candidates_after_zero;
/// use arrkit::primitives::Vector;
///
/// let x = Vector::from_slice(&[6, 2, 0, 3, 0, 0, 5, 7, 0]);
/// assert_eq!(candidates_after_zero(&x).as_slice(), &[3, 0, 5]);
/// ```
#[must_use]
pub fn candidates_after_zero<T: Scalar>(x: &Vector<T>) -> Vector<T> {
    x.as_slice()
        .windows(2)
        .filter(|w| w[0].is_zero())
        .map(|w| w[1])
        .collect()
}

/// Returns the largest element that directly follows a zero.
///
/// A NaN candidate wins over every other value.
///
/// # Errors
///
/// Returns [`ArrayError::EmptyResult`] when no element follows a zero: the
/// vector is empty, holds no zero, or its only zero is the last element.
///
/// # Examples
///
/// ```
/// use arrkit::search::max_after_zero;
/// use arrkit::primitives::Vector;
///
/// let x = Vector::from_slice(&[6, 2, 0, 3, 0, 0, 5, 7, 0]);
/// assert_eq!(max_after_zero(&x).expect("zeros are followed by values"), 5);
/// ```
pub fn max_after_zero<T: Scalar>(x: &Vector<T>) -> Result<T> {
    let best = candidates_after_zero(x).iter().copied().reduce(nan_max);
    best.ok_or_else(|| {
        debug!("max_after_zero: no candidates in vector of len {}", x.len());
        ArrayError::empty_result("no element follows a zero")
    })
}

fn nan_max<T: Scalar>(best: T, candidate: T) -> T {
    match best.partial_cmp(&candidate) {
        Some(Ordering::Less) => candidate,
        Some(_) => best,
        // at least one side is NaN; keep whichever it is
        None if best.partial_cmp(&best).is_none() => best,
        None => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let x = Vector::from_slice(&[6, 2, 0, 3, 0, 0, 5, 7, 0]);
        assert_eq!(max_after_zero(&x), Ok(5));
    }

    #[test]
    fn test_negative_candidates() {
        let x = Vector::from_slice(&[0, -4, 1, 0, -2]);
        assert_eq!(max_after_zero(&x), Ok(-2));
    }

    #[test]
    fn test_zero_after_zero_counts() {
        let x = Vector::from_slice(&[0, 0, -1]);
        assert_eq!(max_after_zero(&x), Ok(0));
    }

    #[test]
    fn test_no_zero_is_empty_result() {
        let x = Vector::from_slice(&[1, 2, 3]);
        assert!(matches!(
            max_after_zero(&x),
            Err(ArrayError::EmptyResult { .. })
        ));
    }

    #[test]
    fn test_trailing_zero_only_is_empty_result() {
        let x = Vector::from_slice(&[4.0_f64, 1.0, 0.0]);
        assert!(matches!(
            max_after_zero(&x),
            Err(ArrayError::EmptyResult { .. })
        ));
    }

    #[test]
    fn test_empty_vector_is_empty_result() {
        let x = Vector::<i32>::from_vec(Vec::new());
        assert!(max_after_zero(&x).is_err());
        assert!(candidates_after_zero(&x).is_empty());
    }

    #[test]
    fn test_nan_candidate_propagates() {
        let x = Vector::from_slice(&[0.0_f64, 1.0, 0.0, f64::NAN, 0.0, 2.0]);
        assert!(max_after_zero(&x).expect("has candidates").is_nan());
    }

    #[test]
    fn test_candidates_order() {
        let x = Vector::from_slice(&[0_u8, 9, 0, 1, 0]);
        assert_eq!(candidates_after_zero(&x).as_slice(), &[9, 1]);
    }
}

//! Pairwise Euclidean distances between two point sets.
//!
//! Rows are points. Distances use the expansion
//! `‖x − y‖² = ‖x‖² − 2·x·y + ‖y‖²`, which needs only one pass over each
//! point set for the norms plus the cross dot products. Cancellation can push
//! the expansion slightly below zero, so it is clamped at zero before the
//! square root.

use log::{debug, trace};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::{ArrayError, Result};
use crate::primitives::Matrix;

/// Pairwise Euclidean distance computation.
///
/// # Examples
///
/// ```
/// use arrkit::distance::PairwiseEuclidean;
/// use arrkit::primitives::Matrix;
///
/// let x = Matrix::from_vec(1, 2, vec![0.0, 0.0]).expect("1x2");
/// let y = Matrix::from_vec(1, 2, vec![3.0, 4.0]).expect("1x2");
///
/// let d = PairwiseEuclidean::new().compute(&x, &y).expect("same feature count");
/// assert_eq!(d.get(0, 0), 5.0);
///
/// let d2 = PairwiseEuclidean::new().with_squared(true).compute(&x, &y).expect("same feature count");
/// assert_eq!(d2.get(0, 0), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairwiseEuclidean {
    /// Return squared distances and skip the square root.
    squared: bool,
}

impl PairwiseEuclidean {
    /// Creates a metric returning plain (not squared) distances.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to return squared distances.
    #[must_use]
    pub fn with_squared(mut self, squared: bool) -> Self {
        self.squared = squared;
        self
    }

    /// Returns true if squared distances are returned.
    #[must_use]
    pub fn squared(&self) -> bool {
        self.squared
    }

    /// Computes the `n x m` distance matrix between the rows of `x` (`n x d`)
    /// and the rows of `y` (`m x d`).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ShapeMismatch`] if `x` and `y` have different
    /// numbers of columns.
    pub fn compute<T: Float>(&self, x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
        let (n, d) = x.shape();
        let (m, d_y) = y.shape();
        if d != d_y {
            debug!("pairwise distance: x is {n}x{d}, y is {m}x{d_y}");
            return Err(ArrayError::shape_mismatch("n_features", d, d_y));
        }
        trace!("pairwise distance: {n}x{m} over {d} features");

        let x_sq: Vec<T> = (0..n).map(|i| dot(x.row_slice(i), x.row_slice(i))).collect();
        let y_sq: Vec<T> = (0..m).map(|j| dot(y.row_slice(j), y.row_slice(j))).collect();
        let two = T::one() + T::one();

        let mut data = Vec::with_capacity(n * m);
        for (i, &xi_sq) in x_sq.iter().enumerate() {
            let xi = x.row_slice(i);
            for (j, &yj_sq) in y_sq.iter().enumerate() {
                let cross = dot(xi, y.row_slice(j));
                let raw = xi_sq - two * cross + yj_sq;
                let sq = if raw < T::zero() { T::zero() } else { raw };
                data.push(if self.squared { sq } else { sq.sqrt() });
            }
        }

        Ok(Matrix::from_parts(n, m, data))
    }
}

/// Computes the Euclidean distance between every row of `x` and every row of `y`.
///
/// Shorthand for `PairwiseEuclidean::new().compute(x, y)`.
///
/// # Errors
///
/// Returns [`ArrayError::ShapeMismatch`] if the feature dimensions differ.
///
/// # Examples
///
/// ```
/// use arrkit::distance::pairwise_distance;
/// use arrkit::primitives::Matrix;
///
/// let x = Matrix::from_vec(2, 2, vec![0.0_f64, 0.0, 1.0, 1.0]).expect("2x2");
/// let y = Matrix::from_vec(1, 2, vec![3.0, 4.0]).expect("1x2");
/// let d = pairwise_distance(&x, &y).expect("same feature count");
/// assert_eq!(d.shape(), (2, 1));
/// assert!((d.get(0, 0) - 5.0).abs() < 1e-12);
/// ```
pub fn pairwise_distance<T: Float>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    PairwiseEuclidean::new().compute(x, y)
}

fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&p, &q)| acc + p * q)
}

#[cfg(test)]
#[path = "distance_tests.rs"]
mod tests;

//! Run-length encoding of vectors.
//!
//! A run is a maximal block of consecutive equal values. Run boundaries are
//! found by comparing each element with its predecessor; the first element
//! always opens a run, so no reserved marker value is needed.
//!
//! Equality is `PartialEq`, so for floats `0.0` and `-0.0` share a run (the
//! run keeps the sign of its first element) and every NaN is a run of its own.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{ArrayError, Result};
use crate::primitives::Vector;
use crate::traits::Scalar;

/// Run values paired with their lengths.
///
/// `values` and `counts` always have the same length and every count is at
/// least one when produced by [`run_length_encode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunLengthEncoding<T> {
    values: Vector<T>,
    counts: Vector<usize>,
}

impl<T: Copy> RunLengthEncoding<T> {
    /// Builds an encoding from separately stored values and counts.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ShapeMismatch`] if the two sequences differ in length.
    pub fn from_parts(values: Vector<T>, counts: Vector<usize>) -> Result<Self> {
        if values.len() != counts.len() {
            debug!(
                "rle: {} values paired with {} counts",
                values.len(),
                counts.len()
            );
            return Err(ArrayError::shape_mismatch(
                "run counts",
                values.len(),
                counts.len(),
            ));
        }
        Ok(Self { values, counts })
    }

    /// Value of each run, in order of appearance.
    #[must_use]
    pub fn values(&self) -> &Vector<T> {
        &self.values
    }

    /// Length of each run.
    #[must_use]
    pub fn counts(&self) -> &Vector<usize> {
        &self.counts
    }

    /// Returns the number of runs.
    #[must_use]
    pub fn n_runs(&self) -> usize {
        self.values.len()
    }

    /// Length of the decoded vector.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over `(value, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.values.iter().copied().zip(self.counts.iter().copied())
    }

    /// Expands the runs back into the original vector.
    #[must_use]
    pub fn decode(&self) -> Vector<T> {
        let mut out = Vec::with_capacity(self.total_len());
        for (value, count) in self.iter() {
            out.extend(std::iter::repeat(value).take(count));
        }
        Vector::from_vec(out)
    }

    /// Splits the encoding into `(values, counts)`.
    #[must_use]
    pub fn into_parts(self) -> (Vector<T>, Vector<usize>) {
        (self.values, self.counts)
    }
}

/// Encodes `x` as runs of equal consecutive values.
///
/// # Examples
///
/// ```
/// use arrkit::rle::run_length_encode;
/// use arrkit::primitives::Vector;
///
/// let enc = run_length_encode(&Vector::from_slice(&[1, 1, 2, 2, 2, 3]));
/// assert_eq!(enc.values().as_slice(), &[1, 2, 3]);
/// assert_eq!(enc.counts().as_slice(), &[2, 3, 1]);
/// ```
#[must_use]
pub fn run_length_encode<T: Scalar>(x: &Vector<T>) -> RunLengthEncoding<T> {
    trace!("run-length encoding {} elements", x.len());
    let data = x.as_slice();
    let mut values = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for (i, &value) in data.iter().enumerate() {
        let starts_run = i == 0 || value != data[i - 1];
        if starts_run {
            values.push(value);
            counts.push(1);
        } else if let Some(count) = counts.last_mut() {
            *count += 1;
        }
    }

    RunLengthEncoding {
        values: Vector::from_vec(values),
        counts: Vector::from_vec(counts),
    }
}

/// Reconstructs the vector described by `enc`.
#[must_use]
pub fn run_length_decode<T: Copy>(enc: &RunLengthEncoding<T>) -> Vector<T> {
    enc.decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_basic() {
        let enc = run_length_encode(&Vector::from_slice(&[2, 2, 2, 3, 3, 3, 5]));
        assert_eq!(enc.values().as_slice(), &[2, 3, 5]);
        assert_eq!(enc.counts().as_slice(), &[3, 3, 1]);
        assert_eq!(enc.n_runs(), 3);
        assert_eq!(enc.total_len(), 7);
    }

    #[test]
    fn test_encode_empty() {
        let enc = run_length_encode(&Vector::<i32>::from_vec(Vec::new()));
        assert!(enc.values().is_empty());
        assert!(enc.counts().is_empty());
        assert!(enc.decode().is_empty());
    }

    #[test]
    fn test_encode_single() {
        let enc = run_length_encode(&Vector::from_slice(&[5]));
        assert_eq!(enc.values().as_slice(), &[5]);
        assert_eq!(enc.counts().as_slice(), &[1]);
    }

    #[test]
    fn test_first_value_is_any_value() {
        // -100 must be encoded like every other value
        let x = Vector::from_slice(&[-100, -100, 4, -100]);
        let enc = run_length_encode(&x);
        assert_eq!(enc.values().as_slice(), &[-100, 4, -100]);
        assert_eq!(enc.counts().as_slice(), &[2, 1, 1]);
        assert_eq!(enc.decode(), x);
    }

    #[test]
    fn test_non_adjacent_repeats_are_separate_runs() {
        let enc = run_length_encode(&Vector::from_slice(&[1.5_f64, 2.0, 1.5]));
        assert_eq!(enc.n_runs(), 3);
    }

    #[test]
    fn test_signed_zeros_share_a_run() {
        let enc = run_length_encode(&Vector::from_slice(&[-0.0_f64, 0.0, 1.0]));
        assert_eq!(enc.counts().as_slice(), &[2, 1]);
        assert!(enc.values()[0].is_sign_negative());
    }

    #[test]
    fn test_each_nan_is_own_run() {
        let enc = run_length_encode(&Vector::from_slice(&[f32::NAN, f32::NAN, 2.0]));
        assert_eq!(enc.counts().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn test_decode_roundtrip() {
        let x = Vector::from_slice(&[0_u8, 0, 1, 1, 1, 0, 7, 7]);
        assert_eq!(run_length_decode(&run_length_encode(&x)), x);
    }

    #[test]
    fn test_from_parts() {
        let enc = RunLengthEncoding::from_parts(
            Vector::from_slice(&['a', 'b']),
            Vector::from_slice(&[1, 2]),
        )
        .expect("equal lengths");
        assert_eq!(enc.decode().as_slice(), &['a', 'b', 'b']);
        let (values, counts) = enc.into_parts();
        assert_eq!(values.len(), counts.len());
    }

    #[test]
    fn test_from_parts_mismatch() {
        let err = RunLengthEncoding::from_parts(Vector::from_slice(&[1, 2]), Vector::from_slice(&[1]))
            .unwrap_err();
        assert!(matches!(err, ArrayError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_iter_pairs() {
        let enc = run_length_encode(&Vector::from_slice(&[9, 9, 8]));
        let pairs: Vec<(i32, usize)> = enc.iter().collect();
        assert_eq!(pairs, vec![(9, 2), (8, 1)]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let enc = run_length_encode(&Vector::from_slice(&[1, 1, 2]));
        let json = serde_json::to_string(&enc).expect("encoding serializes");
        let back: RunLengthEncoding<i32> = serde_json::from_str(&json).expect("encoding deserializes");
        assert_eq!(back, enc);
    }
}

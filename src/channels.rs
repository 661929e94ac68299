//! Per-pixel weighted combination of image channels.

use log::{debug, trace};

use crate::error::{ArrayError, Result};
use crate::primitives::{Image, Matrix, Vector};
use crate::traits::Scalar;

/// ITU-R BT.601 luma weights for (R, G, B).
pub const LUMA_BT601: [f64; 3] = [0.299, 0.587, 0.114];

/// Collapses the three channels of every pixel into one weighted sum.
///
/// `out[h][w] = img[h][w][0] * coefs[0] + img[h][w][1] * coefs[1] + img[h][w][2] * coefs[2]`
///
/// # Errors
///
/// Returns [`ArrayError::ShapeMismatch`] if `coefs` does not hold exactly
/// three weights.
///
/// # Examples
///
/// ```
/// use arrkit::channels::weighted_channel_sum;
/// use arrkit::primitives::{Image, Vector};
///
/// let img = Image::from_vec(1, 2, vec![1, 2, 3, 4, 5, 6]).expect("1x2x3");
/// let out = weighted_channel_sum(&img, &Vector::from_slice(&[1, 0, 2])).expect("3 weights");
/// assert_eq!(out.as_slice(), &[7, 16]);
/// ```
///
/// # Panics
///
/// Sums are accumulated in `T`, so integer overflow panics in debug builds
/// and wraps in release builds, like primitive arithmetic. Use
/// [`weighted_channel_sum_as`] to accumulate in a wider type.
pub fn weighted_channel_sum<T: Scalar>(img: &Image<T>, coefs: &Vector<T>) -> Result<Matrix<T>> {
    weighted_channel_sum_as(img, coefs)
}

/// Weighted channel sum with pixels widened to the coefficient type `A`.
///
/// A `u8` image combined with `u32` or `f64` weights cannot overflow the
/// way a `u8` accumulator would.
///
/// # Errors
///
/// Returns [`ArrayError::ShapeMismatch`] if `coefs` does not hold exactly
/// three weights.
///
/// # Examples
///
/// ```
/// use arrkit::channels::weighted_channel_sum_as;
/// use arrkit::primitives::{Image, Vector};
///
/// let img = Image::from_vec(1, 1, vec![200_u8, 200, 200]).expect("1x1x3");
/// let out = weighted_channel_sum_as(&img, &Vector::from_slice(&[1_u32, 1, 1])).expect("3 weights");
/// assert_eq!(out.as_slice(), &[600]);
/// ```
pub fn weighted_channel_sum_as<A, T>(img: &Image<T>, coefs: &Vector<A>) -> Result<Matrix<A>>
where
    T: Scalar,
    A: Scalar + From<T>,
{
    let weights: [A; 3] = coefs.as_slice().try_into().map_err(|_| {
        debug!(
            "weighted_channel_sum: got {} coefficients for a 3-channel image",
            coefs.len()
        );
        ArrayError::shape_mismatch("coefficients", Image::<T>::CHANNELS, coefs.len())
    })?;
    Ok(combine(img, weights))
}

/// Converts an RGB image to grayscale with [`LUMA_BT601`] weights.
#[must_use]
pub fn to_luma<T>(img: &Image<T>) -> Matrix<f64>
where
    T: Scalar,
    f64: From<T>,
{
    combine(img, LUMA_BT601)
}

fn combine<A, T>(img: &Image<T>, weights: [A; 3]) -> Matrix<A>
where
    T: Scalar,
    A: Scalar + From<T>,
{
    let (height, width, _) = img.shape();
    trace!("weighting {height}x{width} image channels");
    let data = img
        .pixels()
        .map(|px| {
            px.iter()
                .zip(weights.iter())
                .fold(A::zero(), |acc, (&v, &w)| acc + A::from(v) * w)
        })
        .collect();
    Matrix::from_parts(height, width, data)
}

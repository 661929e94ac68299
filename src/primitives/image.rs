//! Three-channel image type.

use crate::error::{ArrayError, Result};
use serde::{Deserialize, Serialize};

/// A `height x width x 3` array stored pixel-major (channels interleaved).
///
/// # Examples
///
/// ```
/// use arrkit::primitives::Image;
///
/// let img = Image::from_vec(1, 2, vec![1, 2, 3, 4, 5, 6]).expect("1*2*3 = 6 values");
/// assert_eq!(img.shape(), (1, 2, 3));
/// assert_eq!(img.pixel(0, 1), [4, 5, 6]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image<T> {
    data: Vec<T>,
    height: usize,
    width: usize,
}

impl<T: Copy> Image<T> {
    /// Number of channels per pixel.
    pub const CHANNELS: usize = 3;

    /// Creates an image from interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::ShapeMismatch`] if `data.len() != height * width * 3`.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self> {
        let expected = height * width * Self::CHANNELS;
        if data.len() != expected {
            return Err(ArrayError::shape_mismatch(
                &format!("{height}x{width}x{} elements", Self::CHANNELS),
                expected,
                data.len(),
            ));
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Returns the shape as (height, width, channels).
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, Self::CHANNELS)
    }

    /// Returns the number of pixel rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of pixel columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the channel values of the pixel at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> [T; 3] {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds ({}x{})",
            self.height,
            self.width
        );
        let start = (row * self.width + col) * Self::CHANNELS;
        [self.data[start], self.data[start + 1], self.data[start + 2]]
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.data.chunks_exact(Self::CHANNELS)
    }

    /// Returns the underlying interleaved data.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

//! Core array primitives (Vector, Matrix, Image).
//!
//! Every operation in the crate consumes these by reference and returns
//! freshly allocated results.

mod image;
mod matrix;
mod vector;

pub use image::Image;
pub use matrix::Matrix;
pub use vector::Vector;

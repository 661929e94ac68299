//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use arrkit::prelude::*;
//! ```

pub use crate::channels::{to_luma, weighted_channel_sum, weighted_channel_sum_as, LUMA_BT601};
pub use crate::diagonal::{diagonal_nonzero_product, diagonal_nonzero_product_as};
pub use crate::distance::{pairwise_distance, PairwiseEuclidean};
pub use crate::error::{ArrayError, Result};
pub use crate::multiset::are_multisets_equal;
pub use crate::primitives::{Image, Matrix, Vector};
pub use crate::rle::{run_length_decode, run_length_encode, RunLengthEncoding};
pub use crate::search::{candidates_after_zero, max_after_zero};
pub use crate::traits::Scalar;

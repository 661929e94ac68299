//! arrkit: small numeric-array utilities in pure Rust.
//!
//! Each operation is a pure function over the crate's [`primitives`]: it
//! borrows its inputs, allocates a fresh result and never touches shared
//! state, so every function is safe to call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use arrkit::prelude::*;
//!
//! let m = Matrix::from_vec(2, 2, vec![1, 0, 0, 5]).unwrap();
//! assert_eq!(diagonal_nonzero_product(&m), 5);
//!
//! let enc = run_length_encode(&Vector::from_slice(&[1, 1, 2, 2, 2, 3]));
//! assert_eq!(enc.counts().as_slice(), &[2, 3, 1]);
//!
//! let x = Matrix::from_vec(1, 2, vec![0.0, 0.0]).unwrap();
//! let y = Matrix::from_vec(1, 2, vec![3.0, 4.0]).unwrap();
//! assert_eq!(pairwise_distance(&x, &y).unwrap().get(0, 0), 5.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector, Matrix and Image types
//! - [`diagonal`]: Product of nonzero diagonal entries
//! - [`multiset`]: Order-insensitive vector equality
//! - [`search`]: Maximum element following a zero
//! - [`channels`]: Weighted per-pixel channel sums (grayscale conversion)
//! - [`rle`]: Run-length encoding and decoding
//! - [`distance`]: Pairwise Euclidean distance matrices
//! - [`error`]: Error type shared by all fallible operations
//!
//! The crate logs through the [`log`] facade: `debug` when an input is
//! rejected, `trace` on entry to the larger computations.

pub mod channels;
pub mod diagonal;
pub mod distance;
pub mod error;
pub mod multiset;
pub mod prelude;
pub mod primitives;
pub mod rle;
pub mod search;
pub mod traits;

//! Element bounds shared by every array operation.

use std::fmt::Debug;

use num_traits::Num;

/// Numeric element usable in [`Matrix`](crate::primitives::Matrix),
/// [`Vector`](crate::primitives::Vector) and [`Image`](crate::primitives::Image)
/// operations.
///
/// Implemented for every primitive integer and float type.
pub trait Scalar: Num + Copy + PartialOrd + Debug {}

impl<T> Scalar for T where T: Num + Copy + PartialOrd + Debug {}

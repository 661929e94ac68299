//! Products over a matrix's main diagonal.

use crate::primitives::Matrix;
use crate::traits::Scalar;

/// Multiplies the nonzero entries of the main diagonal.
///
/// The diagonal has `min(rows, cols)` entries. Zeros are skipped, so an
/// empty or all-zero diagonal yields the multiplicative identity.
///
/// # Examples
///
/// ```
/// use arrkit::diagonal::diagonal_nonzero_product;
/// use arrkit::primitives::Matrix;
///
/// let m = Matrix::from_vec(3, 3, vec![1, 0, 1, 2, 0, 2, 3, 0, 3]).expect("3x3");
/// assert_eq!(diagonal_nonzero_product(&m), 3);
/// ```
///
/// # Panics
///
/// The product is accumulated in `T`, so an integer product that overflows
/// `T` panics in debug builds and wraps in release builds, like primitive
/// arithmetic. Use [`diagonal_nonzero_product_as`] to accumulate in a
/// wider type.
#[must_use]
pub fn diagonal_nonzero_product<T: Scalar>(m: &Matrix<T>) -> T {
    diagonal_nonzero_product_as(m)
}

/// Multiplies the nonzero diagonal entries, widening each to `A` first.
///
/// # Examples
///
/// ```
/// use arrkit::diagonal::diagonal_nonzero_product_as;
/// use arrkit::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 2, vec![100_000_i32, 0, 0, 100_000]).expect("2x2");
/// assert_eq!(diagonal_nonzero_product_as::<i64, _>(&m), 10_000_000_000);
/// ```
#[must_use]
pub fn diagonal_nonzero_product_as<A, T>(m: &Matrix<T>) -> A
where
    T: Scalar,
    A: Scalar + From<T>,
{
    m.diagonal()
        .iter()
        .filter(|x| !x.is_zero())
        .fold(A::one(), |acc, &x| acc * A::from(x))
}

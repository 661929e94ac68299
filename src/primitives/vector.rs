//! Vector type for 1D numeric data.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Index;

/// A 1D ordered sequence of values.
///
/// # Examples
///
/// ```
/// use arrkit::primitives::Vector;
///
/// let v = Vector::from_slice(&[3, 1, 2]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.sorted().as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Creates a vector that takes ownership of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `idx`, or `None` past the end.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.data.get(idx).copied()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the vector and returns its storage.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy + PartialOrd> Vector<T> {
    /// Returns an ascending copy.
    ///
    /// Values not comparable with themselves (float NaN) sort after every
    /// other value.
    #[must_use]
    pub fn sorted(&self) -> Self {
        let mut data = self.data.clone();
        data.sort_by(nan_last_cmp);
        Self { data }
    }
}

/// Total order over `PartialOrd` values: comparable values keep their order,
/// self-incomparable values (NaN) go last and tie with each other.
fn nan_last_cmp<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b)
        .unwrap_or_else(|| is_incomparable(a).cmp(&is_incomparable(b)))
}

fn is_incomparable<T: PartialOrd>(x: &T) -> bool {
    x.partial_cmp(x).is_none()
}

impl<T: Copy + num_traits::Zero> Vector<T> {
    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![T::zero(); len],
        }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_vector_contract.rs"]
mod tests_vector_contract;

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::{Index, Mul};

use crate::{Failure, Outcome};

/// Tag attached to the failure returned by [`Array::from_shape_vec`] when the shape and the
/// element count disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Element count the shape requires, or `None` if the product overflows `usize`
    pub expected: Option<usize>,
    /// Element count that was supplied
    pub actual: usize,
}

/// A dense, row-major array whose rank is chosen at runtime.
///
/// Rank 0 holds exactly one element (a scalar), rank 1 is a vector, rank 2 a matrix and so on.
/// The shape lists the extent of each dimension, outermost first.
///
/// # Examples
///
/// ```rust
/// use verdict::Array;
///
/// let matrix = Array::from_shape_vec([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap_value();
/// assert_eq!(matrix.rank(), 2);
/// assert_eq!(matrix[[1, 0]], 4);
///
/// let scaled = Array::from_vec(vec![1.0, 2.0, 3.0]) * 12.0;
/// assert_eq!(scaled.as_slice(), &[12.0, 24.0, 36.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T> Array<T> {
    /// Creates a rank-0 array holding a single element.
    pub fn scalar(value: T) -> Self {
        Self {
            shape: Vec::new(),
            data: vec![value],
        }
    }

    /// Creates a rank-1 array from a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Creates an array of the given shape from row-major data.
    ///
    /// Fails with a [`ShapeMismatch`] tag when the shape does not describe exactly
    /// `data.len()` elements.
    #[track_caller]
    pub fn from_shape_vec(shape: impl Into<Vec<usize>>, data: Vec<T>) -> Outcome<Self> {
        let shape = shape.into();
        let expected = shape.iter().try_fold(1_usize, |acc, &extent| acc.checked_mul(extent));

        if expected != Some(data.len()) {
            let message = match expected {
                Some(expected) => format!("shape {shape:?} describes {expected} elements but {} were supplied", data.len()),
                None => format!("shape {shape:?} describes more elements than fit in memory"),
            };
            return Outcome::from_failure(Failure::new(message).with_tag(ShapeMismatch {
                expected,
                actual: data.len(),
            }));
        }

        Outcome::from_value(Self { shape, data })
    }

    /// Returns the extent of each dimension, outermost first.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if some dimension has extent zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the array and returns the elements in row-major order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns an iterator over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the element at `index`, or `None` if the index has the wrong rank or is out of bounds.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).and_then(|offset| self.data.get(offset))
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Array<U> {
        Array {
            shape: self.shape,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }

        index.iter().zip(&self.shape).try_fold(0_usize, |offset, (&i, &extent)| {
            (i < extent).then(|| offset * extent + i)
        })
    }
}

impl<T, const N: usize> Index<[usize; N]> for Array<T> {
    type Output = T;

    #[track_caller]
    #[expect(clippy::panic, reason = "out-of-bounds indexing panics, like slices do")]
    fn index(&self, index: [usize; N]) -> &T {
        match self.get(&index) {
            Some(value) => value,
            None => panic!("index {index:?} is out of bounds for shape {:?}", self.shape),
        }
    }
}

impl<T> Mul<T> for Array<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|value| value * rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Array<$t>> for $t {
                type Output = Array<$t>;

                fn mul(self, rhs: Array<$t>) -> Array<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(i32, i64, f32, f64);

impl<T> From<Vec<T>> for Array<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_rank_zero() {
        let array = Array::scalar(true);
        assert_eq!(array.rank(), 0);
        assert_eq!(array.len(), 1);
        assert_eq!(array.get(&[]), Some(&true));
        assert!(array[[]]);
    }

    #[test]
    fn row_major_layout() {
        let array = Array::from_shape_vec([2, 3, 2], (0..12).collect::<Vec<_>>()).unwrap_value();
        assert_eq!(array.shape(), &[2, 3, 2]);
        assert_eq!(array[[0, 0, 1]], 1);
        assert_eq!(array[[0, 2, 0]], 4);
        assert_eq!(array[[1, 0, 0]], 6);
        assert_eq!(array[[1, 2, 1]], 11);
    }

    #[test]
    fn get_rejects_bad_index() {
        let array = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap_value();
        assert!(array.get(&[2, 0]).is_none());
        assert!(array.get(&[0]).is_none());
        assert!(array.get(&[0, 0, 0]).is_none());
    }

    #[test]
    #[should_panic(expected = "index [0, 5] is out of bounds for shape [2, 2]")]
    fn index_out_of_bounds_panics() {
        let array = Array::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap_value();
        let _ = array[[0, 5]];
    }

    #[test]
    fn shape_mismatch_is_tagged() {
        let failure = Array::from_shape_vec([2, 2], vec![1, 2, 3]).unwrap_failure();
        assert_eq!(
            failure.tag::<ShapeMismatch>(),
            Some(&ShapeMismatch {
                expected: Some(4),
                actual: 3
            })
        );
        assert_eq!(failure.to_string(), "shape [2, 2] describes 4 elements but 3 were supplied");
    }

    #[test]
    fn shape_overflow_is_tagged() {
        let failure = Array::from_shape_vec([usize::MAX, 2], vec![0_u8]).unwrap_failure();
        assert_eq!(failure.tag::<ShapeMismatch>().unwrap().expected, None);
    }

    #[test]
    fn empty_dimension() {
        let array = Array::<u8>::from_shape_vec([3, 0], Vec::new()).unwrap_value();
        assert!(array.is_empty());
        assert!(array.get(&[0, 0]).is_none());
    }

    #[test]
    fn scalar_multiplication_both_sides() {
        let array = Array::from_vec(vec![1.0_f64, 2.0, 3.0]);
        assert_eq!((array.clone() * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((2.0_f64 * array).as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn map_keeps_shape() {
        let array = Array::from_shape_vec([1, 2], vec![1, 2]).unwrap_value();
        let strings = array.map(|v| v.to_string());
        assert_eq!(strings.shape(), &[1, 2]);
        assert_eq!(strings.into_vec(), ["1", "2"]);
    }

    #[test]
    fn conversions() {
        let array: Array<i32> = (1..=3).collect();
        assert_eq!(array, Array::from(vec![1, 2, 3]));
        assert_eq!((&array).into_iter().sum::<i32>(), 6);
        assert_eq!(array.into_iter().count(), 3);
    }
}

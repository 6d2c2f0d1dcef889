//! The dense multidimensional array container.

use std::fmt;

use crate::error::MdArrayError;
use crate::index::{self, IndexIter};
use crate::nested::{self, NestedArray};
use crate::shape;

/// A dense multidimensional array.
///
/// Owns a flat, row-major storage buffer and the shape describing it;
/// after every mutating operation the storage length equals the shape's
/// element count (the sole exception is [`MdArray::empty`]). Structural
/// operations (indexing, reshaping, slicing, transposition) work for
/// any `T: Clone`; arithmetic lives in [`operations`](crate::operations),
/// [`contract`](crate::contract) and [`linalg`](crate::linalg) and
/// requires [`Numeric`](crate::Numeric) elements.
///
/// # Example
///
/// ```
/// use mdarrays::MdArray;
///
/// let mut a = MdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// assert_eq!(a.rank(), 2);
/// assert_eq!(*a.element(&[0, 1]).unwrap(), 2);
///
/// a.set_element(9, &[1, 2]).unwrap();
/// assert_eq!(*a.element(&[1, 2]).unwrap(), 9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MdArray<T> {
    storage: Vec<T>,
    shape: Vec<usize>,
}

impl<T> MdArray<T> {
    /// An array with no shape and no storage.
    ///
    /// This is the one state where the storage length differs from the
    /// shape's element count; it is what shape-incompatible operations
    /// (notably [`contract`](crate::contract::contract)) return.
    pub fn empty() -> Self {
        Self {
            storage: Vec::new(),
            shape: Vec::new(),
        }
    }

    /// The shape: one size per axis.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// `true` iff the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// The flat storage, row-major.
    #[inline]
    pub fn storage(&self) -> &[T] {
        &self.storage
    }

    /// The flat storage, mutable.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Consume the array and return its storage buffer.
    pub fn into_storage(self) -> Vec<T> {
        self.storage
    }

    /// `true` iff the rank is 1.
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.rank() == 1
    }

    /// `true` iff the rank is 2.
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.rank() == 2
    }

    /// `true` iff the rank is greater than 2.
    #[inline]
    pub fn is_higher_order(&self) -> bool {
        self.rank() > 2
    }

    /// `true` if every axis of the simplified shape has the same size.
    ///
    /// A single simplified axis counts as square only when its size is at
    /// most 1, so `[2, 2, 2, 1]` is square and `[5]` is not.
    pub fn is_square(&self) -> bool {
        let s = shape::simplify(&self.shape);
        match s.as_slice() {
            [] => false,
            [d] => *d <= 1,
            [first, rest @ ..] => rest.iter().all(|d| d == first),
        }
    }

    /// `true` iff `index` has one component per axis, each strictly below
    /// its axis size.
    pub fn validate(&self, index: &[usize]) -> bool {
        index.len() == self.rank()
            && index.iter().zip(self.shape.iter()).all(|(&c, &d)| c < d)
    }

    /// Get an element by logical index.
    ///
    /// Returns `None` if the index has the wrong length or any component
    /// is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if !self.validate(index) {
            return None;
        }
        self.storage.get(index::storage_index(index, &self.shape))
    }

    /// Get a mutable element by logical index.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        if !self.validate(index) {
            return None;
        }
        let offset = index::storage_index(index, &self.shape);
        self.storage.get_mut(offset)
    }

    /// Element accessor with an error describing the failure.
    pub fn element(&self, index: &[usize]) -> Result<&T, MdArrayError> {
        self.check_index(index)?;
        Ok(&self.storage[index::storage_index(index, &self.shape)])
    }

    /// Overwrite the element at `index`.
    pub fn set_element(&mut self, value: T, index: &[usize]) -> Result<(), MdArrayError> {
        self.check_index(index)?;
        let offset = index::storage_index(index, &self.shape);
        self.storage[offset] = value;
        Ok(())
    }

    fn check_index(&self, index: &[usize]) -> Result<(), MdArrayError> {
        if index.len() != self.rank() {
            return Err(MdArrayError::WrongNumberOfIndices {
                expected: self.rank(),
                actual: index.len(),
            });
        }
        for (&c, &dim) in index.iter().zip(self.shape.iter()) {
            if c >= dim {
                return Err(MdArrayError::IndexOutOfBounds {
                    index: c,
                    dim_size: dim,
                });
            }
        }
        Ok(())
    }

    /// Replace the shape with its simplified form in place; see
    /// [`shape::simplify`]. The element count is unchanged.
    pub fn simplify(&mut self) {
        self.shape = shape::simplify(&self.shape);
    }

    /// Iterate every valid index in canonical traversal order.
    pub fn indices(&self) -> IndexIter {
        IndexIter::new(&self.shape)
    }

    /// Iterate elements in canonical traversal order.
    ///
    /// For rank ≤ 2 this coincides with storage order; for higher ranks
    /// the traversal nests two axes at a time.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.indices()
            .map(move |i| &self.storage[index::storage_index(&i, &self.shape)])
    }
}

impl<T: Clone> MdArray<T> {
    /// Build an array from a storage buffer and a shape.
    ///
    /// The buffer may be longer than the shape requires; the excess is
    /// dropped. A buffer with fewer elements than the shape addresses is
    /// an error.
    ///
    /// # Example
    ///
    /// ```
    /// use mdarrays::MdArray;
    ///
    /// let a = MdArray::from_vec(vec![1, 2, 3, 4, 5, 6, 7], &[2, 3]).unwrap();
    /// assert_eq!(a.len(), 6);
    ///
    /// assert!(MdArray::from_vec(vec![1, 2, 3], &[2, 3]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, MdArrayError> {
        let expected = shape::size(shape);
        if data.len() < expected {
            return Err(MdArrayError::InsufficientStorage {
                expected,
                actual: data.len(),
            });
        }
        let mut storage = data;
        storage.truncate(expected);
        Ok(Self {
            storage,
            shape: shape.to_vec(),
        })
    }

    /// Array of `shape` with every element set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Self {
        Self {
            storage: vec![value; shape::size(shape)],
            shape: shape.to_vec(),
        }
    }

    /// Reshape in place.
    ///
    /// Shrinking truncates the tail of storage; growing appends copies of
    /// `fill`. Growing without a fill value fails with
    /// [`GrowthWithoutFill`](MdArrayError::GrowthWithoutFill) and leaves
    /// the array untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use mdarrays::MdArray;
    ///
    /// let mut a = MdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// a.reshape(&[2, 2], None).unwrap();
    /// assert_eq!(a.storage(), &[1, 2, 3, 4]);
    ///
    /// a.reshape(&[2, 3], Some(0)).unwrap();
    /// assert_eq!(a.storage(), &[1, 2, 3, 4, 0, 0]);
    ///
    /// assert!(a.reshape(&[4, 4], None).is_err());
    /// assert_eq!(a.shape(), &[2, 3]);
    /// ```
    pub fn reshape(&mut self, shape: &[usize], fill: Option<T>) -> Result<(), MdArrayError> {
        let target = shape::size(shape);

        if target < self.storage.len() {
            self.storage.truncate(target);
        } else if target > self.storage.len() {
            match fill {
                Some(v) => self.storage.resize(target, v),
                None => {
                    return Err(MdArrayError::GrowthWithoutFill {
                        from: self.storage.len(),
                        to: target,
                    });
                }
            }
        }

        self.shape = shape.to_vec();
        Ok(())
    }

    /// The storage as a plain vector, when the array is rank 1.
    pub fn vector(&self) -> Option<Vec<T>> {
        if !self.is_vector() {
            return None;
        }
        Some(self.storage.clone())
    }

    /// Row-major nested rows, when the array is rank 2.
    pub fn matrix(&self) -> Option<Vec<Vec<T>>> {
        if !self.is_matrix() {
            return None;
        }
        let rows = self.shape[0];
        let cols = self.shape[1];
        let mut m = Vec::with_capacity(rows);
        for i in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for j in 0..cols {
                row.push(self.storage[index::storage_index(&[i, j], &self.shape)].clone());
            }
            m.push(row);
        }
        Some(m)
    }

    /// Nested-tree form, when the rank is greater than 2; see
    /// [`NestedArray`].
    pub fn nested(&self) -> Option<NestedArray<T>> {
        nested::nested(self)
    }

    /// Transpose axes `dx` and `dy`, returning a new array; see
    /// [`operations::transpose`](crate::operations::transpose).
    pub fn transpose(&self, dx: usize, dy: usize) -> Result<Self, MdArrayError> {
        crate::operations::transpose(self, dx, dy)
    }

    /// Extract the inclusive region `lower..=upper`; see
    /// [`operations::sub_array`](crate::operations::sub_array).
    pub fn sub_array(&self, lower: &[usize], upper: &[usize]) -> Result<Self, MdArrayError> {
        crate::operations::sub_array(self, lower, upper)
    }

    /// Overwrite the inclusive region `lower..=upper`; see
    /// [`operations::set_sub_array`](crate::operations::set_sub_array).
    pub fn set_sub_array(
        &mut self,
        replacement: &Self,
        lower: &[usize],
        upper: &[usize],
    ) -> Result<(), MdArrayError> {
        crate::operations::set_sub_array(self, replacement, lower, upper)
    }
}

impl<T: Clone + fmt::Debug> fmt::Display for MdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, body) = if self.rank() == 0 {
            ("empty", format!("{:?}", self.storage))
        } else if self.is_vector() {
            ("vector", format!("{:?}", self.storage))
        } else if self.is_matrix() {
            let m = self.matrix().unwrap_or_default();
            ("matrix", format!("{m:?}"))
        } else {
            let body = match self.nested() {
                Some(n) => format!("{n:?}"),
                None => String::new(),
            };
            ("multi", body)
        };
        write!(f, "MdArray {:?} ({kind}): {body}", self.shape)
    }
}

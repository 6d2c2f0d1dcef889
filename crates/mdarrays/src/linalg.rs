//! Determinants, symmetry tests, and identity/null constructors.

use crate::array::MdArray;
use crate::error::MdArrayError;
use crate::index::{self, index_for_storage, IndexIter};
use crate::operations::sub_array;
use crate::scalar::Numeric;

/// Array of `shape` with every element the additive identity.
pub fn null<T: Numeric>(shape: &[usize]) -> MdArray<T> {
    MdArray::filled(shape, T::zero())
}

/// Identity array over the axis pair `(dx, dy)`.
///
/// Every element is the additive identity except where the `dx` and `dy`
/// index components coincide, which holds the multiplicative identity.
/// Returns `None` when either axis is out of range or the shape is not
/// square.
///
/// # Example
///
/// ```
/// use mdarrays::linalg::identity;
///
/// let id = identity::<f64>(&[2, 2], 0, 1).unwrap();
/// assert_eq!(id.storage(), &[1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn identity<T: Numeric>(shape: &[usize], dx: usize, dy: usize) -> Option<MdArray<T>> {
    if dx >= shape.len() || dy >= shape.len() {
        return None;
    }

    let mut id = null::<T>(shape);
    if !id.is_square() {
        return None;
    }

    for i in IndexIter::new(shape) {
        if i[dx] == i[dy] {
            let offset = index::storage_index(&i, shape);
            id.storage_mut()[offset] = T::one();
        }
    }

    Some(id)
}

/// Determinant of a rank-2 square array.
///
/// A 2×2 matrix uses the direct `ad - bc` formula. Larger matrices use
/// the wrapped diagonal-product scheme: the sum of the N forward
/// diagonals minus the sum of the N reverse diagonals, with the row
/// index wrapping modulo N. That scheme is Sarrus' rule, exact for
/// N = 3; for N > 3 it is kept as-is and is not the true determinant.
///
/// Returns `None` for anything but a square rank-2 array with dimension
/// at least 2.
///
/// # Example
///
/// ```
/// use mdarrays::linalg::determinant2d;
/// use mdarrays::MdArray;
///
/// let a = MdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// assert_eq!(determinant2d(&a), Some(-2.0));
/// ```
pub fn determinant2d<T: Numeric>(a: &MdArray<T>) -> Option<T> {
    if !(a.is_square() && a.is_matrix()) {
        return None;
    }

    let dim = a.shape()[0];
    let at = |i: usize, j: usize| a.storage()[index::storage_index(&[i, j], a.shape())];

    if dim == 2 {
        return Some(at(0, 0) * at(1, 1) - at(0, 1) * at(1, 0));
    }

    if dim > 2 {
        let mut forward = T::zero();
        for i in 0..dim {
            let mut product = T::one();
            for j in 0..dim {
                product = product * at((i + j) % dim, j);
            }
            forward = forward + product;
        }

        let mut reverse = T::zero();
        for i in 0..dim {
            let mut product = T::one();
            for j in 0..dim {
                let row = if i >= j { i - j } else { i + dim - j };
                product = product * at(row, j);
            }
            reverse = reverse + product;
        }

        return Some(forward - reverse);
    }

    None
}

/// Determinant of a rank ≥ 2 array.
///
/// Rank 2 yields a one-element array holding the scalar determinant. For
/// higher rank, axes 0 and 1 are the matrix axes and every trailing axis
/// is a batch coordinate: each 2-D sub-matrix is cut out through the
/// slice engine, reduced with [`determinant2d`], and the results are
/// assembled into an array shaped like the trailing axes.
///
/// Returns `None` when no determinant exists (rank < 2, or non-square
/// matrix axes).
pub fn determinant<T: Numeric>(a: &MdArray<T>) -> Option<MdArray<T>> {
    if a.rank() < 2 {
        return None;
    }

    if a.rank() == 2 {
        let det = determinant2d(a)?;
        return MdArray::from_vec(vec![det], &[1]).ok();
    }

    let batch_shape = a.shape()[2..].to_vec();
    let mut det = MdArray::filled(&batch_shape, T::zero());

    let rows = a.shape()[0];
    let cols = a.shape()[1];

    // Walk the batch coordinates with the matrix axes pinned at zero.
    let mut current = vec![0usize; a.rank()];
    let end: Vec<usize> = a
        .shape()
        .iter()
        .enumerate()
        .map(|(i, &d)| if i < 2 { 0 } else { d.saturating_sub(1) })
        .collect();

    loop {
        let mut upper = vec![rows - 1, cols - 1];
        upper.extend_from_slice(&current[2..]);

        let sub = sub_array(a, &current, &upper).ok()?;
        let sub_det = determinant2d(&sub)?;
        let offset = index::storage_index(&current[2..], &batch_shape);
        det.storage_mut()[offset] = sub_det;

        if current == end {
            break;
        }
        // Odometer over the trailing axes, first batch axis fastest.
        for i in 2..current.len() {
            if current[i] < end[i] {
                current[i] += 1;
                break;
            }
            current[i] = 0;
        }
    }

    Some(det)
}

/// Whether the array is symmetric over the axis pair `(dx, dy)`: every
/// element equals the element at its dx/dy-swapped index.
///
/// Swapped indices that fall outside the shape are skipped, so an
/// asymmetric shape is only partially checked.
pub fn symmetric<T: Numeric>(a: &MdArray<T>, dx: usize, dy: usize) -> Result<bool, MdArrayError> {
    check_axes(a, dx, dy)?;

    for offset in 0..a.len() {
        let mut index = index_for_storage(offset, a.shape());
        index.swap(dx, dy);

        if a.validate(&index) {
            let mirrored = a.storage()[index::storage_index(&index, a.shape())];
            if a.storage()[offset] != mirrored {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

/// Whether the array is antisymmetric over the axis pair `(dx, dy)`:
/// every element equals the negation of the element at its dx/dy-swapped
/// index.
///
/// Out-of-bounds swapped indices are skipped, as in [`symmetric`].
pub fn antisymmetric<T: Numeric>(
    a: &MdArray<T>,
    dx: usize,
    dy: usize,
) -> Result<bool, MdArrayError> {
    check_axes(a, dx, dy)?;

    for offset in 0..a.len() {
        let mut index = index_for_storage(offset, a.shape());
        index.swap(dx, dy);

        if a.validate(&index) {
            let mirrored = a.storage()[index::storage_index(&index, a.shape())];
            if a.storage()[offset] != -mirrored {
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn check_axes<T>(a: &MdArray<T>, dx: usize, dy: usize) -> Result<(), MdArrayError> {
    let rank = a.rank();
    for axis in [dx, dy] {
        if axis >= rank {
            return Err(MdArrayError::InvalidDimension { axis, rank });
        }
    }
    Ok(())
}

impl<T: Numeric> MdArray<T> {
    /// See [`determinant`].
    pub fn determinant(&self) -> Option<MdArray<T>> {
        determinant(self)
    }

    /// See [`symmetric`].
    pub fn symmetric(&self, dx: usize, dy: usize) -> Result<bool, MdArrayError> {
        symmetric(self, dx, dy)
    }

    /// See [`antisymmetric`].
    pub fn antisymmetric(&self, dx: usize, dy: usize) -> Result<bool, MdArrayError> {
        antisymmetric(self, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        let z = null::<i32>(&[2, 3]);
        assert_eq!(z.storage(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_identity_2x2() {
        let id = identity::<f64>(&[2, 2], 0, 1).unwrap();
        assert_eq!(id.storage(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_identity_rejects_non_square() {
        assert!(identity::<f64>(&[2, 3], 0, 1).is_none());
        assert!(identity::<f64>(&[2, 2], 0, 2).is_none());
    }

    #[test]
    fn test_identity_higher_rank() {
        let id = identity::<i32>(&[2, 2, 2], 0, 1).unwrap();
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let expected = if i == j { 1 } else { 0 };
                    assert_eq!(*id.element(&[i, j, k]).unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_determinant_2x2() {
        let a = MdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(determinant2d(&a), Some(-2.0));
    }

    #[test]
    fn test_determinant_3x3_sarrus() {
        let a = MdArray::from_vec(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0],
            &[3, 3],
        )
        .unwrap();
        assert_eq!(determinant2d(&a), Some(-3.0));
    }

    #[test]
    fn test_determinant2d_rejects() {
        // Not square.
        let a = MdArray::filled(&[2, 3], 1.0);
        assert_eq!(determinant2d(&a), None);
        // Not a matrix.
        let v = MdArray::filled(&[4], 1.0);
        assert_eq!(determinant2d(&v), None);
        // 1x1 has no determinant here.
        let s = MdArray::filled(&[1, 1], 1.0);
        assert_eq!(determinant2d(&s), None);
    }

    #[test]
    fn test_determinant_rank2_wraps_scalar() {
        let a = MdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let det = determinant(&a).unwrap();
        assert_eq!(det.shape(), &[1]);
        assert_eq!(det.storage(), &[-2.0]);
    }

    #[test]
    fn test_determinant_batched() {
        // Stack of three 2x2 matrices along axis 2.
        let mut a = MdArray::filled(&[2, 2, 3], 0.0);
        let mats = [
            [[1.0, 2.0], [3.0, 4.0]],   // det -2
            [[2.0, 0.0], [0.0, 2.0]],   // det 4
            [[0.0, 1.0], [-1.0, 0.0]],  // det 1
        ];
        for (k, m) in mats.iter().enumerate() {
            for i in 0..2 {
                for j in 0..2 {
                    a.set_element(m[i][j], &[i, j, k]).unwrap();
                }
            }
        }

        let det = determinant(&a).unwrap();
        assert_eq!(det.shape(), &[3]);
        assert_eq!(det.storage(), &[-2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_determinant_rejects_low_rank() {
        let v = MdArray::filled(&[3], 1.0);
        assert!(determinant(&v).is_none());
    }

    #[test]
    fn test_determinant_batched_non_square() {
        let a = MdArray::filled(&[2, 3, 2], 1.0);
        assert!(determinant(&a).is_none());
    }

    #[test]
    fn test_symmetric_2x2() {
        let s = MdArray::from_vec(vec![1.0, 2.0, 2.0, 1.0], &[2, 2]).unwrap();
        assert!(s.symmetric(0, 1).unwrap());
        assert!(!s.antisymmetric(0, 1).unwrap());
    }

    #[test]
    fn test_antisymmetric_2x2() {
        let a = MdArray::from_vec(vec![0.0, 2.0, -2.0, 0.0], &[2, 2]).unwrap();
        assert!(!a.symmetric(0, 1).unwrap());
        assert!(a.antisymmetric(0, 1).unwrap());
    }

    #[test]
    fn test_nonzero_diagonal_is_not_antisymmetric() {
        // Diagonal elements compare against themselves, so a nonzero
        // diagonal fails the negation check even with mirrored
        // off-diagonal entries.
        let a = MdArray::from_vec(vec![1.0, 2.0, -2.0, 1.0], &[2, 2]).unwrap();
        assert!(!a.symmetric(0, 1).unwrap());
        assert!(!a.antisymmetric(0, 1).unwrap());
    }

    #[test]
    fn test_symmetric_invalid_axis() {
        let a = MdArray::filled(&[2, 2], 0.0);
        assert!(matches!(
            a.symmetric(0, 2),
            Err(MdArrayError::InvalidDimension { axis: 2, rank: 2 })
        ));
    }

    #[test]
    fn test_symmetric_rank3_over_matrix_axes() {
        // Symmetric in (0, 1) for every slab along axis 2.
        let mut a = MdArray::filled(&[2, 2, 2], 0.0);
        for k in 0..2 {
            a.set_element(1.0, &[0, 0, k]).unwrap();
            a.set_element(5.0, &[0, 1, k]).unwrap();
            a.set_element(5.0, &[1, 0, k]).unwrap();
            a.set_element(2.0, &[1, 1, k]).unwrap();
        }
        assert!(a.symmetric(0, 1).unwrap());
    }
}

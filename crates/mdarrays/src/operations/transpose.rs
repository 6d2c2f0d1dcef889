//! Axis-pair transposition.

use crate::array::MdArray;
use crate::error::MdArrayError;
use crate::index::index_for_storage;

/// Transpose axes `dx` and `dy`, returning a new array.
///
/// The result's shape swaps positions `dx` and `dy`, and its element at
/// any index equals the receiver's element at that index with the `dx`
/// and `dy` components exchanged. One full pass over storage; the
/// traditional matrix transposition is `transpose(a, 0, 1)`.
///
/// # Example
///
/// ```
/// use mdarrays::operations::transpose;
/// use mdarrays::MdArray;
///
/// let a = MdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
/// let t = transpose(&a, 0, 1).unwrap();
/// assert_eq!(t.shape(), &[3, 2]);
/// assert_eq!(*t.element(&[2, 0]).unwrap(), 3);
/// ```
pub fn transpose<T: Clone>(
    array: &MdArray<T>,
    dx: usize,
    dy: usize,
) -> Result<MdArray<T>, MdArrayError> {
    let rank = array.rank();
    for axis in [dx, dy] {
        if axis >= rank {
            return Err(MdArrayError::InvalidDimension { axis, rank });
        }
    }

    let mut new_shape = array.shape().to_vec();
    new_shape.swap(dx, dy);

    // Seed the output with the source storage; every slot is rewritten.
    let mut out = MdArray::from_vec(array.storage().to_vec(), &new_shape)?;

    for offset in 0..array.len() {
        let mut index = index_for_storage(offset, array.shape());
        index.swap(dx, dy);
        out.set_element(array.storage()[offset].clone(), &index)?;
    }

    Ok(out)
}

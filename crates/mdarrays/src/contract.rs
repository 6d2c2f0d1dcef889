//! Generalized multiplication: contraction of one axis pair.
//!
//! `contract(a, da, b, db)` sums products along one shared axis (axis
//! `db` of A paired with axis `da` of B) while every other axis position
//! is held fixed. The rank-2 call `contract(a, 0, b, 1)` is the ordinary
//! matrix product; the same loop serves every rank.

use crate::array::MdArray;
use crate::index::{self, index_for_storage};
use crate::scalar::Numeric;

/// Check whether `a` and `b` can be contracted over the axis pair
/// `(da, db)`.
///
/// Requires equal rank, `a.shape()[da] == b.shape()[db]`, and agreement
/// of every axis position other than `da` and `db` between the operands.
pub fn contract_compatible<T>(a: &MdArray<T>, da: usize, b: &MdArray<T>, db: usize) -> bool {
    if a.rank() != b.rank() || da >= a.rank() || db >= b.rank() {
        return false;
    }
    if a.shape()[da] != b.shape()[db] {
        return false;
    }
    (0..a.rank()).all(|i| i == da || i == db || a.shape()[i] == b.shape()[i])
}

/// Contract `a` against `b` over the axis pair `(da, db)`.
///
/// The result takes `a`'s shape with the `da`/`db` sizes exchanged, and
/// for every output index
/// `C[idx] = Σ_j A[idx, axis db := j] · B[idx, axis da := j]`
/// over `j` in `0..a.shape()[db]`: axis `db` of A is summed against axis
/// `da` of B. Incompatible operands yield [`MdArray::empty`] rather than
/// an error.
///
/// # Example
///
/// ```
/// use mdarrays::contract::contract;
/// use mdarrays::MdArray;
///
/// // Ordinary matrix product: sum A's columns against B's rows.
/// let a = MdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// let b = MdArray::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], &[3, 2]).unwrap();
/// let c = contract(&a, 0, &b, 1);
/// assert_eq!(c.shape(), &[2, 2]);
/// assert_eq!(c.storage(), &[58.0, 64.0, 139.0, 154.0]);
/// ```
pub fn contract<T: Numeric>(a: &MdArray<T>, da: usize, b: &MdArray<T>, db: usize) -> MdArray<T> {
    if !contract_compatible(a, da, b, db) {
        return MdArray::empty();
    }

    let mut c_shape = a.shape().to_vec();
    c_shape[da] = b.shape()[db];
    c_shape[db] = a.shape()[da];

    let mut c = MdArray::filled(&c_shape, T::zero());
    let terms = a.shape()[db];

    for offset in 0..c.len() {
        let out_index = index_for_storage(offset, &c_shape);

        let mut sum = T::zero();
        for j in 0..terms {
            let mut a_index = out_index.clone();
            a_index[db] = j;
            let mut b_index = out_index.clone();
            b_index[da] = j;

            let a_val = a.storage()[index::storage_index(&a_index, a.shape())];
            let b_val = b.storage()[index::storage_index(&b_index, b.shape())];
            sum = sum + a_val * b_val;
        }

        c.storage_mut()[offset] = sum;
    }

    c
}

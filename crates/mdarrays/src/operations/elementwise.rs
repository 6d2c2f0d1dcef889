//! Shape-aware elementwise layer over the vector backend.
//!
//! Each function validates shapes, hands flat buffers to
//! [`GenericBackend`](crate::backend::GenericBackend), and re-wraps the
//! returned buffer with the receiver's shape. The backend never sees
//! shape information.
//!
//! Elementwise multiplication and division are `emul` and `ediv`;
//! the `*` operator between arrays is the axis contraction, see
//! [`contract`](crate::contract).

use crate::array::MdArray;
use crate::backend::{GenericBackend, VectorBackend};
use crate::error::MdArrayError;
use crate::scalar::Numeric;

/// Elementwise sum of two same-shaped arrays.
///
/// # Example
///
/// ```
/// use mdarrays::operations::add;
/// use mdarrays::MdArray;
///
/// let a = MdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
/// let b = MdArray::from_vec(vec![4, 5, 6], &[3]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().storage(), &[5, 7, 9]);
/// ```
pub fn add<T: Numeric>(a: &MdArray<T>, b: &MdArray<T>) -> Result<MdArray<T>, MdArrayError> {
    check_same_shape(a, b)?;
    Ok(MdArray::from_vec(GenericBackend::add(a.storage(), b.storage()), a.shape())
        .expect("add: shape unchanged"))
}

/// Elementwise difference of two same-shaped arrays.
pub fn sub<T: Numeric>(a: &MdArray<T>, b: &MdArray<T>) -> Result<MdArray<T>, MdArrayError> {
    check_same_shape(a, b)?;
    Ok(MdArray::from_vec(GenericBackend::sub(a.storage(), b.storage()), a.shape())
        .expect("sub: shape unchanged"))
}

/// Elementwise product of two same-shaped arrays.
pub fn emul<T: Numeric>(a: &MdArray<T>, b: &MdArray<T>) -> Result<MdArray<T>, MdArrayError> {
    check_same_shape(a, b)?;
    Ok(MdArray::from_vec(GenericBackend::mul(a.storage(), b.storage()), a.shape())
        .expect("emul: shape unchanged"))
}

/// Elementwise quotient of two same-shaped arrays.
pub fn ediv<T: Numeric>(a: &MdArray<T>, b: &MdArray<T>) -> Result<MdArray<T>, MdArrayError> {
    check_same_shape(a, b)?;
    Ok(MdArray::from_vec(GenericBackend::div(a.storage(), b.storage()), a.shape())
        .expect("ediv: shape unchanged"))
}

/// Additive inverse of every element, as a new array.
pub fn neg<T: Numeric>(a: &MdArray<T>) -> MdArray<T> {
    MdArray::from_vec(GenericBackend::neg(a.storage()), a.shape())
        .expect("neg: shape unchanged")
}

/// Multiply every element by `s`, as a new array.
pub fn scale<T: Numeric>(a: &MdArray<T>, s: T) -> MdArray<T> {
    MdArray::from_vec(GenericBackend::scale(a.storage(), s), a.shape())
        .expect("scale: shape unchanged")
}

/// Divide every element by `s`, as a new array.
pub fn sdiv<T: Numeric>(a: &MdArray<T>, s: T) -> MdArray<T> {
    MdArray::from_vec(GenericBackend::sdiv(a.storage(), s), a.shape())
        .expect("sdiv: shape unchanged")
}

/// Divide `s` by every element, as a new array.
pub fn svdiv<T: Numeric>(s: T, a: &MdArray<T>) -> MdArray<T> {
    MdArray::from_vec(GenericBackend::svdiv(s, a.storage()), a.shape())
        .expect("svdiv: shape unchanged")
}

/// Set every element of `a` to `value`.
pub fn fill<T: Numeric>(a: &mut MdArray<T>, value: T) {
    GenericBackend::fill(a.storage_mut(), value);
}

/// Set every element of `a` to the additive identity.
pub fn zero<T: Numeric>(a: &mut MdArray<T>) {
    fill(a, T::zero());
}

/// Sum of all elements.
pub fn sum<T: Numeric>(a: &MdArray<T>) -> T {
    GenericBackend::sum(a.storage())
}

fn check_same_shape<T>(a: &MdArray<T>, b: &MdArray<T>) -> Result<(), MdArrayError> {
    if a.shape() != b.shape() {
        return Err(MdArrayError::ShapeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

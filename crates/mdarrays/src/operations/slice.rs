//! Hyper-rectangular sub-array extraction and overwrite.
//!
//! A region is an inclusive lower/upper index pair of the receiver's
//! rank. The source region and a zero-based destination are walked in
//! lock-step with two independent odometers over the pair-swapped
//! representations; two counters are required because the shapes differ
//! whenever an axis collapses.

use crate::array::MdArray;
use crate::error::MdArrayError;
use crate::index::{swap_pairs, Index};
use crate::shape;

/// Extract the inclusive region `lower..=upper` as a new array.
///
/// Axes where the bounds coincide collapse out of the result's shape but
/// still contribute one step to the walk, so slicing a single matrix out
/// of a stack yields a rank-2 array.
///
/// # Example
///
/// ```
/// use mdarrays::operations::sub_array;
/// use mdarrays::MdArray;
///
/// let a = MdArray::from_vec((1..=12).collect(), &[3, 4]).unwrap();
/// let s = sub_array(&a, &[0, 1], &[1, 2]).unwrap();
/// assert_eq!(s.shape(), &[2, 2]);
/// assert_eq!(s.storage(), &[2, 3, 6, 7]);
/// ```
pub fn sub_array<T: Clone>(
    array: &MdArray<T>,
    lower: &[usize],
    upper: &[usize],
) -> Result<MdArray<T>, MdArrayError> {
    check_bounds(array, lower, upper)?;

    let (sub_shape, new_shape) = region_shapes(lower, upper);

    // Full-rank working array; the collapsed shape is applied at the end.
    let take = shape::size(&sub_shape).min(array.len());
    let mut out = MdArray::from_vec(array.storage()[..take].to_vec(), &sub_shape)?;

    let s_lower = swap_pairs(lower);
    let s_upper = swap_pairs(upper);
    let s_sub = swap_pairs(&sub_shape);

    let mut current = s_lower.clone();
    let mut dest = Index::from_elem(0, sub_shape.len());

    loop {
        let value = array.element(&swap_pairs(&current))?.clone();
        out.set_element(value, &swap_pairs(&dest))?;

        if current == s_upper {
            break;
        }

        advance(&mut current, &s_lower, &s_upper);
        advance_zero_based(&mut dest, &s_sub);
    }

    MdArray::from_vec(out.into_storage(), &new_shape)
}

/// Overwrite the inclusive region `lower..=upper` with `replacement`.
///
/// The replacement's own shape is ignored: its storage is reinterpreted
/// under the region's shape and must hold at least as many elements as
/// the region addresses.
///
/// # Example
///
/// ```
/// use mdarrays::operations::set_sub_array;
/// use mdarrays::MdArray;
///
/// let mut a = MdArray::filled(&[3, 3], 0);
/// let patch = MdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
/// set_sub_array(&mut a, &patch, &[1, 1], &[2, 2]).unwrap();
/// assert_eq!(a.storage(), &[0, 0, 0, 0, 1, 2, 0, 3, 4]);
/// ```
pub fn set_sub_array<T: Clone>(
    array: &mut MdArray<T>,
    replacement: &MdArray<T>,
    lower: &[usize],
    upper: &[usize],
) -> Result<(), MdArrayError> {
    check_bounds(array, lower, upper)?;

    let (sub_shape, _) = region_shapes(lower, upper);
    let source = MdArray::from_vec(replacement.storage().to_vec(), &sub_shape)?;

    let s_lower = swap_pairs(lower);
    let s_upper = swap_pairs(upper);
    let s_sub = swap_pairs(&sub_shape);

    let mut current = s_lower.clone();
    let mut src = Index::from_elem(0, sub_shape.len());

    loop {
        let value = source.element(&swap_pairs(&src))?.clone();
        array.set_element(value, &swap_pairs(&current))?;

        if current == s_upper {
            break;
        }

        advance(&mut current, &s_lower, &s_upper);
        advance_zero_based(&mut src, &s_sub);
    }

    Ok(())
}

/// The full-rank region shape and the collapsed result shape.
fn region_shapes(lower: &[usize], upper: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut sub_shape = Vec::with_capacity(lower.len());
    let mut new_shape = Vec::new();

    for (&lo, &hi) in lower.iter().zip(upper.iter()) {
        let diff = hi - lo;
        sub_shape.push(diff + 1);
        if diff > 0 {
            new_shape.push(diff + 1);
        }
    }

    (sub_shape, new_shape)
}

fn check_bounds<T>(
    array: &MdArray<T>,
    lower: &[usize],
    upper: &[usize],
) -> Result<(), MdArrayError> {
    let rank = array.rank();
    for bound in [lower, upper] {
        if bound.len() != rank {
            return Err(MdArrayError::WrongNumberOfIndices {
                expected: rank,
                actual: bound.len(),
            });
        }
    }
    for (axis, ((&lo, &hi), &dim)) in lower
        .iter()
        .zip(upper.iter())
        .zip(array.shape().iter())
        .enumerate()
    {
        if lo > hi || hi >= dim {
            return Err(MdArrayError::SliceOutOfBounds {
                lower: lo,
                upper: hi,
                axis,
                size: dim,
            });
        }
    }
    Ok(())
}

/// Odometer step in pair-swapped space, bounded below/above per digit.
fn advance(current: &mut Index, lower: &Index, upper: &Index) {
    for i in 0..current.len() {
        if current[i] < upper[i] {
            current[i] += 1;
            return;
        }
        current[i] = lower[i];
    }
}

/// Odometer step in pair-swapped space over a zero-based region.
fn advance_zero_based(current: &mut Index, sizes: &Index) {
    for i in 0..current.len() {
        if current[i] + 1 < sizes[i] {
            current[i] += 1;
            return;
        }
        current[i] = 0;
    }
}

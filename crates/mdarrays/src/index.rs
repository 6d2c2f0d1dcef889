//! Index translation and the traversal/ordering protocol.
//!
//! A logical index addresses one element per axis; storage is row-major,
//! so the weight of axis `i` is the element count of every axis after it.
//! Traversal and comparison run over a *pair-swapped* view of the index:
//! positions (0,1), (2,3), … are exchanged so that axis pairs act as the
//! joint digits of one mixed-radix counter, which lets a single successor
//! and comparison routine serve every rank and matches the
//! two-axes-at-a-time nesting used by the presentation layer. The swap
//! only affects enumeration order; [`storage_index`] and
//! [`index_for_storage`] always use the declared axis order.

use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::shape;

/// Logical index of an element: one component per axis.
pub type Index = SmallVec<[usize; 4]>;

/// Exchange the elements at positions (0,1), (2,3), … of `seq`.
///
/// A trailing unpaired element stays in place; applying the transform
/// twice returns the original sequence.
pub fn swap_pairs(seq: &[usize]) -> Index {
    let mut s: Index = SmallVec::from_slice(seq);
    let mut i = 0;
    while i + 1 < s.len() {
        s.swap(i, i + 1);
        i += 2;
    }
    s
}

/// Translate a logical index into a flat storage offset.
///
/// Row-major: the weight of axis `i` is the product of the axis sizes
/// after it, so the last axis varies fastest.
///
/// # Examples
///
/// ```
/// use mdarrays::index::storage_index;
///
/// assert_eq!(storage_index(&[0, 0, 0], &[2, 3, 4]), 0);
/// assert_eq!(storage_index(&[0, 0, 1], &[2, 3, 4]), 1);
/// assert_eq!(storage_index(&[0, 1, 0], &[2, 3, 4]), 4);
/// assert_eq!(storage_index(&[1, 0, 0], &[2, 3, 4]), 12);
/// ```
pub fn storage_index(index: &[usize], shape: &[usize]) -> usize {
    index
        .iter()
        .enumerate()
        .map(|(i, &c)| c * shape::size(&shape[i + 1..]))
        .sum()
}

/// Translate a flat storage offset back into a logical index.
///
/// Exact inverse of [`storage_index`] for every in-range offset: a
/// running stride count starts at the total element count and is divided
/// by each axis size in declared order.
pub fn index_for_storage(offset: usize, shape: &[usize]) -> Index {
    let mut index = Index::new();
    let mut stride = shape::size(shape);
    let mut rem = offset;

    for &dim in shape {
        stride /= dim;
        let c = rem / stride;
        rem -= stride * c;
        index.push(c);
    }

    index
}

/// The maximal valid index of a shape: `shape[i] - 1` per axis, clamped
/// at zero for degenerate axes.
pub fn last_index(shape: &[usize]) -> Index {
    shape.iter().map(|&d| d.saturating_sub(1)).collect()
}

/// Compare two indices under the paired-swap protocol.
///
/// Both sides are pair-swapped and read as mixed-radix digit vectors,
/// least significant digit first, with a uniform radix of one more than
/// the largest component on either side; the digit-weighted sums decide
/// the order. Indices of different lengths order by length.
pub fn cmp_indices(a: &[usize], b: &[usize]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    let radix = a.iter().chain(b.iter()).copied().max().unwrap_or(0) + 1;
    let sa = swap_pairs(a);
    let sb = swap_pairs(b);

    let mut place = 1usize;
    let mut flat_a = 0usize;
    let mut flat_b = 0usize;
    for (&ca, &cb) in sa.iter().zip(sb.iter()) {
        flat_a += ca * place;
        flat_b += cb * place;
        place *= radix;
    }

    flat_a.cmp(&flat_b)
}

/// Successor of `index` in the traversal order for `shape`.
///
/// Increments the pair-swapped representation like an odometer, least
/// significant digit first, carrying into higher digits; the maximal
/// index wraps back around to all zeros.
pub fn next_index(index: &[usize], shape: &[usize]) -> Index {
    let mut swapped = swap_pairs(index);
    let end = swap_pairs(&last_index(shape));

    for j in 0..swapped.len() {
        if swapped[j] < end[j] {
            swapped[j] += 1;
            break;
        }
        swapped[j] = 0;
    }

    swap_pairs(&swapped)
}

/// Iterator over every valid index of a shape, in traversal order.
///
/// Starts at the all-zero index and ends at the maximal index, both
/// inclusive. A rank-0 shape yields a single empty index; a shape with
/// any zero-sized axis yields nothing. The sequence is recomputed from
/// the shape on construction, never cached across mutation.
///
/// # Examples
///
/// ```
/// use mdarrays::index::IndexIter;
///
/// let order: Vec<Vec<usize>> = IndexIter::new(&[2, 2])
///     .map(|i| i.to_vec())
///     .collect();
/// assert_eq!(order, vec![
///     vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1],
/// ]);
/// ```
pub struct IndexIter {
    shape: Vec<usize>,
    next: Option<Index>,
}

impl IndexIter {
    pub fn new(shape: &[usize]) -> Self {
        let next = if shape::size(shape) > 0 {
            Some(Index::from_elem(0, shape.len()))
        } else {
            None
        };
        Self {
            shape: shape.to_vec(),
            next,
        }
    }
}

impl Iterator for IndexIter {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        let current = self.next.take()?;
        if current != last_index(&self.shape) {
            self.next = Some(next_index(&current, &self.shape));
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_pairs_even() {
        assert_eq!(swap_pairs(&[1, 2, 3, 4]).as_slice(), &[2, 1, 4, 3]);
    }

    #[test]
    fn test_swap_pairs_odd_leaves_tail() {
        assert_eq!(swap_pairs(&[1, 2, 3]).as_slice(), &[2, 1, 3]);
        assert_eq!(swap_pairs(&[7]).as_slice(), &[7]);
    }

    #[test]
    fn test_swap_pairs_involution() {
        let a = [4, 1, 0, 3, 2];
        assert_eq!(swap_pairs(&swap_pairs(&a)).as_slice(), &a);
    }

    #[test]
    fn test_storage_index_2d() {
        let shape = [2, 3];
        assert_eq!(storage_index(&[0, 0], &shape), 0);
        assert_eq!(storage_index(&[0, 2], &shape), 2);
        assert_eq!(storage_index(&[1, 0], &shape), 3);
        assert_eq!(storage_index(&[1, 2], &shape), 5);
    }

    #[test]
    fn test_storage_index_rank0() {
        assert_eq!(storage_index(&[], &[]), 0);
    }

    #[test]
    fn test_index_for_storage() {
        let shape = [2, 3, 4];
        assert_eq!(index_for_storage(0, &shape).as_slice(), &[0, 0, 0]);
        assert_eq!(index_for_storage(1, &shape).as_slice(), &[0, 0, 1]);
        assert_eq!(index_for_storage(4, &shape).as_slice(), &[0, 1, 0]);
        assert_eq!(index_for_storage(12, &shape).as_slice(), &[1, 0, 0]);
        assert_eq!(index_for_storage(23, &shape).as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_roundtrip() {
        let shape = [3, 4, 5];
        let total = shape::size(&shape);

        for offset in 0..total {
            let index = index_for_storage(offset, &shape);
            assert_eq!(storage_index(&index, &shape), offset);
        }
    }

    #[test]
    fn test_cmp_indices_2d_matches_traversal() {
        // For rank <= 2 the traversal order is plain row-major.
        assert_eq!(cmp_indices(&[0, 0], &[0, 1]), Ordering::Less);
        assert_eq!(cmp_indices(&[0, 2], &[1, 0]), Ordering::Less);
        assert_eq!(cmp_indices(&[1, 1], &[1, 1]), Ordering::Equal);
        assert_eq!(cmp_indices(&[1, 0], &[0, 2]), Ordering::Greater);
    }

    #[test]
    fn test_cmp_indices_rank3_middle_pair() {
        // Axis 1 is the least significant digit after the swap, axis 2
        // the most significant.
        assert_eq!(cmp_indices(&[0, 1, 0], &[1, 0, 0]), Ordering::Less);
        assert_eq!(cmp_indices(&[1, 0, 0], &[0, 0, 1]), Ordering::Less);
    }

    #[test]
    fn test_cmp_indices_length_first() {
        assert_eq!(cmp_indices(&[5], &[0, 0]), Ordering::Less);
    }

    #[test]
    fn test_next_index_2d() {
        let shape = [2, 3];
        assert_eq!(next_index(&[0, 0], &shape).as_slice(), &[0, 1]);
        assert_eq!(next_index(&[0, 2], &shape).as_slice(), &[1, 0]);
        // The maximal index wraps back to zero.
        assert_eq!(next_index(&[1, 2], &shape).as_slice(), &[0, 0]);
    }

    #[test]
    fn test_next_index_3d_axis1_fastest() {
        let shape = [2, 3, 2];
        assert_eq!(next_index(&[0, 0, 0], &shape).as_slice(), &[0, 1, 0]);
        assert_eq!(next_index(&[0, 2, 0], &shape).as_slice(), &[1, 0, 0]);
        assert_eq!(next_index(&[1, 2, 0], &shape).as_slice(), &[0, 0, 1]);
    }

    #[test]
    fn test_iter_completeness_2d() {
        let all: Vec<Index> = IndexIter::new(&[2, 3]).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].as_slice(), &[0, 0]);
        assert_eq!(all[5].as_slice(), &[1, 2]);

        // Every valid index appears exactly once.
        for i in 0..2 {
            for j in 0..3 {
                let count = all
                    .iter()
                    .filter(|idx| idx.as_slice() == [i, j])
                    .count();
                assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn test_iter_order_is_sorted() {
        let all: Vec<Index> = IndexIter::new(&[2, 3, 2]).collect();
        assert_eq!(all.len(), 12);
        for pair in all.windows(2) {
            assert_eq!(cmp_indices(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    #[test]
    fn test_iter_rank0() {
        let all: Vec<Index> = IndexIter::new(&[]).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }

    #[test]
    fn test_iter_zero_axis() {
        let all: Vec<Index> = IndexIter::new(&[2, 0, 3]).collect();
        assert!(all.is_empty());
    }
}

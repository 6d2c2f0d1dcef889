//! Nested-tree presentation of higher-rank arrays.

use std::fmt;

use crate::array::MdArray;

/// A tagged tree mirroring the nested-sequence form of an array.
///
/// Rank > 2 arrays have no flat `Vec`-of-`Vec`s shape, so the
/// presentation layer rebuilds them as a tree of lists with elements at
/// the leaves.
#[derive(Clone, PartialEq)]
pub enum NestedArray<T> {
    Leaf(T),
    List(Vec<NestedArray<T>>),
}

impl<T: fmt::Debug> fmt::Debug for NestedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestedArray::Leaf(v) => write!(f, "{v:?}"),
            NestedArray::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

/// Rebuild a rank > 2 array as a nested tree, folding two axes at a time.
///
/// Elements are taken in the canonical traversal order and regrouped once
/// per axis, each round chunking by the size of the axis's pair partner
/// ((0,1), (2,3), …; an unpaired final axis partners itself). Returns
/// `None` for rank ≤ 2, where [`MdArray::vector`] and [`MdArray::matrix`]
/// apply instead.
pub fn nested<T: Clone>(a: &MdArray<T>) -> Option<NestedArray<T>> {
    if !a.is_higher_order() {
        return None;
    }
    if a.is_empty() {
        return Some(NestedArray::List(Vec::new()));
    }

    let mut nodes: Vec<NestedArray<T>> = a.iter().cloned().map(NestedArray::Leaf).collect();

    for j in 0..a.rank() {
        let partner = if j % 2 == 0 && j + 1 < a.rank() {
            j + 1
        } else if j % 2 == 1 {
            j - 1
        } else {
            j
        };

        let s = a.shape()[partner];
        nodes = nodes
            .chunks(s)
            .map(|chunk| NestedArray::List(chunk.to_vec()))
            .collect();
    }

    Some(NestedArray::List(nodes))
}

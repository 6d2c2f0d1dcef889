//! Error types for mdarrays.

use thiserror::Error;

/// Errors that can occur in multidimensional array operations.
#[derive(Debug, Error)]
pub enum MdArrayError {
    /// Supplied storage buffer holds fewer elements than the shape requires.
    #[error("insufficient storage: shape requires {expected} elements, buffer has {actual}")]
    InsufficientStorage { expected: usize, actual: usize },

    /// Index component outside its axis bound.
    #[error("index out of bounds: component {index} is out of range for axis of size {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Wrong number of index components.
    #[error("wrong number of index components: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Axis argument outside the array's rank.
    #[error("invalid axis {axis} for array of rank {rank}")]
    InvalidDimension { axis: usize, rank: usize },

    /// Sub-array bounds out of range.
    #[error("slice bounds {lower}..={upper} out of bounds for axis {axis} with size {size}")]
    SliceOutOfBounds {
        lower: usize,
        upper: usize,
        axis: usize,
        size: usize,
    },

    /// Operand shapes incompatible for an elementwise operation.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Reshape needed to grow the storage but no fill value was supplied.
    #[error("reshape from {from} to {to} elements requires a fill value")]
    GrowthWithoutFill { from: usize, to: usize },
}

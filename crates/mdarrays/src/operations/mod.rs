//! High-level array operations.
//!
//! Structural operations (slicing, transposition) rewrite elements
//! through the index engine and never touch the numeric backend; the
//! elementwise layer does the opposite, dispatching flat buffers to
//! [`backend`](crate::backend) and re-wrapping the results.

mod convert;
mod elementwise;
mod slice;
mod transpose;

pub use convert::{f32_to_i32, f64_to_i32, i32_to_f32, i32_to_f64};
pub use elementwise::{add, ediv, emul, fill, neg, scale, sdiv, sub, sum, svdiv, zero};
pub use slice::{set_sub_array, sub_array};
pub use transpose::transpose;

//! Numeric capability trait for array element types.

use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for the numeric storage kinds supported by the math layer.
///
/// Structural operations on [`MdArray`](crate::MdArray) work for any
/// `T: Clone`; arithmetic (the elementwise layer, contraction, the
/// determinant and symmetry routines) additionally needs the identities
/// and operators collected here.
pub trait Numeric:
    Copy
    + Debug
    + Default
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
}

impl Numeric for i32 {}
impl Numeric for f32 {}
impl Numeric for f64 {}

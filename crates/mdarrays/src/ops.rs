//! Operator surface for numeric arrays.
//!
//! `*` between two arrays is the axis contraction over axes (0, 1), the
//! generalized matrix product, not elementwise multiplication; the
//! elementwise forms are [`operations::emul`](crate::operations::emul)
//! and [`operations::ediv`](crate::operations::ediv). Binary operators
//! panic on incompatible shapes; use the fallible functions in
//! [`operations`](crate::operations) where that matters.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::array::MdArray;
use crate::contract::contract;
use crate::operations;
use crate::scalar::Numeric;

impl<T: Numeric> Add for &MdArray<T> {
    type Output = MdArray<T>;

    fn add(self, rhs: &MdArray<T>) -> MdArray<T> {
        match operations::add(self, rhs) {
            Ok(c) => c,
            Err(e) => panic!("array addition: {e}"),
        }
    }
}

impl<T: Numeric> Add for MdArray<T> {
    type Output = MdArray<T>;

    fn add(self, rhs: MdArray<T>) -> MdArray<T> {
        &self + &rhs
    }
}

impl<T: Numeric> Sub for &MdArray<T> {
    type Output = MdArray<T>;

    fn sub(self, rhs: &MdArray<T>) -> MdArray<T> {
        match operations::sub(self, rhs) {
            Ok(c) => c,
            Err(e) => panic!("array subtraction: {e}"),
        }
    }
}

impl<T: Numeric> Sub for MdArray<T> {
    type Output = MdArray<T>;

    fn sub(self, rhs: MdArray<T>) -> MdArray<T> {
        &self - &rhs
    }
}

impl<T: Numeric> Mul for &MdArray<T> {
    type Output = MdArray<T>;

    fn mul(self, rhs: &MdArray<T>) -> MdArray<T> {
        contract(self, 0, rhs, 1)
    }
}

impl<T: Numeric> Mul for MdArray<T> {
    type Output = MdArray<T>;

    fn mul(self, rhs: MdArray<T>) -> MdArray<T> {
        &self * &rhs
    }
}

impl<T: Numeric> Neg for &MdArray<T> {
    type Output = MdArray<T>;

    fn neg(self) -> MdArray<T> {
        operations::neg(self)
    }
}

impl<T: Numeric> Neg for MdArray<T> {
    type Output = MdArray<T>;

    fn neg(self) -> MdArray<T> {
        -&self
    }
}

impl<T: Numeric> Mul<T> for &MdArray<T> {
    type Output = MdArray<T>;

    fn mul(self, s: T) -> MdArray<T> {
        operations::scale(self, s)
    }
}

impl<T: Numeric> Mul<T> for MdArray<T> {
    type Output = MdArray<T>;

    fn mul(self, s: T) -> MdArray<T> {
        &self * s
    }
}

impl<T: Numeric> Div<T> for &MdArray<T> {
    type Output = MdArray<T>;

    fn div(self, s: T) -> MdArray<T> {
        operations::sdiv(self, s)
    }
}

impl<T: Numeric> Div<T> for MdArray<T> {
    type Output = MdArray<T>;

    fn div(self, s: T) -> MdArray<T> {
        &self / s
    }
}

// Scalar-on-the-left forms need one impl per concrete kind.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Mul<&MdArray<$t>> for $t {
            type Output = MdArray<$t>;

            fn mul(self, a: &MdArray<$t>) -> MdArray<$t> {
                operations::scale(a, self)
            }
        }

        impl Mul<MdArray<$t>> for $t {
            type Output = MdArray<$t>;

            fn mul(self, a: MdArray<$t>) -> MdArray<$t> {
                self * &a
            }
        }

        impl Div<&MdArray<$t>> for $t {
            type Output = MdArray<$t>;

            fn div(self, a: &MdArray<$t>) -> MdArray<$t> {
                operations::svdiv(self, a)
            }
        }

        impl Div<MdArray<$t>> for $t {
            type Output = MdArray<$t>;

            fn div(self, a: MdArray<$t>) -> MdArray<$t> {
                self / &a
            }
        }
    )*};
}

scalar_lhs_ops!(i32, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_operators() {
        let a = MdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let b = MdArray::from_vec(vec![10, 20, 30], &[3]).unwrap();
        assert_eq!((&a + &b).storage(), &[11, 22, 33]);
        assert_eq!((&b - &a).storage(), &[9, 18, 27]);
    }

    #[test]
    #[should_panic(expected = "array addition")]
    fn test_add_shape_mismatch_panics() {
        let a = MdArray::filled(&[2], 0);
        let b = MdArray::filled(&[3], 0);
        let _ = &a + &b;
    }

    #[test]
    fn test_mul_is_contraction() {
        let a = MdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let b = MdArray::from_vec(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], &[3, 2]).unwrap();
        let c = &a * &b;
        assert_eq!(c.shape(), &[2, 2]);
        assert_eq!(c.storage(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_neg_operator() {
        let a = MdArray::from_vec(vec![1, -2], &[2]).unwrap();
        assert_eq!((-&a).storage(), &[-1, 2]);
    }

    #[test]
    fn test_scalar_operators() {
        let a: MdArray<f64> = MdArray::from_vec(vec![2.0, 4.0], &[2]).unwrap();
        assert_eq!((&a * 3.0).storage(), &[6.0, 12.0]);
        assert_eq!((3.0 * &a).storage(), &[6.0, 12.0]);
        assert_eq!((&a / 2.0).storage(), &[1.0, 2.0]);
        assert_eq!((8.0 / &a).storage(), &[4.0, 2.0]);
    }
}

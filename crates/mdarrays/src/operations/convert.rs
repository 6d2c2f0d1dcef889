//! Conversions between numeric storage kinds.
//!
//! Shape is preserved; float to integer truncates toward zero.

use crate::array::MdArray;

/// `i32` storage to `f32`.
pub fn i32_to_f32(a: &MdArray<i32>) -> MdArray<f32> {
    remap(a, |x| x as f32)
}

/// `f32` storage to `i32`, truncating toward zero.
pub fn f32_to_i32(a: &MdArray<f32>) -> MdArray<i32> {
    remap(a, |x| x as i32)
}

/// `i32` storage to `f64`.
pub fn i32_to_f64(a: &MdArray<i32>) -> MdArray<f64> {
    remap(a, |x| x as f64)
}

/// `f64` storage to `i32`, truncating toward zero.
pub fn f64_to_i32(a: &MdArray<f64>) -> MdArray<i32> {
    remap(a, |x| x as i32)
}

fn remap<A: Copy, B: Clone>(a: &MdArray<A>, f: impl Fn(A) -> B) -> MdArray<B> {
    let data: Vec<B> = a.storage().iter().map(|&x| f(x)).collect();
    MdArray::from_vec(data, a.shape()).expect("convert: shape unchanged")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i32_to_f32() {
        let a = MdArray::from_vec(vec![1, -2, 3], &[3]).unwrap();
        let f = i32_to_f32(&a);
        assert_eq!(f.shape(), &[3]);
        assert_eq!(f.storage(), &[1.0, -2.0, 3.0]);
    }

    #[test]
    fn test_f32_to_i32_truncates_toward_zero() {
        let a = MdArray::from_vec(vec![1.9f32, -1.9, 0.4], &[3]).unwrap();
        assert_eq!(f32_to_i32(&a).storage(), &[1, -1, 0]);
    }

    #[test]
    fn test_i32_to_f64_roundtrip() {
        let a = MdArray::from_vec(vec![5, -7], &[2]).unwrap();
        let back = f64_to_i32(&i32_to_f64(&a));
        assert_eq!(back, a);
    }
}

//! Random array construction.

use rand::distr::StandardUniform;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::array::MdArray;
use crate::scalar::Numeric;
use crate::shape;

/// Types that can be sampled uniformly from [0, 1).
pub trait RandomUniform: Numeric {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

/// Types that can be sampled from the standard normal distribution.
pub trait RandomNormal: Numeric {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl<T: RandomUniform> MdArray<T> {
    /// Array of `shape` with uniform random elements in [0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use mdarrays::MdArray;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let a: MdArray<f64> = MdArray::random_uniform(&[2, 3], &mut rng);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert!(a.storage().iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random_uniform<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let data: Vec<T> = (0..shape::size(shape))
            .map(|_| T::sample_uniform(rng))
            .collect();
        MdArray::from_vec(data, shape).expect("random_uniform: sized to shape")
    }
}

impl<T: RandomNormal> MdArray<T> {
    /// Array of `shape` with standard-normal random elements.
    pub fn random_normal<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let data: Vec<T> = (0..shape::size(shape))
            .map(|_| T::sample_normal(rng))
            .collect();
        MdArray::from_vec(data, shape).expect("random_normal: sized to shape")
    }
}

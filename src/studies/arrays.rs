use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use std::fmt::Display;

use crate::core::error::ArgumentError;

/// `len` default values.
pub fn create_array<T: Default>(len: usize) -> Vec<T> {
    (0..len).map(|_| T::default()).collect()
}

/// `len` copies of `value`.
pub fn create_array_with_default_values<T: Clone>(len: usize, value: T) -> Vec<T> {
    vec![value; len]
}

/// `len` values drawn uniformly from `[min, max)`.
///
/// Any range `Uniform` cannot sample from is rejected: `min >= max`, NaN or
/// infinite bounds, and float spans that overflow.
pub fn create_array_with_random_values<T>(len: usize, min: T, max: T) -> Result<Vec<T>, ArgumentError>
where
    T: SampleUniform + Copy + Display,
{
    let distribution =
        Uniform::<T>::new(min, max).map_err(|_| ArgumentError::empty_range(min, max))?;
    let mut rng = rand::rng();
    Ok((0..len).map(|_| distribution.sample(&mut rng)).collect())
}

/// Random integer arrays as an extension on `Vec<i32>`.
pub trait RandomIntArray: Sized {
    /// `size` integers drawn uniformly from `[min, max)`.
    fn make_big_random_int_array(size: usize, min: i32, max: i32) -> Result<Self, ArgumentError>;
}

impl RandomIntArray for Vec<i32> {
    fn make_big_random_int_array(size: usize, min: i32, max: i32) -> Result<Self, ArgumentError> {
        if size == 0 {
            return Err(ArgumentError::NonPositiveSize);
        }
        create_array_with_random_values(size, min, max)
    }
}

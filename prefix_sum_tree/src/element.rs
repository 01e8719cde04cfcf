use super::Zero;
use std::ops::{Add, AddAssign, Sub};

/// Numeric value that can be stored in a [`PrefixSumTree`](crate::PrefixSumTree).
///
/// Implemented for every type with a zero value and the arithmetic the tree
/// needs, which covers all primitive integers and floats.
pub trait Element:
    Zero + Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + AddAssign
{
}
impl<T> Element for T where
    T: Zero + Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + AddAssign
{
}

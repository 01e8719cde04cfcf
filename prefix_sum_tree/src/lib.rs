//! Fenwick tree (binary indexed tree) over a fixed-size sequence of numbers.
//!
//! Node `k` of the flat buffer holds the sum of the elements in
//! `[k & (k + 1), k]`, so both prefix-sum queries and point updates touch
//! O(log n) nodes.
mod element;
mod error;
mod impls;
mod traits;
mod tree;

pub use element::Element;
pub use error::{PrefixSumTreeError, Result};
pub use traits::Zero;
pub use tree::PrefixSumTree;

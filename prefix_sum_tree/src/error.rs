use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSumTreeError {
    #[error("index {index} is out of range for a tree of size {size}")]
    OutOfRange { index: usize, size: usize },
    #[error("range [{start}, {end}] has a negative length")]
    InvalidRange { start: usize, end: usize },
}

pub type Result<T> = std::result::Result<T, PrefixSumTreeError>;

use thiserror::Error;

/// Invalid-argument conditions. They are detected before the input is touched or any counter in
/// the caller's [`Metrics`](crate::Metrics) changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("input is empty")]
    EmptyInput,
    #[error("index {k} is out of range for input of length {len}")]
    IndexOutOfRange { k: usize, len: usize },
    #[error("need at least 2 points, got {len}")]
    NotEnoughPoints { len: usize },
    #[error("unknown algorithm `{name}`, expected one of mergesort, quicksort, select, closest")]
    UnknownAlgorithm { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

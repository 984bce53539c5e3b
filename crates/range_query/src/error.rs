use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeQueryError {
    /// `[l, r]` is not a non-empty inclusive range inside a sequence of `len` elements.
    #[error("invalid range [{l}, {r}] for sequence of length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
}

/// A batch is answered atomically: the first rejected query aborts it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("query #{index} rejected: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: RangeQueryError,
}

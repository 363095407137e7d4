use thiserror::Error;

/// Failures reported by the heap and the range-based sorting entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    #[error("heap is full, capacity of {capacity} elements reached")]
    CapacityExceeded { capacity: usize },
    #[error("cannot allocate a heap with capacity for {capacity} elements")]
    AllocationFailed { capacity: usize },
    #[error("cannot extract from an empty heap")]
    EmptyExtraction,
    #[error("range end {high} is out of bounds for a buffer of length {len}")]
    RangeOutOfBounds { high: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SortError>;

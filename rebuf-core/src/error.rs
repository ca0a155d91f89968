//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// An item's field shapes do not match the shape fixed at buffer creation.
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// The shape fixed at buffer creation.
        expected: String,

        /// The shape of the rejected data.
        actual: String,
    },

    /// A single-item operation received a batch of a different length.
    #[error("Expected a single item, got a batch of length {0}")]
    NotSingleItem(usize),

    /// Sampling was requested while the buffer holds no items.
    #[error("Cannot sample from an empty buffer")]
    EmptyBuffer,

    /// Buffer capacity must be positive.
    #[error("Buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// A batch insert outside the region where the one-shot slice insert
    /// is well-defined.
    #[error("Unsupported batch insert: {0}")]
    UnsupportedBatchInsert(String),

    /// A logical offset beyond the number of stored items.
    #[error("Offset {offset} out of range for buffer of size {size}")]
    OffsetOutOfRange {
        /// The rejected logical offset.
        offset: usize,

        /// The logical size of the buffer at the time of the call.
        size: usize,
    },
}

use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Range is reversed or reaches past the end of the vector
    #[error("Invalid range: {start}..{end} for vector length {length}")]
    InvalidRange {
        /// First index of the range
        start: usize,
        /// One past the last index of the range
        end: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Required capacity exceeds the largest representable element count
    #[error("Capacity overflow: requested {requested} elements, but at most {max} are allowed")]
    CapacityOverflow {
        /// Number of slots requested
        requested: usize,
        /// Maximum number of slots for the element type
        max: usize,
    },
    /// The global allocator could not provide the buffer
    #[error("Allocation failed: {size} bytes with alignment {align}")]
    AllocationFailed {
        /// Size of the requested block in bytes
        size: usize,
        /// Alignment of the requested block
        align: usize,
    },
    /// Operation needs at least one element
    #[error("Operation on empty vector")]
    EmptyVector,
}

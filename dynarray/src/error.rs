use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Slot storage could not be obtained or grown
    #[error("Allocation failed: could not reserve storage for {requested} slots")]
    AllocationError {
        /// Slot capacity that was being reserved
        requested: usize,
    },
    /// Index is beyond the current array length
    #[error("Index out of range: index {index} is beyond array length {length}")]
    IndexOutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
}

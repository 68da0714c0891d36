use thiserror::Error;

/// Error types for `ByteString` operations
///
/// Implements `std::error::Error` only with the `std` feature.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ByteStringError {
    /// Storage could not be obtained or grown
    #[error("Allocation failed: could not reserve storage for {requested} bytes")]
    AllocationError {
        /// Byte capacity that was being reserved, terminator excluded
        requested: usize,
    },
    /// The underlying reader failed
    #[error("Read error at byte {position}: {kind:?}")]
    ReadError {
        /// The kind of IO error that occurred
        kind: embedded_io::ErrorKind,
        /// Number of bytes consumed from the reader before the error
        position: usize,
    },
    /// The underlying writer failed
    #[error("Write error: {kind:?}")]
    WriteError {
        /// The kind of IO error that occurred
        kind: embedded_io::ErrorKind,
    },
}

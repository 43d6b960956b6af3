//! Error types for path construction and the binary interchange codec.

use thiserror::Error;

/// Errors raised by path construction and storage growth.
///
/// The first two variants are validation errors and are recoverable by the
/// caller. The storage variants signal that the backing arrays could not be
/// grown; they are not retriable and must not be mistaken for bad input.
#[derive(Debug, Error)]
pub enum PathError {
    /// A drawing command was issued against an empty path. Every path must
    /// begin with a `move_to`.
    #[error("missing initial move_to in path definition")]
    MissingInitialMoveTo,

    /// A winding-rule byte outside {0 (even-odd), 1 (non-zero)}.
    #[error("winding rule must be even-odd (0) or non-zero (1), got {0}")]
    InvalidWindingRule(u8),

    /// The required storage size is not representable; even the minimum
    /// growth would overflow.
    #[error("path storage exceeds maximum capacity")]
    CapacityExceeded,

    /// The allocator could not satisfy even the minimum required size.
    #[error("cannot grow path storage to {required} slots")]
    StorageExhausted {
        /// The smallest capacity that would have accommodated the append.
        required: usize,
    },
}

impl PathError {
    /// True for the storage-growth variants (fatal, non-retriable),
    /// false for the validation variants.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            PathError::CapacityExceeded | PathError::StorageExhausted { .. }
        )
    }
}

/// Errors surfaced by the binary interchange codec.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream does not describe a valid path: unrecognized segment tag,
    /// unexpected or missing end marker, invalid winding-rule byte, or a
    /// drawing record before any move record.
    #[error("corrupt path stream: {0}")]
    Corrupt(String),

    /// Storage growth failed while rebuilding the path from the stream.
    #[error(transparent)]
    Storage(PathError),

    /// An underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<PathError> for StreamError {
    /// Validation failures at the stream boundary are reported as stream
    /// corruption; storage exhaustion keeps its own identity.
    fn from(e: PathError) -> Self {
        if e.is_storage() {
            StreamError::Storage(e)
        } else {
            StreamError::Corrupt(e.to_string())
        }
    }
}

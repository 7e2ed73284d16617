//! Blob-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during blob operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlobError {
    /// The allocator could not satisfy an owned-blob allocation.
    AllocFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// A slice or copy-in range falls outside the blob's bounds.
    OutOfRange {
        /// Starting byte offset of the requested range.
        offset: usize,
        /// Length of the requested range in bytes.
        len: usize,
        /// Length of the blob the range was checked against.
        blob_len: usize,
    },
    /// Attempted to write through a view. Views are read-only; mutation
    /// requires an owned blob.
    ReadOnly,
}

impl fmt::Display for BlobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { requested } => {
                write!(f, "blob allocation failed: requested {requested} bytes")
            }
            Self::OutOfRange {
                offset,
                len,
                blob_len,
            } => {
                write!(
                    f,
                    "range out of bounds: offset {offset} + len {len} exceeds blob length {blob_len}"
                )
            }
            Self::ReadOnly => write!(f, "blob is a read-only view"),
        }
    }
}

impl Error for BlobError {}

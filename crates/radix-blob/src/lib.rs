//! Tagged owned/view byte buffers.
//!
//! A [`Blob`] is a byte range that either owns its storage or borrows it
//! from elsewhere. All higher-level Radix data flows through blobs: the
//! list container stores owned blobs, hashing fingerprints them, and the
//! cipher boundary transforms them in place.
//!
//! Ownership is encoded in the type, not in a runtime flag that callers
//! must police:
//!
//! - An owned blob frees its storage exactly once, on drop.
//! - A view borrows its bytes for a lifetime `'a`; dropping it is a no-op.
//! - Slicing *any* blob produces a view borrowing the parent, so a slice
//!   can never free (or double-free) the parent's allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blob;
pub mod error;

pub use blob::{Blob, WindowPolicy};
pub use error::BlobError;

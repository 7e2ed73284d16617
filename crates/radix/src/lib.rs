//! Radix: tagged byte buffers and a query-addressable list.
//!
//! This is the top-level facade crate re-exporting the public API from the
//! Radix sub-crates. For most users, adding `radix` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use radix::prelude::*;
//!
//! // Build a list of owned values.
//! let mut list = List::new();
//! list.append_value(Side::Right, &Blob::view(b"alpha"));
//! list.append_value(Side::Right, &Blob::view(b"beta"));
//!
//! // Search by value; the result carries neighbours from the same pass.
//! let target = Blob::copy_from_slice(b"beta");
//! let hit = list.query(&Query::by_value(&target));
//! assert!(hit.found());
//! assert_eq!(hit.index().position(), 1);
//! assert_eq!(hit.previous().unwrap().as_slice(), b"alpha");
//!
//! // Fingerprint a stored value.
//! let digest = radix::hash::fingerprint(list.get(0).unwrap());
//! assert_eq!(digest, radix::hash::fnv1a64(b"alpha"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`blob`] | `radix-blob` | Owned/view byte buffers |
//! | [`list`] | `radix-list` | The list container, cursor, and query protocol |
//! | [`hash`] | `radix-hash` | FNV-1a hashing and blob fingerprints |
//! | [`fract`] | `radix-fract` | Plain rational arithmetic |
//! | [`cipher`] | `radix-cipher` | Opaque stream-cipher boundary |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Owned/view byte buffers (`radix-blob`).
///
/// [`blob::Blob`] is the value type everything else traffics in.
pub use radix_blob as blob;

/// The list container, cursor, and query protocol (`radix-list`).
pub use radix_list as list;

/// FNV-1a hashing and blob fingerprints (`radix-hash`).
pub use radix_hash as hash;

/// Plain rational arithmetic (`radix-fract`).
pub use radix_fract as fract;

/// Opaque stream-cipher boundary (`radix-cipher`).
///
/// Declares the [`cipher::Cipher`] surface and the in-place blob
/// transform; concrete algorithms plug in from outside.
pub use radix_cipher as cipher;

/// Common imports for typical Radix usage.
///
/// ```rust
/// use radix::prelude::*;
/// ```
pub mod prelude {
    pub use radix_blob::{Blob, BlobError, WindowPolicy};
    pub use radix_list::{Cursor, List, ListIndex, Query, QueryModes, QueryResult, Side};
}

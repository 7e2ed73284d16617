//! A singly-linked, query-addressable list of blobs.
//!
//! [`List`] stores a sequence of owned [`Blob`](radix_blob::Blob) values.
//! Values are deep-copied on the way in, so the list never aliases caller
//! memory; values read back out are borrowed from the list's storage.
//!
//! Lookup goes through a single traversal primitive: a [`Query`] selects
//! one or more match modes (by position, by exact value, by sliding-window
//! containment) and [`List::query`] walks a [`Cursor`] from the head until
//! an element satisfies any selected mode. Every positional and
//! value-based search is a thin wrapper over that primitive.
//!
//! # Storage
//!
//! Nodes live in a slab of generation-tagged slots and link to each other
//! by handle rather than by pointer. Removing an element retires its slot
//! instead of freeing memory directly, so no dangling links can exist and
//! the slab can recycle slots for later inserts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
mod handle;
pub mod list;
pub mod query;

pub use cursor::Cursor;
pub use list::{List, Side};
pub use query::{ListIndex, Query, QueryModes, QueryResult};

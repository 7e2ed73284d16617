//! Test fixtures shared across Radix crates.
//!
//! Internal to the workspace (`publish = false`); integration tests use
//! these helpers to build and inspect lists without repeating cursor
//! boilerplate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{contents, list_of, owned};

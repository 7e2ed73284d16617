//! The [`Blob`] type: an owned byte buffer or a borrowed view.

use smallvec::SmallVec;
use std::fmt;

use crate::error::BlobError;

/// Owned blobs keep up to this many bytes inline, avoiding a heap
/// allocation for short values (list keys, tags, small records).
/// Longer values spill to the heap transparently.
const INLINE: usize = 16;

/// Backing storage: either owned bytes or a borrowed slice.
#[derive(Clone)]
enum Repr<'a> {
    Owned(SmallVec<[u8; INLINE]>),
    View(&'a [u8]),
}

/// A byte range that is either owned or a borrowed view.
///
/// An owned blob (`Blob<'static>`) backs its own storage and releases it
/// exactly once when dropped. A view borrows bytes for the lifetime `'a`
/// and never frees anything. Slicing either kind yields a view into the
/// parent, so ownership is never duplicated through a slice.
///
/// Cloning an owned blob deep-copies its bytes; cloning a view copies
/// only the reference.
#[derive(Clone)]
pub struct Blob<'a> {
    repr: Repr<'a>,
}

impl<'a> Blob<'a> {
    /// Wrap an existing byte range as a non-owning view.
    ///
    /// No allocation takes place and the operation cannot fail.
    pub fn view(bytes: &'a [u8]) -> Blob<'a> {
        Blob {
            repr: Repr::View(bytes),
        }
    }

    /// Allocate an owned, zero-filled blob of `len` bytes.
    ///
    /// Returns [`BlobError::AllocFailed`] if the allocator cannot satisfy
    /// the request.
    pub fn alloc(len: usize) -> Result<Blob<'static>, BlobError> {
        let mut bytes: SmallVec<[u8; INLINE]> = SmallVec::new();
        if len > INLINE {
            bytes
                .try_reserve(len)
                .map_err(|_| BlobError::AllocFailed { requested: len })?;
        }
        bytes.resize(len, 0);
        Ok(Blob {
            repr: Repr::Owned(bytes),
        })
    }

    /// Create an owned blob containing a copy of `bytes`.
    pub fn copy_from_slice(bytes: &[u8]) -> Blob<'static> {
        Blob {
            repr: Repr::Owned(SmallVec::from_slice(bytes)),
        }
    }

    /// Create an empty owned blob.
    pub fn empty() -> Blob<'static> {
        Blob {
            repr: Repr::Owned(SmallVec::new()),
        }
    }

    /// Deep-copy this blob's bytes into a new owned blob.
    ///
    /// This is the isolation step the list performs when storing a value:
    /// the copy shares no storage with `self`.
    pub fn to_owned_blob(&self) -> Blob<'static> {
        Blob::copy_from_slice(self.as_slice())
    }

    /// Length of the byte range.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the byte range is empty.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Whether this blob owns its storage (as opposed to viewing
    /// someone else's).
    pub fn is_owned(&self) -> bool {
        matches!(self.repr, Repr::Owned(_))
    }

    /// The bytes of this blob.
    pub fn as_slice(&self) -> &[u8] {
        match &self.repr {
            Repr::Owned(bytes) => bytes,
            Repr::View(bytes) => bytes,
        }
    }

    /// Mutable access to the bytes, or `None` for a view.
    pub fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        match &mut self.repr {
            Repr::Owned(bytes) => Some(bytes),
            Repr::View(_) => None,
        }
    }

    /// A view of the sub-range `[offset, offset + len)` of this blob.
    ///
    /// The result is always a view borrowing `self`, even when `self` is
    /// owned — a slice never carries ownership of the parent's storage.
    /// Returns [`BlobError::OutOfRange`] if the range does not fit.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Blob<'_>, BlobError> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= self.len())
            .ok_or(BlobError::OutOfRange {
                offset,
                len,
                blob_len: self.len(),
            })?;
        Ok(Blob::view(&self.as_slice()[offset..end]))
    }

    /// Copy the bytes of `source` into this blob starting at `offset`.
    ///
    /// The target must be owned ([`BlobError::ReadOnly`] otherwise) and
    /// must have at least `offset + source.len()` bytes
    /// ([`BlobError::OutOfRange`] otherwise).
    pub fn write_at(&mut self, offset: usize, source: &Blob<'_>) -> Result<(), BlobError> {
        let src = source.as_slice();
        let end = offset
            .checked_add(src.len())
            .filter(|&end| end <= self.len())
            .ok_or(BlobError::OutOfRange {
                offset,
                len: src.len(),
                blob_len: self.len(),
            })?;
        match &mut self.repr {
            Repr::Owned(bytes) => {
                bytes[offset..end].copy_from_slice(src);
                Ok(())
            }
            Repr::View(_) => Err(BlobError::ReadOnly),
        }
    }

    /// Whether some contiguous `window`-byte range of this blob matches
    /// `needle` under the given [`WindowPolicy`].
    ///
    /// Returns `false` when `window` is zero, larger than this blob, or
    /// incompatible with the needle length under the policy.
    pub fn contains(&self, needle: &Blob<'_>, window: usize, policy: WindowPolicy) -> bool {
        if window == 0 || window > self.len() {
            return false;
        }
        let needle = needle.as_slice();
        match policy {
            WindowPolicy::Exact if needle.len() != window => return false,
            WindowPolicy::Prefix if needle.len() > window => return false,
            _ => {}
        }
        self.as_slice()
            .windows(window)
            .any(|w| &w[..needle.len()] == needle)
    }
}

impl Default for Blob<'static> {
    fn default() -> Self {
        Blob::empty()
    }
}

impl<'a, 'b> PartialEq<Blob<'b>> for Blob<'a> {
    fn eq(&self, other: &Blob<'b>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Blob<'_> {}

impl fmt::Debug for Blob<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_owned() { "owned" } else { "view" };
        write!(f, "Blob({kind}, {} bytes)", self.len())
    }
}

/// How window length relates to needle length in a containment match.
///
/// [`Blob::contains`] slides a fixed-size window over the haystack; the
/// policy decides which needle lengths are admissible for that window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPolicy {
    /// The needle must be exactly `window` bytes long; each window is
    /// compared whole.
    Exact,
    /// The needle may be up to `window` bytes long and is compared
    /// against each window's prefix.
    Prefix,
}

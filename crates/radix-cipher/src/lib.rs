//! Opaque stream-cipher boundary.
//!
//! The toolkit treats its cipher as a black box: a key is derived from a
//! seed, per-byte transform state is initialised from the key, and a blob
//! is transformed in place by feeding each byte through that state. The
//! concrete algorithm lives behind the [`Cipher`] trait and is not part
//! of this crate; only the surface and the in-place driver are.
//!
//! Cipher state is internal to each [`CipherState`] value and shares
//! nothing with the blob or list subsystems.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::fmt;

use radix_blob::{Blob, BlobError};

/// A derived cipher key.
///
/// Opaque to callers; only a [`Cipher`] gives it meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherKey(pub u64);

impl fmt::Debug for CipherKey {
    // Keys never appear in logs or panics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherKey(..)")
    }
}

/// Derives a [`CipherKey`] from a seed by iterated strengthening.
pub trait KeySchedule {
    /// Derive a key from `seed`, running `iterations` strengthening
    /// rounds. Must be deterministic: equal inputs give equal keys.
    fn derive_key(&self, seed: u64, iterations: u32) -> CipherKey;
}

/// Mutable per-byte transform state.
///
/// Implementations carry whatever internal state the algorithm needs;
/// the driver only ever feeds bytes through in order.
pub trait CipherState {
    /// Transform one byte, advancing the internal state.
    fn transform_byte(&mut self, byte: u8) -> u8;
}

/// A symmetric stream cipher: key schedule plus state construction.
pub trait Cipher: KeySchedule {
    /// The per-message transform state this cipher produces.
    type State: CipherState;

    /// Initialise fresh transform state from a key.
    fn init(&self, key: CipherKey) -> Self::State;
}

/// Transform a blob's bytes in place through `state`.
///
/// Every byte is replaced by its transform, in order. The blob must be
/// owned; transforming a view returns [`BlobError::ReadOnly`] and leaves
/// the state untouched.
pub fn transform_in_place(
    blob: &mut Blob<'_>,
    state: &mut impl CipherState,
) -> Result<(), BlobError> {
    let bytes = blob.as_mut_slice().ok_or(BlobError::ReadOnly)?;
    for byte in bytes {
        *byte = state.transform_byte(*byte);
    }
    Ok(())
}

/// Transform a blob in place with a fresh state for the given key.
///
/// Convenience over [`transform_in_place`] for whole-blob operations:
/// symmetric ciphers make a second call with the same key the inverse of
/// the first.
pub fn transform_blob<C: Cipher>(
    cipher: &C,
    blob: &mut Blob<'_>,
    key: CipherKey,
) -> Result<(), BlobError> {
    let mut state = cipher.init(key);
    transform_in_place(blob, &mut state)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double standing in for a real cipher: XORs every byte with a
    /// key-derived constant. Exercises the driver only; it is not a model
    /// of the production algorithm.
    struct StubCipher;

    struct StubState {
        mask: u8,
    }

    impl KeySchedule for StubCipher {
        fn derive_key(&self, seed: u64, iterations: u32) -> CipherKey {
            CipherKey(seed.wrapping_add(u64::from(iterations)))
        }
    }

    impl CipherState for StubState {
        fn transform_byte(&mut self, byte: u8) -> u8 {
            byte ^ self.mask
        }
    }

    impl Cipher for StubCipher {
        type State = StubState;

        fn init(&self, key: CipherKey) -> StubState {
            StubState { mask: key.0 as u8 }
        }
    }

    #[test]
    fn key_derivation_is_deterministic() {
        let a = StubCipher.derive_key(7, 100);
        let b = StubCipher.derive_key(7, 100);
        assert_eq!(a, b);
        assert_ne!(a, StubCipher.derive_key(8, 100));
    }

    #[test]
    fn transforms_every_byte_in_order() {
        let mut blob = Blob::copy_from_slice(&[0x00, 0x01, 0x02]);
        let key = StubCipher.derive_key(0x55, 1);
        transform_blob(&StubCipher, &mut blob, key).unwrap();
        let mask = key.0 as u8;
        assert_eq!(blob.as_slice(), &[mask, 0x01 ^ mask, 0x02 ^ mask]);
    }

    #[test]
    fn symmetric_double_transform_restores() {
        let original = b"round trip payload";
        let mut blob = Blob::copy_from_slice(original);
        let key = StubCipher.derive_key(42, 16);
        transform_blob(&StubCipher, &mut blob, key).unwrap();
        assert_ne!(blob.as_slice(), original);
        transform_blob(&StubCipher, &mut blob, key).unwrap();
        assert_eq!(blob.as_slice(), original);
    }

    #[test]
    fn views_are_rejected() {
        let data = [1u8, 2, 3];
        let mut view = Blob::view(&data);
        let mut state = StubCipher.init(CipherKey(9));
        assert_eq!(
            transform_in_place(&mut view, &mut state),
            Err(BlobError::ReadOnly)
        );
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn debug_never_prints_key_material() {
        let key = CipherKey(0xDEAD_BEEF);
        assert_eq!(format!("{key:?}"), "CipherKey(..)");
    }
}

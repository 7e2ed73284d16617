//! FNV-1a hashing over byte ranges.
//!
//! Pure, stateless functions: the same input always produces the same
//! hash. Three widths are provided (32, 64, and 128 bits) plus
//! [`fingerprint`], the 64-bit content fingerprint used for blobs.
//!
//! Constants are the published FNV-1a parameters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use radix_blob::Blob;

const FNV32_OFFSET: u32 = 0x811C_9DC5;
const FNV32_PRIME: u32 = 0x0100_0193;

const FNV64_OFFSET: u64 = 0xCBF2_9CE4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01B3;

const FNV128_OFFSET: u128 = 0x6C62_272E_07BB_0142_62B8_2175_6295_C58D;
const FNV128_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013B;

/// 32-bit FNV-1a hash of `data`.
pub fn fnv1a32(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME)
    })
}

/// 64-bit FNV-1a hash of `data`.
pub fn fnv1a64(data: &[u8]) -> u64 {
    data.iter().fold(FNV64_OFFSET, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV64_PRIME)
    })
}

/// 128-bit FNV-1a hash of `data`.
pub fn fnv1a128(data: &[u8]) -> u128 {
    data.iter().fold(FNV128_OFFSET, |hash, &byte| {
        (hash ^ u128::from(byte)).wrapping_mul(FNV128_PRIME)
    })
}

/// 64-bit content fingerprint of a blob.
///
/// Deterministic over the blob's bytes; ownership does not participate,
/// so a view and an owned copy of the same bytes fingerprint identically.
pub fn fingerprint(blob: &Blob<'_>) -> u64 {
    fnv1a64(blob.as_slice())
}

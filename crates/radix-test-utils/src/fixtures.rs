//! List and blob construction helpers.

use radix_blob::Blob;
use radix_list::{List, Side};

/// An owned blob holding a copy of `bytes`.
pub fn owned(bytes: &[u8]) -> Blob<'static> {
    Blob::copy_from_slice(bytes)
}

/// A list holding the given values, left to right.
pub fn list_of(values: &[&[u8]]) -> List {
    let mut list = List::new();
    for v in values {
        list.append_value(Side::Right, &Blob::view(v));
    }
    list
}

/// Every value in the list, head to tail, as byte vectors.
pub fn contents(list: &List) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut cursor = list.cursor();
    while let Some(v) = cursor.value() {
        out.push(v.as_slice().to_vec());
        cursor.advance();
    }
    out
}

//! Slot handles for list nodes.
//!
//! A `NodeId` names a slot in the list's node slab. It is generation-scoped:
//! the generation tag lets debug builds catch a handle that outlived its
//! slot. Handles never leave the crate; the public API speaks in positions.

use std::fmt;

/// Location of a node within the list's slab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId {
    /// Index into the slot vector.
    pub(crate) slot: u32,
    /// Slot generation when this handle was issued.
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(slot={}, gen={})", self.slot, self.generation)
    }
}

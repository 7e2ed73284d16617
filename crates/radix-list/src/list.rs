//! The [`List`] container and its mutation operations.

use radix_blob::Blob;

use crate::cursor::Cursor;
use crate::handle::NodeId;
use crate::query::{ListIndex, Query, QueryResult};

/// Which end of the list an append or concatenation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The head of the list (position 0).
    Left,
    /// The tail of the list (position `len`).
    Right,
}

/// One linked node: an owned value plus the handle of its successor.
pub(crate) struct Node {
    pub(crate) value: Blob<'static>,
    pub(crate) next: Option<NodeId>,
}

/// A slab slot. Retired slots keep their generation bumped so stale
/// handles are detectable in debug builds.
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Internal hit record from a query traversal: handles of the matched
/// node and its neighbours, captured in a single pass.
pub(crate) struct Hit {
    pub(crate) previous: Option<NodeId>,
    pub(crate) current: NodeId,
    pub(crate) next: Option<NodeId>,
    pub(crate) index: usize,
}

/// A singly-linked sequence of owned blob values.
///
/// Values inserted through the API are deep-copied, so the list shares no
/// storage with its callers. Head and tail are tracked for O(1) endpoint
/// appends; every other positional operation walks from the head.
///
/// Invariants: `len == 0` exactly when both head and tail are absent, and
/// following next links from the head visits `len` nodes, the last of
/// which is the tail.
#[derive(Default)]
pub struct List {
    slots: Vec<Slot>,
    free: Vec<u32>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Begin a forward traversal at the head.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    // ---- slab plumbing ----

    fn alloc_node(&mut self, value: Blob<'static>) -> NodeId {
        let node = Node { value, next: None };
        match self.free.pop() {
            Some(slot) => {
                let entry = &mut self.slots[slot as usize];
                entry.node = Some(node);
                NodeId::new(slot, entry.generation)
            }
            None => {
                let slot = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new(slot, 0)
            }
        }
    }

    /// Retire a slot: the value is dropped and the generation advances so
    /// the slot can be recycled without resurrecting old handles.
    fn free_node(&mut self, id: NodeId) {
        let entry = &mut self.slots[id.slot as usize];
        debug_assert_eq!(entry.generation, id.generation, "stale node handle");
        entry.node = None;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.slot);
    }

    fn node(&self, id: NodeId) -> &Node {
        let entry = &self.slots[id.slot as usize];
        debug_assert_eq!(entry.generation, id.generation, "stale node handle");
        entry
            .node
            .as_ref()
            .expect("live handle names an occupied slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        let entry = &mut self.slots[id.slot as usize];
        debug_assert_eq!(entry.generation, id.generation, "stale node handle");
        entry
            .node
            .as_mut()
            .expect("live handle names an occupied slot")
    }

    pub(crate) fn head_id(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub(crate) fn value_of(&self, id: NodeId) -> &Blob<'static> {
        &self.node(id).value
    }

    // ---- lookup ----

    /// Run a query and capture the match with its neighbours.
    ///
    /// Walks a cursor from the head, testing each element until one
    /// satisfies any selected mode. This is the traversal primitive every
    /// positional and value-based lookup builds on.
    pub fn query(&self, query: &Query<'_>) -> QueryResult<'_> {
        match self.locate(query) {
            Some(hit) => QueryResult {
                found: true,
                index: ListIndex::at(hit.index),
                previous: hit.previous.map(|id| self.value_of(id)),
                current: Some(self.value_of(hit.current)),
                next: hit.next.map(|id| self.value_of(id)),
            },
            None => QueryResult::not_found(),
        }
    }

    pub(crate) fn locate(&self, query: &Query<'_>) -> Option<Hit> {
        let mut cursor = self.cursor();
        while let Some(current) = cursor.current_id() {
            if query.matches(self.value_of(current), cursor.index()) {
                return Some(Hit {
                    previous: cursor.previous_id(),
                    current,
                    next: cursor.next_id(),
                    index: cursor.index(),
                });
            }
            cursor.advance();
        }
        None
    }

    fn node_at(&self, position: usize) -> Option<NodeId> {
        self.locate(&Query::by_index(position)).map(|hit| hit.current)
    }

    /// Value at `position`, or `None` when the position is vacant.
    pub fn get(&self, position: usize) -> Option<&Blob<'static>> {
        self.node_at(position).map(|id| self.value_of(id))
    }

    /// Mutable value at `position`, or `None` when the position is vacant.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut Blob<'static>> {
        let id = self.node_at(position)?;
        Some(&mut self.node_mut(id).value)
    }

    /// First value equal to `value` byte-for-byte, if present.
    pub fn find_value(&self, value: &Blob<'_>) -> Option<&Blob<'static>> {
        self.locate(&Query::by_value(value))
            .map(|hit| self.value_of(hit.current))
    }

    /// Whether `position` names an existing element.
    pub fn index_exists(&self, position: usize) -> bool {
        self.node_at(position).is_some()
    }

    /// Whether any element equals `value`.
    pub fn value_exists(&self, value: &Blob<'_>) -> bool {
        self.find_value(value).is_some()
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &Blob<'_>) -> ListIndex {
        match self.locate(&Query::by_value(value)) {
            Some(hit) => ListIndex::at(hit.index),
            None => ListIndex::absent(),
        }
    }

    // ---- mutation ----

    /// Splice a new empty-valued element in at `position`, shifting the
    /// element previously there (and everything after it) one place right.
    ///
    /// `position == 0` makes the new element the head, `position == len`
    /// the tail; both are O(1). Out-of-range positions return `None`,
    /// otherwise the new element's position is returned. Callers are
    /// expected to [`set`](List::set) the value immediately — or use
    /// [`append_value`](List::append_value), which does both.
    pub fn insert_new(&mut self, position: usize) -> Option<usize> {
        if position > self.len {
            return None;
        }
        let id = self.alloc_node(Blob::empty());
        if position == 0 {
            self.node_mut(id).next = self.head;
            self.head = Some(id);
            if self.tail.is_none() {
                self.tail = Some(id);
            }
        } else if position == self.len {
            // position > 0 here, so the list is non-empty.
            let tail = self.tail.expect("non-empty list has a tail");
            self.node_mut(tail).next = Some(id);
            self.tail = Some(id);
        } else {
            let prev = self
                .node_at(position - 1)
                .expect("interior position has a predecessor");
            let old_next = self.node(prev).next;
            self.node_mut(id).next = old_next;
            self.node_mut(prev).next = Some(id);
        }
        self.len += 1;
        Some(position)
    }

    /// Append a new empty-valued element at the given side and return its
    /// position.
    pub fn append(&mut self, side: Side) -> usize {
        let position = match side {
            Side::Left => 0,
            Side::Right => self.len,
        };
        self.insert_new(position)
            .expect("endpoint positions are always in range")
    }

    /// Append a copy of `value` at the given side and return its position.
    pub fn append_value(&mut self, side: Side, value: &Blob<'_>) -> usize {
        let position = self.append(side);
        let set = self.set(position, value);
        debug_assert!(set, "freshly appended position exists");
        position
    }

    /// Replace the value at `position` with a deep copy of `value`.
    ///
    /// The previous value is dropped. Returns `false` (and stores nothing)
    /// when `position` names no element. This is the only path by which an
    /// element acquires a real value.
    pub fn set(&mut self, position: usize, value: &Blob<'_>) -> bool {
        match self.node_at(position) {
            Some(id) => {
                self.node_mut(id).value = value.to_owned_blob();
                true
            }
            None => false,
        }
    }

    /// Exchange the values at two positions.
    ///
    /// The value structs move between the nodes; nothing is copied or
    /// dropped. Returns `false` when either position is vacant.
    pub fn swap(&mut self, p0: usize, p1: usize) -> bool {
        let (a, b) = match (self.node_at(p0), self.node_at(p1)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        if a == b {
            return true;
        }
        let va = std::mem::replace(&mut self.node_mut(a).value, Blob::empty());
        let vb = std::mem::replace(&mut self.node_mut(b).value, va);
        self.node_mut(a).value = vb;
        true
    }

    /// Remove the element at `position`, dropping its value.
    ///
    /// Locates the element through the query mechanism so the unlink has
    /// both neighbours from a single pass. Removing the tail element
    /// re-points the tail at its predecessor. Returns `false` when
    /// `position` names no element.
    pub fn remove(&mut self, position: usize) -> bool {
        let hit = match self.locate(&Query::by_index(position)) {
            Some(hit) => hit,
            None => return false,
        };
        match hit.previous {
            Some(prev) => self.node_mut(prev).next = hit.next,
            None => self.head = hit.next,
        }
        if self.tail == Some(hit.current) {
            self.tail = hit.previous;
        }
        self.free_node(hit.current);
        self.len -= 1;
        true
    }

    /// Drop every element and reset the list to empty.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Append a copy of every element of `src`, head to tail, at the given
    /// side of `self`.
    ///
    /// `src` is not consumed or modified. Note that left-side
    /// concatenation prepends each element in turn, so `src`'s elements
    /// end up reversed relative to each other at the front of `self`.
    pub fn concatenate(&mut self, src: &List, side: Side) {
        let mut cursor = src.cursor();
        while let Some(value) = cursor.value() {
            self.append_value(side, value);
            cursor.advance();
        }
    }
}

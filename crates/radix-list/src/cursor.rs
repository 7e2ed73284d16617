//! Forward-only list traversal with one-step lookahead and lookback.

use radix_blob::Blob;

use crate::handle::NodeId;
use crate::list::List;

/// A stateful, forward-only iterator over a [`List`].
///
/// At every point before exhaustion the cursor's lookahead equals the
/// current element's next link. Advancing past the end first leaves the
/// cursor positioned on nothing, then marks it exhausted; a cursor cannot
/// rewind — construct a fresh one to restart.
pub struct Cursor<'a> {
    list: &'a List,
    current: Option<NodeId>,
    previous: Option<NodeId>,
    next: Option<NodeId>,
    index: usize,
    exhausted: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(list: &'a List) -> Self {
        let current = list.head_id();
        let next = current.and_then(|id| list.next_of(id));
        Self {
            list,
            current,
            previous: None,
            next,
            index: 0,
            exhausted: false,
        }
    }

    /// Value of the current element, or `None` past the end.
    pub fn value(&self) -> Option<&'a Blob<'static>> {
        self.current.map(|id| self.list.value_of(id))
    }

    /// Value of the element one step behind, if any.
    pub fn prev_value(&self) -> Option<&'a Blob<'static>> {
        self.previous.map(|id| self.list.value_of(id))
    }

    /// Value of the element one step ahead, if any.
    pub fn next_value(&self) -> Option<&'a Blob<'static>> {
        self.next.map(|id| self.list.value_of(id))
    }

    /// Index of the current element.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor has advanced past the end of the list.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move one element forward.
    ///
    /// Stepping off the last element leaves the cursor on nothing; the
    /// advance after that marks it exhausted and every further advance is
    /// a no-op.
    pub fn advance(&mut self) {
        match self.current {
            Some(id) => {
                self.previous = Some(id);
                self.current = self.list.next_of(id);
                self.next = self.current.and_then(|c| self.list.next_of(c));
                self.index += 1;
            }
            None => self.exhausted = true,
        }
    }

    pub(crate) fn current_id(&self) -> Option<NodeId> {
        self.current
    }

    pub(crate) fn previous_id(&self) -> Option<NodeId> {
        self.previous
    }

    pub(crate) fn next_id(&self) -> Option<NodeId> {
        self.next
    }
}

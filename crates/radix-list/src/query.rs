//! The query protocol: match modes, query descriptors, and results.

use radix_blob::{Blob, WindowPolicy};

/// Bitset of query match modes.
///
/// Modes OR together: an element matches a query when it satisfies *any*
/// selected mode. Combine with [`QueryModes::union`] or `|`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryModes {
    bits: u8,
}

impl QueryModes {
    /// Match on position: the element's index equals the query's index.
    pub const INDEX: QueryModes = QueryModes { bits: 1 };
    /// Match on exact value equality.
    pub const VALUE: QueryModes = QueryModes { bits: 1 << 1 };
    /// Match when the element's value contains the query value within a
    /// sliding window.
    pub const VALUE_CONTAINS: QueryModes = QueryModes { bits: 1 << 2 };

    /// The empty mode set. Matches nothing.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Union of two mode sets.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Whether every mode in `other` is selected in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Whether no mode is selected.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl std::ops::BitOr for QueryModes {
    type Output = QueryModes;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// What to search the list for.
///
/// A query carries all three mode payloads; only those named by `modes`
/// participate in matching. Construct via the targeted helpers
/// ([`Query::by_index`], [`Query::by_value`], [`Query::by_containment`])
/// or the general [`Query::new`] for combined-mode searches.
#[derive(Clone, Copy, Debug)]
pub struct Query<'q> {
    modes: QueryModes,
    value: Option<&'q Blob<'q>>,
    index: usize,
    window: usize,
    policy: WindowPolicy,
}

impl<'q> Query<'q> {
    /// General constructor selecting any combination of modes.
    ///
    /// `value` may be `None` when no value-based mode is selected;
    /// value-based modes silently never match without a target value.
    pub fn new(
        modes: QueryModes,
        value: Option<&'q Blob<'q>>,
        index: usize,
        window: usize,
        policy: WindowPolicy,
    ) -> Self {
        Self {
            modes,
            value,
            index,
            window,
            policy,
        }
    }

    /// Match the element at `index`.
    pub fn by_index(index: usize) -> Query<'static> {
        Query {
            modes: QueryModes::INDEX,
            value: None,
            index,
            window: 0,
            policy: WindowPolicy::Exact,
        }
    }

    /// Match the first element whose value equals `value` byte-for-byte.
    pub fn by_value(value: &'q Blob<'q>) -> Self {
        Self {
            modes: QueryModes::VALUE,
            value: Some(value),
            index: 0,
            window: 0,
            policy: WindowPolicy::Exact,
        }
    }

    /// Match the first element whose value contains `value` within a
    /// sliding `window`-byte window under `policy`.
    pub fn by_containment(value: &'q Blob<'q>, window: usize, policy: WindowPolicy) -> Self {
        Self {
            modes: QueryModes::VALUE_CONTAINS,
            value: Some(value),
            index: 0,
            window,
            policy,
        }
    }

    /// Evaluate this query against one element.
    pub(crate) fn matches(&self, value: &Blob<'_>, index: usize) -> bool {
        if self.modes.contains(QueryModes::INDEX) && index == self.index {
            return true;
        }
        if let Some(target) = self.value {
            if self.modes.contains(QueryModes::VALUE) && value == target {
                return true;
            }
            if self.modes.contains(QueryModes::VALUE_CONTAINS)
                && value.contains(target, self.window, self.policy)
            {
                return true;
            }
        }
        false
    }
}

/// A search outcome: presence plus a position.
///
/// Reports "found at position P" versus "not found" without a separate
/// error channel. Check [`ListIndex::found`] before reading the position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListIndex {
    present: bool,
    index: usize,
}

impl ListIndex {
    pub(crate) fn at(index: usize) -> Self {
        Self {
            present: true,
            index,
        }
    }

    pub(crate) fn absent() -> Self {
        Self {
            present: false,
            index: 0,
        }
    }

    /// Whether the search succeeded.
    pub fn found(&self) -> bool {
        self.present
    }

    /// The matched position. Reading the position of an absent index is a
    /// contract violation; debug builds assert on it.
    pub fn position(&self) -> usize {
        debug_assert!(self.present, "position read from an absent ListIndex");
        self.index
    }
}

/// Result of running a [`Query`] against a list.
///
/// Captures the matched element and both neighbors at match time, so a
/// caller that needs them (deletion, insertion-adjacent-to-match) avoids a
/// second traversal. All references borrow the list's storage.
#[derive(Debug)]
pub struct QueryResult<'a> {
    pub(crate) found: bool,
    pub(crate) index: ListIndex,
    pub(crate) previous: Option<&'a Blob<'static>>,
    pub(crate) current: Option<&'a Blob<'static>>,
    pub(crate) next: Option<&'a Blob<'static>>,
}

impl<'a> QueryResult<'a> {
    pub(crate) fn not_found() -> Self {
        Self {
            found: false,
            index: ListIndex::absent(),
            previous: None,
            current: None,
            next: None,
        }
    }

    /// Whether the query matched any element.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Position of the match.
    pub fn index(&self) -> ListIndex {
        self.index
    }

    /// Value of the element before the match, if any.
    pub fn previous(&self) -> Option<&'a Blob<'static>> {
        self.previous
    }

    /// Value of the matched element, `None` when not found.
    pub fn current(&self) -> Option<&'a Blob<'static>> {
        self.current
    }

    /// Value of the element after the match, if any.
    pub fn next(&self) -> Option<&'a Blob<'static>> {
        self.next
    }
}

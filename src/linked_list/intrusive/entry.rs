use core::fmt;
use core::marker::PhantomPinned;
use core::ptr::NonNull;

/// Link state of a [`ListEntry`].
///
/// `Unlinked` replaces the classic "entry points to itself" sentinel, so an
/// unlinked entry stays valid when the containing value is moved. A linked
/// entry at a list boundary has `None` on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Linkage {
    Unlinked,
    Linked {
        prev: Option<NonNull<ListEntry>>,
        next: Option<NonNull<ListEntry>>,
    },
}

/// The link embedded in every value that can be put in a
/// [`LinkedList`](super::list::LinkedList).
///
/// An entry is either unlinked or linked into exactly one list. Once linked it
/// must not move until it has been removed again.
pub struct ListEntry {
    linkage: Linkage,
    // Entries are aliased through raw pointers from their neighbors.
    _pin: PhantomPinned,
}

impl ListEntry {
    /// Creates a new, unlinked entry.
    pub const fn new() -> Self {
        Self {
            linkage: Linkage::Unlinked,
            _pin: PhantomPinned,
        }
    }

    /// Puts the entry into the unlinked state.
    ///
    /// Re-initializing an entry that is still linked corrupts the list it is
    /// in, which is caught by a debug assertion.
    pub fn init(&mut self) {
        debug_assert!(!self.is_linked(), "re-initializing a linked list entry");
        self.linkage = Linkage::Unlinked;
    }

    /// Returns `true` if the entry is currently part of a list.
    #[inline]
    pub fn is_linked(&self) -> bool {
        matches!(self.linkage, Linkage::Linked { .. })
    }

    /// The following entry, or `None` if unlinked or last in its list.
    #[inline]
    pub fn next(&self) -> Option<NonNull<ListEntry>> {
        match self.linkage {
            Linkage::Linked { next, .. } => next,
            Linkage::Unlinked => None,
        }
    }

    /// The preceding entry, or `None` if unlinked or first in its list.
    #[inline]
    pub fn prev(&self) -> Option<NonNull<ListEntry>> {
        match self.linkage {
            Linkage::Linked { prev, .. } => prev,
            Linkage::Unlinked => None,
        }
    }

    /// Both neighbors, or `None` if the entry is unlinked.
    #[inline]
    pub(crate) fn neighbors(&self) -> Option<(Option<NonNull<ListEntry>>, Option<NonNull<ListEntry>>)> {
        match self.linkage {
            Linkage::Linked { prev, next } => Some((prev, next)),
            Linkage::Unlinked => None,
        }
    }

    #[inline]
    pub(crate) fn link(&mut self, prev: Option<NonNull<ListEntry>>, next: Option<NonNull<ListEntry>>) {
        self.linkage = Linkage::Linked { prev, next };
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<ListEntry>>) {
        match &mut self.linkage {
            Linkage::Linked { next: slot, .. } => *slot = next,
            Linkage::Unlinked => unreachable!("setting the next link of an unlinked entry"),
        }
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<NonNull<ListEntry>>) {
        match &mut self.linkage {
            Linkage::Linked { prev: slot, .. } => *slot = prev,
            Linkage::Unlinked => unreachable!("setting the prev link of an unlinked entry"),
        }
    }

    /// Unconditionally drops the links, used once the neighbors have been
    /// fixed up.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.linkage = Linkage::Unlinked;
    }
}

impl Default for ListEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.linkage {
            Linkage::Unlinked => f.write_str("ListEntry(unlinked)"),
            Linkage::Linked { prev, next } => f
                .debug_struct("ListEntry")
                .field("self", &(self as *const Self))
                .field("prev", &prev)
                .field("next", &next)
                .finish(),
        }
    }
}

unsafe impl Send for ListEntry {}
unsafe impl Sync for ListEntry {}

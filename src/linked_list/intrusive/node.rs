use sundry_derive::Linked;

use super::entry::ListEntry;

/// A ready-made list element: a [`ListEntry`] next to a value.
///
/// Types that need the entry next to several fields of their own can derive
/// [`Linked`](super::traits::Linked) instead.
#[derive(Debug, Linked)]
#[linked(crate_path = "crate")]
pub struct ListNode<T> {
    entry: ListEntry,
    data: T,
}

impl<T> ListNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            entry: ListEntry::new(),
            data,
        }
    }

    /// Returns `true` if the node is currently part of a list.
    #[inline]
    pub fn is_linked(&self) -> bool {
        self.entry.is_linked()
    }

    /// Consumes the node and returns its value.
    pub fn into_inner(self) -> T {
        debug_assert!(!self.is_linked(), "consuming a node that is still linked");
        self.data
    }
}

impl<T: Default> Default for ListNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

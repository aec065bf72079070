use core::marker::PhantomData;
use core::ptr::NonNull;

use tracing::trace;

use super::{entry::ListEntry, iter::Iter, traits::Linked};

/// An intrusive doubly linked list.
///
/// The list only stores pointers to the first and last entry; every other
/// link lives inside the elements themselves. It never allocates or frees.
pub struct LinkedList<T: Linked> {
    first: Option<NonNull<ListEntry>>,
    last: Option<NonNull<ListEntry>>,
    count: usize,
    _marker: PhantomData<NonNull<T>>,
}

impl<T> LinkedList<T>
where
    T: Linked,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            first: None,
            last: None,
            count: 0,
            _marker: PhantomData,
        }
    }

    /// Resets the list to empty.
    ///
    /// Must not be called while entries are still linked into it.
    pub fn init(&mut self) {
        debug_assert!(self.is_empty(), "re-initializing a non-empty list");
        self.first = None;
        self.last = None;
        self.count = 0;
    }

    /// Check if the linked list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(
            self.first.is_none(),
            self.last.is_none(),
            "inconsistent state: a list end is missing"
        );
        self.first.is_none()
    }

    /// Get the number of nodes in the linked list
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// The first node, or `None` if the list is empty.
    #[inline]
    pub fn first(&self) -> Option<NonNull<T>> {
        debug_assert_eq!(self.first.is_none(), self.last.is_none());
        self.first.map(|e| unsafe { T::from_entry(e) })
    }

    /// The last node, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<NonNull<T>> {
        debug_assert_eq!(self.first.is_none(), self.last.is_none());
        self.last.map(|e| unsafe { T::from_entry(e) })
    }

    /// The node after `node`, or `None` if `node` is unlinked or last.
    ///
    /// # Safety
    ///
    /// `node` must point to a live value that is either unlinked or linked
    /// into this list.
    #[inline]
    pub unsafe fn next(&self, node: NonNull<T>) -> Option<NonNull<T>> {
        unsafe {
            let entry = T::entry(node);
            (*entry.as_ptr()).next().map(|e| T::from_entry(e))
        }
    }

    /// The node before `node`, or `None` if `node` is unlinked or first.
    ///
    /// # Safety
    ///
    /// Same as [`LinkedList::next`].
    #[inline]
    pub unsafe fn prev(&self, node: NonNull<T>) -> Option<NonNull<T>> {
        unsafe {
            let entry = T::entry(node);
            (*entry.as_ptr()).prev().map(|e| T::from_entry(e))
        }
    }

    /// Links `node` in as the new first element.
    ///
    /// # Safety
    ///
    /// `node` must point to a live, unlinked value that stays at the same
    /// address, and is not freed, until it has been removed from this list.
    pub unsafe fn prepend(&mut self, node: NonNull<T>) {
        unsafe {
            let entry = T::entry(node);
            debug_assert!(
                !(*entry.as_ptr()).is_linked(),
                "prepending an entry that is already linked"
            );

            match self.first {
                None => {
                    debug_assert!(self.last.is_none());
                    self.last = Some(entry);
                }
                Some(first) => {
                    debug_assert!(self.last.is_some());
                    (*first.as_ptr()).set_prev(Some(entry));
                }
            }

            (*entry.as_ptr()).link(None, self.first);
            self.first = Some(entry);
            self.count += 1;
        }
    }

    /// Links `node` in as the new last element.
    ///
    /// # Safety
    ///
    /// Same as [`LinkedList::prepend`].
    pub unsafe fn append(&mut self, node: NonNull<T>) {
        unsafe {
            let entry = T::entry(node);
            debug_assert!(
                !(*entry.as_ptr()).is_linked(),
                "appending an entry that is already linked"
            );

            match self.last {
                None => {
                    debug_assert!(self.first.is_none());
                    self.first = Some(entry);
                }
                Some(last) => {
                    debug_assert!(self.first.is_some());
                    (*last.as_ptr()).set_next(Some(entry));
                }
            }

            (*entry.as_ptr()).link(self.last, None);
            self.last = Some(entry);
            self.count += 1;
        }
    }

    /// Unlinks `node` from the list and returns it.
    ///
    /// Removing a node that is not linked is a no-op and returns `None`, so
    /// callers do not need to track linkage themselves.
    ///
    /// # Safety
    ///
    /// `node` must point to a live value that is either unlinked or linked
    /// into this list (not into another one).
    pub unsafe fn remove(&mut self, node: NonNull<T>) -> Option<NonNull<T>> {
        unsafe {
            let entry = T::entry(node);
            let Some((prev, next)) = (*entry.as_ptr()).neighbors() else {
                trace!(entry = ?entry, "removing an unlinked entry, nothing to do");
                return None;
            };

            debug_assert!(self.first.is_some() && self.last.is_some());

            match prev {
                None => {
                    debug_assert_eq!(self.first, Some(entry), "entry is not linked into this list");
                    self.first = next;
                }
                Some(prev) => (*prev.as_ptr()).set_next(next),
            }

            match next {
                None => {
                    debug_assert_eq!(self.last, Some(entry), "entry is not linked into this list");
                    self.last = prev;
                }
                Some(next) => (*next.as_ptr()).set_prev(prev),
            }

            (*entry.as_ptr()).reset();
            self.count -= 1;
            Some(node)
        }
    }

    /// Unlinks and returns the first node.
    pub fn pop_front(&mut self) -> Option<NonNull<T>> {
        let first = self.first()?;
        unsafe { self.remove(first) }
    }

    /// Unlinks and returns the last node.
    pub fn pop_back(&mut self) -> Option<NonNull<T>> {
        let last = self.last()?;
        unsafe { self.remove(last) }
    }

    /// Unlinks every node, leaving each one in the unlinked state.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Iterate over the nodes from first to last; use `.rev()` for the
    /// opposite direction.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.first, self.last, self.count)
    }

    /// Asserts as many of the linked list's invariants as possible.
    pub fn assert_valid(&self) {
        let Some(first) = self.first else {
            assert!(
                self.last.is_none(),
                "if the linked list's first entry is missing, the last must be too"
            );
            assert_eq!(self.count, 0, "an empty list must have a count of zero");
            return;
        };
        let last = self
            .last
            .expect("if the linked list has a first entry, it must also have a last one");

        unsafe {
            assert_eq!((*first.as_ptr()).prev(), None, "the first entry must not have a prev link");
            assert_eq!((*last.as_ptr()).next(), None, "the last entry must not have a next link");

            let mut steps = 0;
            let mut prev = None;
            let mut current = Some(first);
            while let Some(entry) = current {
                let entry_ref = &*entry.as_ptr();
                assert!(entry_ref.is_linked(), "entry in a list must be linked");
                assert_eq!(entry_ref.prev(), prev, "prev link does not match forward walk");
                steps += 1;
                assert!(steps <= self.count, "forward walk is longer than the list count");
                prev = Some(entry);
                current = entry_ref.next();
            }

            assert_eq!(prev, Some(last), "forward walk must end at the last entry");
            assert_eq!(steps, self.count, "forward walk must visit every entry");
        }
    }
}

impl<T> Default for LinkedList<T>
where
    T: Linked,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for LinkedList<T>
where
    T: Linked,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinkedList")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("count", &self.count)
            .finish()
    }
}

unsafe impl<T: Linked + Send> Send for LinkedList<T> {}
unsafe impl<T: Linked + Sync> Sync for LinkedList<T> {}

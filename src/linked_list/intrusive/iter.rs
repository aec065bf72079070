use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{entry::ListEntry, list::LinkedList, traits::Linked};

/// An iterator over a linked list.
///
/// Borrows the list, so the list cannot be modified while the iterator is
/// alive.
pub struct Iter<'a, T: Linked> {
    front: Option<NonNull<ListEntry>>,
    back: Option<NonNull<ListEntry>>,
    remaining: usize,
    _list: PhantomData<&'a LinkedList<T>>,
}

impl<'a, T> Iter<'a, T>
where
    T: Linked,
{
    pub(crate) fn new(
        front: Option<NonNull<ListEntry>>,
        back: Option<NonNull<ListEntry>>,
        remaining: usize,
    ) -> Self {
        Self {
            front,
            back,
            remaining,
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Linked,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front?;
        self.remaining -= 1;
        unsafe {
            self.front = (*current.as_ptr()).next();
            Some(T::from_entry(current))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T>
where
    T: Linked,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back?;
        self.remaining -= 1;
        unsafe {
            self.back = (*current.as_ptr()).prev();
            Some(T::from_entry(current))
        }
    }
}

impl<'a, T: Linked> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Linked> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T>
where
    T: Linked,
{
    type Item = NonNull<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

unsafe impl<'a, T> Send for Iter<'a, T> where T: Linked + Sync {}

unsafe impl<'a, T> Sync for Iter<'a, T> where T: Linked + Sync {}

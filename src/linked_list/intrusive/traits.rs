use core::ptr::NonNull;

use super::entry::ListEntry;

/// A type that embeds a [`ListEntry`] and can therefore be linked into a
/// [`LinkedList`](super::list::LinkedList).
///
/// Usually implemented through `#[derive(Linked)]`.
///
/// # Safety
///
/// `entry` and `from_entry` must be exact inverses: `entry` returns a pointer
/// to a `ListEntry` stored inside the pointed-to value, and `from_entry`
/// recovers the containing value from that same pointer.
pub unsafe trait Linked {
    /// Get a pointer to the entry embedded in `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live value of `Self`.
    unsafe fn entry(ptr: NonNull<Self>) -> NonNull<ListEntry>;

    /// Get the containing value from a pointer to its embedded entry.
    ///
    /// # Safety
    ///
    /// `entry` must have been obtained from [`Linked::entry`] on a live value.
    unsafe fn from_entry(entry: NonNull<ListEntry>) -> NonNull<Self>;
}

/// A trait for a node that contains data.
pub trait NodeWithData: Linked {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}

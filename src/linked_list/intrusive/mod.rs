//! # Intrusive Linked List
//!
//! This module provides an implementation of an intrusive doubly linked list.
//!
//! ## Core Components
//!
//! - [`entry::ListEntry`]: The link embedded in every element.
//! - [`traits::Linked`]: Maps an element to its embedded entry and back. Derive it with
//!   `#[derive(Linked)]`.
//! - [`list::LinkedList`]: The list head, holding the first and last entry.
//! - [`node::ListNode`]: A generic element wrapping a value next to its entry.
//! - [`iter::Iter`]: Forward and backward traversal.
//!
//! ## Safety
//!
//! The list works on raw pointers and never owns its elements. The user of this
//! module is responsible for upholding several invariants:
//!
//! - A linked element must not move and must outlive its membership in the list.
//! - An element must not be in two lists at the same time.
//! - When removing an element, it must be unlinked or linked into that same list.
//!
//! The list has no internal synchronization; share it between threads behind a lock.

pub mod traits;
pub mod entry;
pub mod node;
pub mod list;
pub mod iter;

pub use entry::ListEntry;
pub use list::LinkedList;
pub use node::ListNode;
pub use sundry_derive::Linked;
pub use traits::{Linked, NodeWithData};

#[cfg(test)]
mod tests;

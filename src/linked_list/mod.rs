//! An intrusive linked list implementation.
//!
//! In an intrusive linked list, the links are stored directly in the data structure
//! that is being linked. This means that the data structure must have a field that
//! is a `ListEntry`. This is in contrast to a non-intrusive linked list, where the
//! nodes are allocated separately from the data structure.
//!
//! # Examples
//!
//! ```
//! use sundry::linked_list::intrusive::{LinkedList, Linked, ListEntry};
//! use core::ptr::NonNull;
//!
//! #[derive(Linked)]
//! struct Job {
//!     id: u32,
//!     entry: ListEntry,
//! }
//!
//! let mut queue = LinkedList::<Job>::new();
//! let mut a = Job { id: 1, entry: ListEntry::new() };
//! let mut b = Job { id: 2, entry: ListEntry::new() };
//! let mut c = Job { id: 3, entry: ListEntry::new() };
//!
//! unsafe {
//!     queue.append(NonNull::from(&mut b));
//!     queue.append(NonNull::from(&mut c));
//!     queue.prepend(NonNull::from(&mut a));
//! }
//! assert_eq!(queue.len(), 3);
//!
//! let ids: Vec<u32> = queue.iter().map(|job| unsafe { job.as_ref().id }).collect();
//! assert_eq!(ids, vec![1, 2, 3]);
//!
//! unsafe { queue.remove(NonNull::from(&mut b)) };
//! let ids: Vec<u32> = queue.iter().rev().map(|job| unsafe { job.as_ref().id }).collect();
//! assert_eq!(ids, vec![3, 1]);
//! assert!(!b.entry.is_linked());
//!
//! queue.clear();
//! ```
pub mod intrusive;

//! Embeddable low-level primitives: an intrusive doubly linked list, an atomic
//! reference counter, and a handful of bit, integer, string and time helpers.
//!
//! The crate is `no_std`. The default `std` feature adds the helpers that
//! talk to the operating system ([`usec::from_clock`] and the `sys` module on
//! Linux).

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bitmap;
pub mod error;
pub mod linked_list;
pub mod math;
pub mod refcount;
pub mod string;
#[cfg(all(feature = "std", target_os = "linux"))]
pub mod sys;
pub mod usec;

pub use error::{Error, Result};

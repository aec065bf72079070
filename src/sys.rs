//! Thin wrappers around Linux system calls that libc does not always expose.

use std::ffi::CStr;
use std::os::fd::OwnedFd;

use nix::unistd::Pid;
use tracing::debug;

use crate::error::{Error, Result};

pub use nix::sys::memfd::MemFdCreateFlag;

/// The kernel thread id of the calling thread.
#[inline]
pub fn gettid() -> Pid {
    nix::unistd::gettid()
}

/// Creates an anonymous, memory-backed file.
///
/// `name` only shows up in `/proc/self/fd` and is not required to be unique.
pub fn memfd_create(name: &CStr, flags: MemFdCreateFlag) -> Result<OwnedFd> {
    nix::sys::memfd::memfd_create(name, flags).map_err(|errno| {
        debug!(?name, %errno, "memfd_create failed");
        Error::from(errno)
    })
}

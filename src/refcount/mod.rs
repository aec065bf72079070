//! # Atomic Reference Counter
//!
//! [`AtomicRef`] is a lock-free counter meant to be embedded in a shared
//! object. References can be acquired and released from any number of
//! threads in parallel; exactly one release observes the drop to zero and is
//! responsible for tearing the object down.
//!
//! Acquiring is relaxed: nobody may base a decision on having acquired a
//! reference. Releasing uses release ordering, and the thread that drops the
//! count to zero additionally runs an acquire fence, so every write made by
//! any former owner is visible to the teardown.
//!
//! ```
//! use sundry::refcount::AtomicRef;
//!
//! static REFS: AtomicRef = AtomicRef::new();
//!
//! REFS.inc();
//! REFS.dec_unreachable();
//!
//! let mut released = false;
//! REFS.dec(|_| released = true);
//! assert!(released);
//! assert!(!REFS.inc_unless_zero());
//! ```

use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering, fence};

use crossbeam_utils::Backoff;
use tracing::trace;


/// Proof that a release dropped the counter to zero.
///
/// Returned to exactly one caller per counter. The acquire fence has already
/// been executed when this is handed out, so the holder may tear down the
/// object the counter belongs to.
#[derive(Debug)]
#[must_use = "the last reference was released; the object must be torn down"]
pub struct Released {
    _private: (),
}

/// An atomic reference counter.
pub struct AtomicRef {
    refs: AtomicUsize,
}

impl AtomicRef {
    /// Value of a freshly initialized counter: the creator's reference.
    pub const INIT: usize = 1;

    /// Creates a counter holding [`AtomicRef::INIT`] references.
    pub const fn new() -> Self {
        Self {
            refs: AtomicUsize::new(Self::INIT),
        }
    }

    /// Acquire `n` references.
    ///
    /// The caller must already own a reference, and `n` must not be zero.
    #[inline]
    pub fn add(&self, n: usize) -> &Self {
        debug_assert!(n > 0, "acquiring zero references");
        // No ordering: acquiring never gates a decision.
        let refs = self.refs.fetch_add(n, Ordering::Relaxed);
        debug_assert!(refs > 0, "acquiring references on a released counter");
        debug_assert!(refs.checked_add(n).is_some(), "reference counter overflow");
        self
    }

    /// Acquire a single reference. See [`AtomicRef::add`].
    #[inline]
    pub fn inc(&self) -> &Self {
        self.add(1)
    }

    /// Acquire `n` references unless the counter already dropped to zero.
    ///
    /// Returns `false` if no reference was acquired. This gives no ordering
    /// guarantees; a failed or successful attempt says nothing about the state
    /// of the surrounding object, which must be synchronized through the
    /// pointer it was reached by.
    #[must_use]
    pub fn add_unless_zero(&self, n: usize) -> bool {
        debug_assert!(n > 0, "acquiring zero references");
        let backoff = Backoff::new();
        let mut refs = self.refs.load(Ordering::Relaxed);
        loop {
            if refs == 0 {
                return false;
            }
            debug_assert!(refs.checked_add(n).is_some(), "reference counter overflow");
            match self.refs.compare_exchange_weak(
                refs,
                refs + n,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(current) => {
                    refs = current;
                    backoff.spin();
                }
            }
        }
    }

    /// Acquire a single reference unless the counter dropped to zero.
    #[must_use]
    #[inline]
    pub fn inc_unless_zero(&self) -> bool {
        self.add_unless_zero(1)
    }

    /// Release `n` references.
    ///
    /// Returns [`Released`] to the single caller whose release dropped the
    /// counter to zero. The caller must own the `n` references it releases.
    pub fn release(&self, n: usize) -> Option<Released> {
        debug_assert!(n > 0, "releasing zero references");
        // Order our stores to the object before giving up the reference; a
        // racing release must see them before it tears the object down.
        let refs = self.refs.fetch_sub(n, Ordering::Release);
        debug_assert!(refs >= n, "releasing more references than owned");
        if refs != n {
            return None;
        }

        fence(Ordering::Acquire);
        trace!(counter = ?(self as *const Self), released = n, "last reference released");
        Some(Released { _private: () })
    }

    /// Release `n` references, running `on_zero` if this dropped the counter
    /// to zero.
    ///
    /// `on_zero` runs exactly once per counter, synchronously on the thread
    /// performing the final release. It must not block indefinitely or
    /// release this counter again.
    #[inline]
    pub fn sub<F>(&self, n: usize, on_zero: F)
    where
        F: FnOnce(&Self),
    {
        if self.release(n).is_some() {
            on_zero(self);
        }
    }

    /// Release a single reference. See [`AtomicRef::sub`].
    #[inline]
    pub fn dec<F>(&self, on_zero: F)
    where
        F: FnOnce(&Self),
    {
        self.sub(1, on_zero)
    }

    /// Release `n` references that are known not to be the last ones.
    ///
    /// # Panics
    ///
    /// Panics if the counter drops to zero.
    #[inline]
    #[track_caller]
    pub fn sub_unreachable(&self, n: usize) {
        if self.release(n).is_some() {
            panic!("released the last reference through sub_unreachable");
        }
    }

    /// Release a single reference that is known not to be the last one.
    #[inline]
    #[track_caller]
    pub fn dec_unreachable(&self) {
        self.sub_unreachable(1)
    }

    /// A relaxed snapshot of the count. Only useful for diagnostics; never
    /// base a decision on it.
    #[inline]
    pub fn get(&self) -> usize {
        self.refs.load(Ordering::Relaxed)
    }
}

impl Default for AtomicRef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AtomicRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicRef").field(&self.get()).finish()
    }
}

//! Page-level scroll suspension shared by every overlay on a page.

use std::{cell::Cell, fmt, rc::Rc};

use tracing::debug;

/// Reference-counted lock on background scrolling.
///
/// Clones share the same counter. Scrolling stays suspended while at least
/// one [`ScrollLockGuard`] is alive.
#[derive(Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.get() + 1;
        self.holders.set(holders);
        debug!(holders, "scroll lock acquired");
        ScrollLockGuard {
            holders: Rc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    pub fn holder_count(&self) -> usize {
        self.holders.get()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders.get())
            .finish()
    }
}

/// One hold on a [`ScrollLock`]; released on drop.
#[must_use = "dropping the guard releases the scroll lock immediately"]
pub struct ScrollLockGuard {
    holders: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.get().saturating_sub(1);
        self.holders.set(holders);
        debug!(holders, "scroll lock released");
    }
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Page-level background scroll suppression.
///
/// Holders acquire a [`ScrollLockGuard`]; the page scrolls again once every
/// guard is dropped. Cloning yields another handle to the same lock.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let previous = self.holders.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::debug!("background scroll locked");
        }
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders.load(Ordering::Acquire) > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// Keeps the page from scrolling for as long as it is alive.
#[derive(Debug)]
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let previous = self.holders.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("background scroll restored");
        }
    }
}

//! In-flight indicators for suspending operations (generation, export).
//!
//! A flag is raised by `try_begin` and lowered when the returned guard drops,
//! so every exit path resets it: success, error, early return, or the request
//! future being dropped.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct PendingFlag {
    active: AtomicBool,
}

impl PendingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Raises the flag. Returns `None` if it is already raised.
    pub fn try_begin(&self) -> Option<PendingGuard<'_>> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard { flag: &self.active })
    }
}

#[must_use = "the flag is lowered as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lowers_flag_on_drop() {
        let flag = PendingFlag::new();
        assert!(!flag.is_active());
        {
            let _guard = flag.try_begin().unwrap();
            assert!(flag.is_active());
        }
        assert!(!flag.is_active());
    }

    #[test]
    fn test_second_begin_is_refused_while_active() {
        let flag = PendingFlag::new();
        let guard = flag.try_begin();
        assert!(guard.is_some());
        assert!(flag.try_begin().is_none());
        drop(guard);
        assert!(flag.try_begin().is_some());
    }

    #[test]
    fn test_flag_resets_when_work_fails() {
        let flag = PendingFlag::new();
        let result: Result<(), &str> = (|| {
            let _guard = flag.try_begin().ok_or("busy")?;
            Err("construction failed")
        })();
        assert!(result.is_err());
        assert!(!flag.is_active());
    }
}

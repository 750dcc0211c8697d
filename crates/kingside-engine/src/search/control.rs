//! Cooperative stop flag shared between a search and its owner.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tells a running search to stop.
///
/// Cloning shares the same flag. The search checks it once per node and
/// unwinds with [`SearchError::Cancelled`](crate::SearchError::Cancelled)
/// when it is set.
#[derive(Debug, Clone, Default)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
}

impl SearchControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchControl;

    #[test]
    fn clones_share_the_flag() {
        let control = SearchControl::new();
        let observer = control.clone();
        assert!(!observer.is_stopped());
        control.stop();
        assert!(observer.is_stopped());
    }
}

//! Cooperative cancellation for long-running pipeline work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked between layer fetches and between subtractions.
///
/// Clones observe the same flag. Once cancelled it stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns [`BathymetryError::Cancelled`](crate::BathymetryError::Cancelled)
    /// if the flag is set.
    pub fn check(&self) -> crate::Result<()> {
        if self.is_cancelled() {
            Err(crate::BathymetryError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = CancelFlag::new();
        let observer = flag.clone();
        assert!(observer.check().is_ok());
        flag.cancel();
        assert!(observer.is_cancelled());
        assert!(matches!(observer.check(), Err(crate::BathymetryError::Cancelled)));
    }
}

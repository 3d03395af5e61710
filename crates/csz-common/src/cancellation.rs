//! Cooperative cancellation.
//!
//! Long-running analysis observes a shared flag between units of work.
//! Context predicates themselves are pure and never block, so they take
//! no token; only the analyzer driver checks one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Error returned when an operation observes a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationCanceled;

impl std::fmt::Display for OperationCanceled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("operation canceled")
    }
}

impl std::error::Error for OperationCanceled {}

/// A cloneable cancellation flag. Cloned tokens share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that can never be canceled.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Return `Err(OperationCanceled)` if cancellation has been requested.
    pub fn check(&self) -> Result<(), OperationCanceled> {
        if self.is_canceled() {
            Err(OperationCanceled)
        } else {
            Ok(())
        }
    }
}

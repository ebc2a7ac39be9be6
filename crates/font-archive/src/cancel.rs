use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Shared flag that stops fetches which have not started yet.
///
/// Clones observe the same flag. Requests already in flight run until they
/// finish or hit the fetcher's timeout.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

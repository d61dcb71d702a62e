use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Signal handlers only call `cancel`; the
/// converter polls `is_cancelled` between chunks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Notified after every chunk has been encoded.
pub trait ChunkObserver {
    /// `index` is 1-based.
    fn chunk_written(&mut self, index: u64, count: u64);
}

impl ChunkObserver for () {
    fn chunk_written(&mut self, _index: u64, _count: u64) {}
}

use crate::shared::infrastructure::offline_cache::OfflineCache;
use std::cell::Cell;

/// Counts registrations instead of installing anything.
#[derive(Debug, Default)]
pub struct RecordingOfflineCache {
    registrations: Cell<usize>,
}

impl RecordingOfflineCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registrations(&self) -> usize {
        self.registrations.get()
    }
}

impl OfflineCache for RecordingOfflineCache {
    fn register(&self) {
        self.registrations.set(self.registrations.get() + 1);
    }
}

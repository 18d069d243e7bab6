use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use uuid::Uuid;

/// Source of fresh node identifiers
///
/// Every call must return an id distinct from every id this allocator has
/// returned before. Allocation never fails.
pub trait IdAllocator: Send + Sync {
    fn allocate(&self) -> String;
}

impl<T: IdAllocator + ?Sized> IdAllocator for &T {
    fn allocate(&self) -> String {
        (**self).allocate()
    }
}

impl<T: IdAllocator + ?Sized> IdAllocator for Arc<T> {
    fn allocate(&self) -> String {
        (**self).allocate()
    }
}

/// Sequential id generator with a random per-instance seed
///
/// Ids look like `{seed}-{count}`. The counter makes ids distinct within one
/// generator; the v4 UUID seed makes ids from different generators (and
/// different processes) collide with negligible probability.
#[derive(Debug)]
pub struct IdGenerator {
    seed: String,
    count: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::from_seed(Uuid::new_v4().simple().to_string())
    }

    /// Deterministic generator, for tests and reproducible fixtures
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: AtomicU64::new(0),
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for IdGenerator {
    fn allocate(&self) -> String {
        let count = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.seed, count)
    }
}

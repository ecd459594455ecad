use crate::Result;
use fxhash::FxBuildHasher;
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Composite cache key: namespace prefix, height and (for delay tables) speed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimelineKey {
    prefix: String,
    height: u32,
    speed_bits: Option<u64>,
}

impl TimelineKey {
    /// Key of a step sequence
    pub fn steps(prefix: &str, height: u32) -> Self {
        Self {
            prefix: prefix.to_string(),
            height,
            speed_bits: None,
        }
    }

    /// Key of a delay table. Speeds compare bit-for-bit.
    pub fn delays(prefix: &str, height: u32, speed: f64) -> Self {
        Self {
            prefix: prefix.to_string(),
            height,
            speed_bits: Some(speed.to_bits()),
        }
    }

    pub fn speed(&self) -> Option<f64> {
        self.speed_bits.map(f64::from_bits)
    }
}

impl fmt::Display for TimelineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.speed() {
            Some(speed) => write!(f, "{}{}_{}", self.prefix, self.height, speed),
            None => write!(f, "{}{}", self.prefix, self.height),
        }
    }
}

/// A memoized sequence, shared by every caller asking for the same key
#[derive(Debug, Clone)]
pub enum CachedSequence {
    Steps(Arc<[u32]>),
    Delays(Arc<[f64]>),
}

/// Memoization store for step sequences and delay tables.
///
/// Clones share the same storage. Values are computed while the lock is held, so
/// two threads asking for the same key never both compute it. The default store
/// never evicts; [`TimelineCache::bounded`] caps it with LRU eviction for hosts
/// that feed it arbitrary parameters.
pub struct TimelineCache {
    cache: Arc<Mutex<LruCache<TimelineKey, CachedSequence, FxBuildHasher>>>,
}

impl TimelineCache {
    /// Create a cache that keeps every entry for its whole lifetime
    pub fn new() -> Self {
        Self {
            cache: Arc::new(Mutex::new(LruCache::unbounded_with_hasher(
                FxBuildHasher::default(),
            ))),
        }
    }

    /// Create a cache holding at most `capacity` sequences (at least one)
    pub fn bounded(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Arc::new(Mutex::new(LruCache::with_hasher(
                capacity,
                FxBuildHasher::default(),
            ))),
        }
    }

    /// Step sequence for `key`, computing and storing it with `compute` on a miss
    pub fn steps_or_insert_with<F>(&self, key: TimelineKey, compute: F) -> Arc<[u32]>
    where
        F: FnOnce() -> Vec<u32>,
    {
        let mut cache = self.lock();
        if let Some(CachedSequence::Steps(steps)) = cache.get(&key) {
            log::trace!("timeline cache hit: {}", key);
            return Arc::clone(steps);
        }

        log::debug!("timeline cache miss: {}", key);
        let steps: Arc<[u32]> = compute().into();
        cache.put(key, CachedSequence::Steps(Arc::clone(&steps)));
        steps
    }

    /// Delay table for `key`, computing and storing it with `compute` on a miss.
    ///
    /// A failed computation stores nothing and its error is returned as is.
    pub fn delays_or_try_insert_with<F>(&self, key: TimelineKey, compute: F) -> Result<Arc<[f64]>>
    where
        F: FnOnce() -> Result<Vec<f64>>,
    {
        let mut cache = self.lock();
        if let Some(CachedSequence::Delays(delays)) = cache.get(&key) {
            log::trace!("timeline cache hit: {}", key);
            return Ok(Arc::clone(delays));
        }

        log::debug!("timeline cache miss: {}", key);
        let delays: Arc<[f64]> = compute()?.into();
        cache.put(key, CachedSequence::Delays(Arc::clone(&delays)));
        Ok(delays)
    }

    /// Look up a sequence without computing anything
    pub fn get(&self, key: &TimelineKey) -> Option<CachedSequence> {
        self.lock().get(key).cloned()
    }

    pub fn contains(&self, key: &TimelineKey) -> bool {
        self.lock().contains(key)
    }

    /// Drop every memoized sequence
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, `None` for a cache that never evicts
    pub fn capacity(&self) -> Option<usize> {
        let cap = self.lock().cap().get();
        (cap != usize::MAX).then_some(cap)
    }

    // Entries are immutable once stored, so a panic elsewhere cannot leave them torn
    fn lock(&self) -> MutexGuard<'_, LruCache<TimelineKey, CachedSequence, FxBuildHasher>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clone for TimelineCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl Default for TimelineCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimelineCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

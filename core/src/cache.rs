use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Explicitly constructed, injectable cache with per-entry TTL and a bounded
/// entry count. Replaces the module-scope travel-time and locale caches of
/// the legacy client.
pub struct TtlCache<K, V> {
    entries: DashMap<K, CacheEntry<V>>,
    ttl: Duration,
    max_entries: usize,
}

struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries: max_entries.max(1),
        }
    }

    /// Returns a clone of the cached value, dropping it if it has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            if entry.inserted_at.elapsed() <= self.ttl {
                return Some(entry.value.clone());
            }
        }
        self.entries.remove(key);
        None
    }

    pub fn insert(&self, key: K, value: V) {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.evict_one();
        }
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops expired entries first; if the cache is still full, drops the
    /// oldest entry.
    fn evict_one(&self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| entry.inserted_at.elapsed() <= ttl);
        if self.entries.len() < self.max_entries {
            return;
        }
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().inserted_at)
            .map(|entry| entry.key().clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

/// Key for cached travel-time lookups between a referee's address and a venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TravelTimeKey {
    pub origin: String,
    pub destination: String,
}

/// Travel times in minutes, keyed by origin/destination pair.
pub type TravelTimeCache = TtlCache<TravelTimeKey, u32>;

const TRAVEL_TIME_TTL: Duration = Duration::from_secs(60 * 60);
const TRAVEL_TIME_MAX_ENTRIES: usize = 256;

pub fn travel_time_cache() -> TravelTimeCache {
    TtlCache::new(TRAVEL_TIME_TTL, TRAVEL_TIME_MAX_ENTRIES)
}

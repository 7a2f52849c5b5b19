use hashbrown::HashMap as FastHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

use crate::types::Segments;

pub const DEFAULT_CACHE_CAPACITY: usize = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvictionPolicy {
    /// When full, drop the oldest half of the entries in one pass.
    #[default]
    Bulk,
    /// When full, drop the single least recently used entry.
    Lru,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Bounded memo of path string to segment list.
///
/// Every live entry carries a stamp; `order` holds `(key, stamp)` records,
/// oldest at the front. A record whose stamp no longer matches the map is
/// stale and skipped. `Bulk` never restamps, so its order is insertion
/// order; `Lru` restamps on every hit and appends a fresh record.
#[derive(Debug)]
pub struct SegmentCache {
    capacity: usize,
    policy: EvictionPolicy,
    map: FastHashMap<Arc<str>, CacheEntry>,
    order: VecDeque<(Arc<str>, u64)>,
    next_stamp: u64,
    hits: u64,
    misses: u64,
}

#[derive(Debug)]
struct CacheEntry {
    segments: Segments,
    stamp: u64,
}

impl SegmentCache {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            capacity,
            policy,
            map: FastHashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            next_stamp: 0,
            hits: 0,
            misses: 0,
        }
    }

    pub fn get(&mut self, path: &str) -> Option<Segments> {
        let stamp = self.next_stamp;
        let Some((key, entry)) = self.map.get_key_value_mut(path) else {
            self.misses += 1;
            return None;
        };

        self.hits += 1;
        let found = entry.segments.clone();
        if self.policy == EvictionPolicy::Lru {
            entry.stamp = stamp;
            let key = Arc::clone(key);
            self.next_stamp += 1;
            self.order.push_back((key, stamp));
            self.compact();
        }
        Some(found)
    }

    pub fn insert(&mut self, path: &str, segments: Segments) {
        if self.capacity == 0 {
            return;
        }
        if let Some(existing) = self.map.get_mut(path) {
            existing.segments = segments;
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict();
        }

        let key: Arc<str> = Arc::from(path);
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.order.push_back((Arc::clone(&key), stamp));
        self.map.insert(key, CacheEntry { segments, stamp });
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.map.len(),
            max_size: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }

    fn evict(&mut self) {
        let count = match self.policy {
            EvictionPolicy::Bulk => self.map.len().div_ceil(2),
            EvictionPolicy::Lru => 1,
        };

        let mut evicted = 0usize;
        while evicted < count {
            let Some((oldest, stamp)) = self.order.pop_front() else {
                break;
            };
            if self.is_live(&oldest, stamp) {
                self.map.remove(&oldest);
                evicted += 1;
            }
        }

        tracing::event!(
            tracing::Level::DEBUG,
            operation = "evict",
            policy = ?self.policy,
            evicted = evicted as u64,
            remaining = self.map.len() as u64
        );
    }

    #[inline]
    fn is_live(&self, key: &str, stamp: u64) -> bool {
        self.map.get(key).is_some_and(|entry| entry.stamp == stamp)
    }

    /// Drops stale records once they outnumber live ones, keeping `order`
    /// within twice the entry count.
    fn compact(&mut self) {
        if self.order.len() <= self.map.len().max(1) * 2 {
            return;
        }
        let map = &self.map;
        self.order
            .retain(|(key, stamp)| map.get(key.as_ref()).is_some_and(|entry| entry.stamp == *stamp));
    }
}

impl Default for SegmentCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, EvictionPolicy::default())
    }
}

pub(crate) fn to_segments(segments: Vec<Box<str>>) -> Segments {
    Arc::from(segments)
}

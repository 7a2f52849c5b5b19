use parking_lot::Mutex;

use super::cache::{CacheStats, EvictionPolicy, SegmentCache, to_segments};
use super::segment::split_segments;
use crate::types::Segments;

/// Path splitter with a memo table shared by registration and lookup.
#[derive(Debug, Default)]
pub struct Segmenter {
    cache: Mutex<SegmentCache>,
}

impl Segmenter {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            cache: Mutex::new(SegmentCache::new(capacity, policy)),
        }
    }

    #[tracing::instrument(level = "trace", skip(self, path), fields(path_len = path.len() as u64))]
    pub fn split(&self, path: &str) -> Segments {
        if let Some(hit) = self.cache.lock().get(path) {
            return hit;
        }

        let segments = to_segments(split_segments(path));
        self.cache.lock().insert(path, segments.clone());
        segments
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
        tracing::event!(tracing::Level::DEBUG, operation = "clear_cache");
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }
}

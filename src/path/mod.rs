mod cache;
mod segment;
mod segmenter;

pub use cache::{CacheStats, DEFAULT_CACHE_CAPACITY, EvictionPolicy, SegmentCache};
pub use segment::split_segments;
pub use segmenter::Segmenter;

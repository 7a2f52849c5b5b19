use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::path::EvictionPolicy;
use crate::path::DEFAULT_CACHE_CAPACITY;

pub const MAX_CACHE_SIZE: usize = 1 << 20;

/// How registration treats a parameter or wildcard name that differs from
/// the one already bound on the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ConflictMode {
    /// Keep the existing name; the new pattern's binding is aliased to it.
    #[default]
    FirstWins,
    /// Fail registration with a conflict error.
    Reject,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouterOptions {
    /// Segment cache capacity; 0 disables memoization.
    pub max_cache_size: usize,
    pub eviction: EvictionPolicy,
    pub param_conflict: ConflictMode,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            max_cache_size: DEFAULT_CACHE_CAPACITY,
            eviction: EvictionPolicy::default(),
            param_conflict: ConflictMode::default(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_cache_size > MAX_CACHE_SIZE {
            return Err(RouterOptionsError::CacheSizeTooLarge {
                provided: self.max_cache_size,
                max: MAX_CACHE_SIZE,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn max_cache_size(mut self, value: usize) -> Self {
        self.options.max_cache_size = value;
        self
    }

    pub fn eviction(mut self, value: EvictionPolicy) -> Self {
        self.options.eviction = value;
        self
    }

    pub fn param_conflict(mut self, value: ConflictMode) -> Self {
        self.options.param_conflict = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_cache_size {provided} exceeds the supported maximum {max}")]
    CacheSizeTooLarge { provided: usize, max: usize },
}

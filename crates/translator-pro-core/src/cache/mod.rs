mod key;
mod memory;

pub use key::CacheKey;
pub use memory::MemoryCache;

use crate::config::CacheConfig;
use crate::translator::Translation;

/// Translation cache. Memory only: nothing is written to disk.
pub struct TranslationCache {
    memory: Option<MemoryCache>,
}

impl TranslationCache {
    /// Create a new translation cache from configuration
    pub fn new(config: &CacheConfig) -> Self {
        let memory = config
            .enabled
            .then(|| MemoryCache::new(config.max_entries, config.ttl_seconds));

        Self { memory }
    }

    /// A cache that never stores anything
    pub const fn disabled() -> Self {
        Self { memory: None }
    }

    pub const fn is_enabled(&self) -> bool {
        self.memory.is_some()
    }

    /// Get a cached translation
    pub async fn get(&self, key: &CacheKey) -> Option<Translation> {
        match self.memory {
            Some(ref memory) => memory.get(key.as_str()).await,
            None => None,
        }
    }

    /// Store a translation in cache
    pub async fn insert(&self, key: &CacheKey, value: Translation) {
        if let Some(ref memory) = self.memory {
            memory.insert(key.to_string(), value).await;
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Some(ref memory) = self.memory {
            memory.clear();
        }
    }
}

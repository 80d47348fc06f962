// SPDX-License-Identifier: MPL-2.0
//! LRU cache of preview images keyed by download URL.
//!
//! Image attachments are fetched through the authenticated client, so the
//! bytes are worth keeping around while the user flips through attempts.
//! Entries hold decoded handles; eviction is bounded both by entry count
//! and by total payload bytes.

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

const DEFAULT_MAX_ENTRIES: usize = 32;
const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024;

struct CacheEntry {
    handle: Handle,
    size_bytes: usize,
}

pub struct PreviewCache {
    cache: LruCache<String, CacheEntry>,
    max_bytes: usize,
    current_bytes: usize,
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_ENTRIES, DEFAULT_MAX_BYTES)
    }

    pub fn with_limits(max_entries: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
        }
    }

    /// Wraps downloaded bytes in an image handle, caching it within the byte
    /// budget. Payloads larger than half the budget are handed back uncached.
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) -> Handle {
        let size_bytes = bytes.len();
        let handle = Handle::from_bytes(bytes);

        if size_bytes > self.max_bytes / 2 {
            debug!(url, size_bytes, "preview too large to cache");
            return handle;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.max_bytes && !self.cache.is_empty() {
            if let Some((evicted_url, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                debug!(url = evicted_url, "preview evicted");
            }
        }

        self.current_bytes += size_bytes;
        self.cache.put(
            url,
            CacheEntry {
                handle: handle.clone(),
                size_bytes,
            },
        );
        handle
    }

    /// Fetches a cached handle, updating LRU order on hit.
    pub fn get(&mut self, url: &str) -> Option<Handle> {
        self.cache.get(url).map(|entry| entry.handle.clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

use crate::resource::key::ShapeKey;
use std::collections::HashMap;

/// Retention limits for the free pool.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FreePoolOpts {
    /// Maximum number of retained entries per key bucket.
    pub(crate) max_per_key: usize,
}

impl Default for FreePoolOpts {
    fn default() -> Self {
        Self { max_per_key: 16 }
    }
}

/// Free pool counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct FreePoolStats {
    /// Entries currently held.
    pub retained: usize,
    /// Entries accepted by `release`.
    pub released: u64,
    /// Entries handed back out by `take`.
    pub reused: u64,
    /// Releases refused because the key's bucket was full.
    pub dropped_on_release: u64,
}

struct Bucket<T> {
    key: ShapeKey,
    entries: Vec<T>,
}

/// Multimap of released resources keyed by scratch key.
///
/// Entries under one key are fungible; `take` hands back the most recently released one.
pub(crate) struct FreePool<T> {
    opts: FreePoolOpts,
    stats: FreePoolStats,

    bucket_idx_by_key: HashMap<ShapeKey, usize>,
    buckets: Vec<Bucket<T>>,
}

impl<T> FreePool<T> {
    pub(crate) fn new(opts: FreePoolOpts) -> Self {
        Self {
            opts,
            stats: FreePoolStats::default(),
            bucket_idx_by_key: HashMap::new(),
            buckets: Vec::new(),
        }
    }

    pub(crate) fn stats(&self) -> FreePoolStats {
        self.stats
    }

    pub(crate) fn len(&self) -> usize {
        self.stats.retained
    }

    pub(crate) fn take(&mut self, key: &ShapeKey) -> Option<T> {
        let &bi = self.bucket_idx_by_key.get(key)?;
        let value = self.buckets[bi].entries.pop()?;
        self.stats.retained -= 1;
        self.stats.reused = self.stats.reused.saturating_add(1);
        Some(value)
    }

    /// Returns false when the bucket is full and `value` was not retained.
    pub(crate) fn release(&mut self, key: &ShapeKey, value: T) -> bool {
        if self.opts.max_per_key == 0 {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return false;
        }

        let bi = match self.bucket_idx_by_key.get(key).copied() {
            Some(i) => i,
            None => {
                let i = self.buckets.len();
                self.buckets.push(Bucket {
                    key: key.clone(),
                    entries: Vec::new(),
                });
                self.bucket_idx_by_key.insert(key.clone(), i);
                i
            }
        };

        let bucket = &mut self.buckets[bi];
        debug_assert!(bucket.key == *key);
        if bucket.entries.len() >= self.opts.max_per_key {
            self.stats.dropped_on_release = self.stats.dropped_on_release.saturating_add(1);
            return false;
        }

        bucket.entries.push(value);
        self.stats.retained += 1;
        self.stats.released = self.stats.released.saturating_add(1);
        true
    }

    /// Number of distinct keys that currently hold at least one entry.
    pub(crate) fn key_count(&self) -> usize {
        self.buckets.iter().filter(|b| !b.entries.is_empty()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pool/free_pool.rs"]
mod tests;

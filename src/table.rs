//! Fixed-width table of [`Bucket`]s addressed by djb2.

use std::fmt;

use crate::bucket::{Bucket, Slots};
use crate::config::Config;
use crate::error::Result;
use crate::hash::djb2;

/// A string-to-string hash table with a fixed number of buckets.
///
/// Each key lives in bucket `djb2(key) % bucket_count`. Buckets hold
/// `bucket_capacity` entries inline and chain anything beyond that. The
/// table never grows or rehashes.
///
/// ```rust
/// use bucket_table::Table;
///
/// let mut table = Table::new(2, 1).unwrap();
/// table.insert("a", "1");
/// table.insert("b", "2");
///
/// assert_eq!(table.get("a"), Some("1"));
/// assert_eq!(table.remove("a"), Some("1".to_string()));
/// assert_eq!(table.get("a"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    buckets: Vec<Bucket>,
    bucket_capacity: usize,
    count: usize,
}

impl Table {
    /// Create a table with `bucket_count` buckets of `bucket_capacity`
    /// inline slots each. Both must be non-zero.
    pub fn new(bucket_count: usize, bucket_capacity: usize) -> Result<Self> {
        Self::with_config(Config::new(bucket_count, bucket_capacity))
    }

    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let buckets = (0..config.bucket_count)
            .map(|_| Bucket::new(config.bucket_capacity))
            .collect();
        log::debug!(
            "created table with {} buckets of capacity {}",
            config.bucket_count,
            config.bucket_capacity
        );
        Ok(Self {
            buckets,
            bucket_capacity: config.bucket_capacity,
            count: 0,
        })
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    pub fn config(&self) -> Config {
        Config::new(self.bucket_count(), self.bucket_capacity)
    }

    /// Number of stored entries, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Index of the bucket that `key` routes to.
    #[inline]
    pub fn hash(&self, key: &str) -> usize {
        // The remainder is below `bucket_count`, so it always fits in usize.
        (djb2(key.as_bytes()) % self.buckets.len() as u64) as usize
    }

    /// Borrow bucket `index`, or `None` past the end.
    pub fn bucket(&self, index: usize) -> Option<&Bucket> {
        self.buckets.get(index)
    }

    /// Store `key` => `value`. Existing entries for `key` are left in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let idx = self.hash(&key);
        self.buckets[idx].insert(key, value.into());
        self.count += 1;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.buckets[self.hash(key)].get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove one entry for `key`. Returns its value when something was
    /// removed.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.hash(key);
        let removed = self.buckets[idx].remove(key);
        if removed.is_some() {
            self.count -= 1;
        }
        removed
    }

    /// Every bucket's diagnostic enumeration, in bucket order.
    pub fn display(&self) -> impl Iterator<Item = (usize, Slots<'_>)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(idx, bucket)| (idx, bucket.display()))
    }

    /// All entries across buckets, in bucket order then scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.entries())
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, slots) in self.display() {
            write!(f, "Bucket {idx}: ")?;
            for slot in slots {
                write!(f, "{slot}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

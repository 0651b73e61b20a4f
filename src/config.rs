//! Construction parameters for [`Table`](crate::Table).

use crate::error::{Error, Result};

/// Default number of buckets.
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Default number of inline slots per bucket.
pub const DEFAULT_BUCKET_CAPACITY: usize = 4;

/// Configuration for a [`Table`](crate::Table).
///
/// Both values are fixed for the lifetime of the table; there is no rehashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of buckets in the table.
    pub bucket_count: usize,
    /// Inline entries per bucket before overflow chaining starts.
    pub bucket_capacity: usize,
}

impl Config {
    /// Create a configuration. Call [`Config::validate`] before use, or go
    /// through [`Table::with_config`](crate::Table::with_config) which does.
    pub fn new(bucket_count: usize, bucket_capacity: usize) -> Self {
        Self {
            bucket_count,
            bucket_capacity,
        }
    }

    /// Reject zero bucket counts and zero capacities.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::ZeroBucketCount);
        }
        if self.bucket_capacity == 0 {
            return Err(Error::ZeroBucketCapacity);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
        }
    }
}

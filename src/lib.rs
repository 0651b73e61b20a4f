//! # bucket-table
//!
//! A fixed-width string hash table. Each bucket keeps a fixed number of
//! entries inline and chains the rest in an owned singly linked list.
//!
//! - Keys route to bucket `djb2(key) % bucket_count`
//! - Bucket count and capacity are fixed at construction (no rehashing)
//! - Duplicate keys coexist; lookups follow a fixed scan order
//! - Absent keys are `None`, distinct from an empty value
//!
//! ## Example
//!
//! ```rust
//! use bucket_table::Table;
//!
//! let mut table = Table::new(10, 4).unwrap();
//! table.insert("hello", "world");
//! table.insert("empty", "");
//!
//! assert_eq!(table.get("hello"), Some("world"));
//! assert_eq!(table.get("empty"), Some(""));
//! assert_eq!(table.get("missing"), None);
//! ```

#![warn(clippy::all)]

pub mod bucket;
pub mod cli;
pub mod config;
pub mod error;
pub mod hash;
pub mod loader;
pub mod logger;
pub mod table;

pub use bucket::{Bucket, Entry, Slot};
pub use config::Config;
pub use error::{Error, Result};
pub use hash::djb2;
pub use loader::{load_file, load_reader, LoadReport};
pub use table::Table;

#[cfg(test)]
mod proptests;

//! A single bucket: fixed inline slots plus an overflow chain.
//!
//! Inline entries keep insertion order. Once the inline slots are full, new
//! entries are pushed onto the head of a singly linked chain, so the most
//! recent overflow is scanned first. Lookups always scan inline slots before
//! the chain.
//!
//! Keys are not deduplicated. Inserting the same key twice stores two
//! entries and [`Bucket::get`] returns whichever one the scan order reaches
//! first.

use std::fmt;

/// A stored key/value pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Overflow chain node. Each node owns the rest of the chain.
struct Node {
    entry: Entry,
    next: Link,
}

type Link = Option<Box<Node>>;

/// One entry as seen by [`Bucket::display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot<'a> {
    pub key: &'a str,
    pub value: &'a str,
    /// `true` when the entry lives in the overflow chain.
    pub overflow: bool,
}

impl fmt::Display for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overflow {
            write!(f, "{} => {} (chained) | ", self.key, self.value)
        } else {
            write!(f, "{} => {} | ", self.key, self.value)
        }
    }
}

pub struct Bucket {
    inline: Vec<Entry>,
    overflow: Link,
    overflow_len: usize,
    capacity: usize,
}

impl Bucket {
    /// Create an empty bucket holding up to `capacity` entries inline.
    ///
    /// Tables never pass zero; a zero-capacity bucket would send every entry
    /// to the chain.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "bucket capacity must be non-zero");
        Self {
            inline: Vec::with_capacity(capacity),
            overflow: None,
            overflow_len: 0,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn inline_len(&self) -> usize {
        self.inline.len()
    }

    #[inline]
    pub fn overflow_len(&self) -> usize {
        self.overflow_len
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inline.len() + self.overflow_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store `key` => `value` without checking for an existing entry.
    pub fn insert(&mut self, key: String, value: String) {
        let entry = Entry::new(key, value);
        if self.inline.len() < self.capacity {
            self.inline.push(entry);
            return;
        }

        log::trace!("bucket full ({} inline), chaining {:?}", self.capacity, entry.key);
        let next = self.overflow.take();
        self.overflow = Some(Box::new(Node { entry, next }));
        self.overflow_len += 1;
    }

    /// Value of the first entry matching `key`: inline slots in insertion
    /// order, then the chain from most recent overflow to oldest.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove the first entry matching `key`, using the same order as
    /// [`Bucket::get`]. Returns the removed value.
    ///
    /// Only one entry is removed per call, so a duplicated key stays
    /// reachable until every copy is removed.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if let Some(idx) = self.inline.iter().position(|entry| entry.key == key) {
            // `Vec::remove` keeps the remaining inline entries in order.
            return Some(self.inline.remove(idx).value);
        }

        let mut cursor = &mut self.overflow;
        while cursor.as_ref().is_some_and(|node| node.entry.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.overflow_len -= 1;
        Some(node.entry.value)
    }

    /// All entries in scan order: inline first, then the chain.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inline: self.inline.iter(),
            chain: self.overflow.as_deref(),
        }
    }

    /// Diagnostic view of every entry, tagged with where it is stored.
    pub fn display(&self) -> Slots<'_> {
        Slots {
            inline: self.inline.iter(),
            chain: self.overflow.as_deref(),
        }
    }
}

impl Drop for Bucket {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop of a long chain
        // would exhaust the stack.
        let mut link = self.overflow.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl Clone for Bucket {
    fn clone(&self) -> Self {
        let mut chain: Vec<&Entry> = Vec::with_capacity(self.overflow_len);
        let mut cur = self.overflow.as_deref();
        while let Some(node) = cur {
            chain.push(&node.entry);
            cur = node.next.as_deref();
        }

        // Rebuild from the tail so head order is preserved.
        let mut overflow: Link = None;
        for entry in chain.into_iter().rev() {
            overflow = Some(Box::new(Node {
                entry: entry.clone(),
                next: overflow,
            }));
        }

        Self {
            inline: self.inline.clone(),
            overflow,
            overflow_len: self.overflow_len,
            capacity: self.capacity,
        }
    }
}

impl fmt::Debug for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.display()).finish()
    }
}

/// Iterator over a bucket's entries in scan order.
pub struct Entries<'a> {
    inline: std::slice::Iter<'a, Entry>,
    chain: Option<&'a Node>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.inline.next() {
            return Some(entry);
        }
        let node = self.chain?;
        self.chain = node.next.as_deref();
        Some(&node.entry)
    }
}

/// Iterator returned by [`Bucket::display`].
pub struct Slots<'a> {
    inline: std::slice::Iter<'a, Entry>,
    chain: Option<&'a Node>,
}

impl<'a> Iterator for Slots<'a> {
    type Item = Slot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.inline.next() {
            return Some(Slot {
                key: &entry.key,
                value: &entry.value,
                overflow: false,
            });
        }
        let node = self.chain?;
        self.chain = node.next.as_deref();
        Some(Slot {
            key: &node.entry.key,
            value: &node.entry.value,
            overflow: true,
        })
    }
}

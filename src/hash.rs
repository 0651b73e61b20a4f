//! djb2 string hash used to route keys to buckets.

/// Initial accumulator of the djb2 recurrence.
pub const DJB2_SEED: u64 = 5381;

/// Hash `key` with djb2: `h = h * 33 + byte`, wrapping at 64 bits.
///
/// Bytes are taken as unsigned values. An empty key hashes to [`DJB2_SEED`].
#[inline]
pub fn djb2(key: &[u8]) -> u64 {
    key.iter().fold(DJB2_SEED, |h, &b| {
        (h << 5).wrapping_add(h).wrapping_add(u64::from(b))
    })
}

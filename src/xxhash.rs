//! Thin wrapper around the `xxhash-rust` crate providing the XXH32/XXH64
//! one-shot functions the component builders in [`crate::component`] use to
//! turn shingles, n-grams and chunks into fixed-width feature digests.

/// One-shot XXH32 hash, returned as a `u32` feature value (used by
/// Content-ID-Text shingles and Data-ID chunks as MinHash input).
///
/// # Parity vectors
/// * `xxh32(b"", 0)` == `0x02CC5D05`
#[inline]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
    xxhash_rust::xxh32::xxh32(data, seed)
}

/// One-shot XXH64 hash, returned as an 8-byte big-endian digest (used by
/// Meta-ID n-grams as Similarity-Hash input).
///
/// # Parity vectors
/// * `xxh64_digest(b"", 0)` == `0xEF46DB3751D8E999u64.to_be_bytes()`
#[inline]
pub fn xxh64_digest(data: &[u8], seed: u64) -> [u8; 8] {
    xxhash_rust::xxh64::xxh64(data, seed).to_be_bytes()
}

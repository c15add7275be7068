//! Similarity Hash (simhash).
//!
//! Used by the Meta-ID builder to fold a list of per-n-gram digests into a
//! single fixed-width digest, and by MinHash's LSB-fold step to combine its
//! two 64-bit halves.

/// Compute the bit-column majority vote across `hashes`, each of which must
/// be the same length. For every bit position, the output bit is `1` if at
/// least half the inputs have a `1` there (`>=`, not strict majority), `0`
/// otherwise.
///
/// Panics if `hashes` is empty or the digests have differing lengths —
/// both are caller bugs, not recoverable runtime conditions.
pub fn similarity_hash(hashes: &[Vec<u8>]) -> Vec<u8> {
    assert!(!hashes.is_empty(), "similarity_hash requires at least one input");
    let width = hashes[0].len();
    assert!(
        hashes.iter().all(|h| h.len() == width),
        "similarity_hash inputs must all have the same length"
    );

    let n_bits = width * 8;
    let mut votes = vec![0usize; n_bits];
    for hash in hashes {
        for bit in 0..n_bits {
            let byte = hash[bit / 8];
            if byte & (0x80 >> (bit % 8)) != 0 {
                votes[bit] += 1;
            }
        }
    }

    let threshold = hashes.len();
    let mut out = vec![0u8; width];
    for (bit, &count) in votes.iter().enumerate() {
        // ">=" half: 2*count >= len  <=>  count >= len/2 (rounded up via doubling)
        if 2 * count >= threshold {
            out[bit / 8] |= 0x80 >> (bit % 8);
        }
    }
    out
}

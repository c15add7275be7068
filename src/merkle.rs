//! Merkle-style top hash for the Instance-ID.
//!
//! Leaves are domain-separated SHA-256d of 64000-byte input slices;
//! internal nodes are domain-separated SHA-256d of their two children. Odd
//! levels duplicate the last node to keep the tree binary. Only the root's
//! first 8 bytes feed the Instance-ID digest.

use sha2::{Digest, Sha256};
use std::io::Read;

/// Size, in bytes, of the slices hashed into Merkle leaves.
pub const LEAF_SIZE: usize = 64_000;

const LEAF_TAG: u8 = 0x00;
const NODE_TAG: u8 = 0x01;

fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

fn leaf_hash(slice: &[u8]) -> [u8; 32] {
    let mut tagged = Vec::with_capacity(1 + slice.len());
    tagged.push(LEAF_TAG);
    tagged.extend_from_slice(slice);
    sha256d(&tagged)
}

fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut tagged = Vec::with_capacity(1 + 64);
    tagged.push(NODE_TAG);
    tagged.extend_from_slice(left);
    tagged.extend_from_slice(right);
    sha256d(&tagged)
}

/// Read `reader` to completion, hashing it into 64000-byte leaves, and
/// return the 32-byte Merkle root.
pub fn top_hash<R: Read>(mut reader: R) -> std::io::Result<[u8; 32]> {
    let mut leaves = Vec::new();
    let mut buf = vec![0u8; LEAF_SIZE];
    loop {
        let mut filled = 0;
        while filled < LEAF_SIZE {
            let n = reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            break;
        }
        leaves.push(leaf_hash(&buf[..filled]));
        if filled < LEAF_SIZE {
            break;
        }
    }

    Ok(root_from_leaves(leaves))
}

fn root_from_leaves(mut level: Vec<[u8; 32]>) -> [u8; 32] {
    if level.is_empty() {
        // Empty input: the root of zero leaves is the leaf hash of an
        // empty slice, matching a single empty-slice leaf.
        return leaf_hash(&[]);
    }
    while level.len() > 1 {
        if level.len() % 2 == 1 {
            let last = *level.last().unwrap();
            level.push(last);
        }
        level = level
            .chunks_exact(2)
            .map(|pair| node_hash(&pair[0], &pair[1]))
            .collect();
    }
    level[0]
}

/// Compute the 8-byte Instance-ID digest: the first 8 bytes of the Merkle
/// root over `reader`'s full content.
pub fn instance_digest<R: Read>(reader: R) -> std::io::Result<[u8; 8]> {
    let root = top_hash(reader)?;
    let mut digest = [0u8; 8];
    digest.copy_from_slice(&root[..8]);
    Ok(digest)
}

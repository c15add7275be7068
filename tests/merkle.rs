// Integration tests for src/merkle — double-SHA-256 Merkle top hash.

use iscc::merkle::{instance_digest, top_hash, LEAF_SIZE};
use std::io::Cursor;

#[test]
fn root_is_thirty_two_bytes() {
    let root = top_hash(Cursor::new(b"some content".to_vec())).unwrap();
    assert_eq!(root.len(), 32);
}

#[test]
fn instance_digest_is_eight_bytes() {
    let digest = instance_digest(Cursor::new(b"some content".to_vec())).unwrap();
    assert_eq!(digest.len(), 8);
}

#[test]
fn multi_leaf_input_is_deterministic() {
    let data = vec![9u8; LEAF_SIZE * 3 + 17];
    let a = instance_digest(Cursor::new(data.clone())).unwrap();
    let b = instance_digest(Cursor::new(data)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn appending_a_byte_changes_the_digest() {
    let mut data = vec![1u8; LEAF_SIZE];
    let a = instance_digest(Cursor::new(data.clone())).unwrap();
    data.push(2);
    let b = instance_digest(Cursor::new(data)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn empty_and_nonempty_streams_differ() {
    let empty = instance_digest(Cursor::new(Vec::<u8>::new())).unwrap();
    let nonempty = instance_digest(Cursor::new(vec![0u8])).unwrap();
    assert_ne!(empty, nonempty);
}

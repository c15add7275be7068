// Integration tests for src/stream — the Streamable byte source.

use iscc::stream::Streamable;
use std::io::Read;

#[test]
fn bytes_variant_reads_back_empty_buffer() {
    let mut s = Streamable::from_bytes(Vec::new());
    let mut out = Vec::new();
    s.read_to_end(&mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn file_variant_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.bin");
    let data = (0u8..=255).collect::<Vec<u8>>();
    std::fs::write(&path, &data).unwrap();

    let mut s = Streamable::from_path(&path).unwrap();
    let mut out = Vec::new();
    s.read_to_end(&mut out).unwrap();
    assert_eq!(out, data);
}

#[test]
fn both_variants_agree_on_identical_content() {
    let data = b"identical".to_vec();
    let mut bytes = Streamable::from_bytes(data.clone());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("identical.bin");
    std::fs::write(&path, &data).unwrap();
    let mut file = Streamable::from_path(&path).unwrap();

    let mut out_bytes = Vec::new();
    bytes.read_to_end(&mut out_bytes).unwrap();
    let mut out_file = Vec::new();
    file.read_to_end(&mut out_file).unwrap();

    assert_eq!(out_bytes, out_file);
}

// Integration tests for src/codec — typed base58 codec and distance helper.
//
// Exercises the length invariants and round-trip property from the
// testable-properties list (§8 items 1-2, 10).

use iscc::codec::{decode, distance, encode, HEAD_DID, HEAD_MID};

#[test]
fn header_byte_round_trips_for_every_value() {
    for b in 0u8..=255 {
        let code = encode(&[b]).unwrap();
        assert_eq!(code.len(), 2);
        assert_eq!(decode(&code).unwrap(), vec![b]);
    }
}

#[test]
fn full_record_round_trips() {
    let record: Vec<u8> = vec![HEAD_MID, 0xDE, 0xAD, 0xBE, 0xEF, 0x01, 0x02, 0x03, 0x04];
    let code = encode(&record).unwrap();
    assert_eq!(code.len(), 13);
    assert_eq!(decode(&code).unwrap(), record);
}

#[test]
fn distance_self_is_zero() {
    let code = encode(&[HEAD_DID, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(distance(&code, &code, false).unwrap(), 0);
}

#[test]
fn distance_is_symmetric_for_arbitrary_codes() {
    let a = encode(&[HEAD_MID, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0]).unwrap();
    let b = encode(&[HEAD_MID, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert_eq!(distance(&a, &b, false).unwrap(), distance(&b, &a, false).unwrap());
}

#[test]
fn distance_never_exceeds_64_for_eight_byte_digests() {
    let a = encode(&[HEAD_MID, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]).unwrap();
    let b = encode(&[HEAD_MID, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
    assert!(distance(&a, &b, false).unwrap() <= 64);
}

#[test]
fn illegal_code_lengths_are_rejected() {
    for bad in ["", "a", "abcdefghijklmnop"] {
        assert!(decode(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn mismatched_headers_require_mixed_flag() {
    let a = encode(&[HEAD_MID, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    let b = encode(&[HEAD_DID, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    assert!(distance(&a, &b, false).is_err());
    assert!(distance(&a, &b, true).is_ok());
}

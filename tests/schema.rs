// Integration tests for src/schema — CLI --json output DTOs.

use iscc::schema::{ComponentResult, DistanceResult, IsccResult};

#[test]
fn iscc_result_with_all_fields_serializes_every_key() {
    let result = IsccResult {
        meta_id: Some("abc".into()),
        content_id: Some("def".into()),
        data_id: Some("ghi".into()),
        instance_id: Some("jkl".into()),
        title: Some("Title".into()),
        extra: None,
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"meta_id\":\"abc\""));
    assert!(json.contains("\"extra\":null"));
}

#[test]
fn component_result_serializes_kind_and_code() {
    let result = ComponentResult { kind: "data_id", code: "XYZ".into() };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"kind\":\"data_id\""));
    assert!(json.contains("\"code\":\"XYZ\""));
}

#[test]
fn distance_result_carries_both_codes_and_the_distance() {
    let result = DistanceResult { a: "a-code".into(), b: "b-code".into(), hamming_distance: 12 };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("a-code"));
    assert!(json.contains("b-code"));
    assert!(json.contains("12"));
}

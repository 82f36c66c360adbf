//! Verify the `Item` wire contract against JSON vectors in `test-vectors/`.
//!
//! Each accepted case must decode, re-encode to the expected JSON object,
//! and survive a full decode/encode/decode cycle unchanged. Rejected cases
//! must fail to decode. Comparing parsed JSON values (not raw strings)
//! avoids false negatives from field-ordering differences.

use items_core::Item;

fn vectors() -> serde_json::Value {
    let raw = include_str!("../../test-vectors/item.json");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn accepted_vectors_decode_and_reencode() {
    let vectors = vectors();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let item: Item = serde_json::from_value(case["input"].clone())
            .unwrap_or_else(|e| panic!("{name}: decode failed: {e}"));

        let reencoded = serde_json::to_value(&item).unwrap();
        assert_eq!(reencoded, case["reencoded"], "{name}: re-encoded JSON");

        let back: Item = serde_json::from_value(reencoded).unwrap();
        assert_eq!(back, item, "{name}: roundtrip identity");
    }
}

#[test]
fn rejected_vectors_fail_to_decode() {
    let vectors = vectors();
    for case in vectors["rejected"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result: Result<Item, _> = serde_json::from_value(case["input"].clone());
        assert!(result.is_err(), "{name}: expected decode failure");
    }
}

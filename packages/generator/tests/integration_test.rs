//! End-to-end tests for the generation pipeline.
//!
//! Runs extraction, request building and caching against a realistic
//! Docs API response for a residential purchase agreement template.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;

use deedmill_generator::cache::PlaceholderCache;
use deedmill_generator::generator::{build_replace_requests, FieldValues};
use deedmill_generator::placeholders::extract_placeholders;
use deedmill_generator::types::{Document, UpdateRequest};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("purchase_agreement")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Parse the purchase-agreement fixture.
fn fixture_document() -> Document {
    serde_json::from_str(&load_fixture("document.json")).expect("Failed to parse fixture")
}

#[test]
fn test_extraction_order_matches_document() {
    let document = fixture_document();
    let placeholders = extract_placeholders(&document);

    // Reading order: heading paragraph, intro paragraph, table rows
    // (segment markers filtered), closing paragraph, then the canonical
    // legal_description appended because the raw text only carries the
    // three segment markers.
    assert_eq!(
        placeholders,
        vec![
            "closing_date",
            "seller_name",
            "buyer_name",
            "estimated_value",
            "county",
            "buyer_name",
            "closing_date",
            "legal_description",
        ]
    );
}

#[test]
fn test_extraction_never_yields_segment_markers() {
    let placeholders = extract_placeholders(&fixture_document());
    for reserved in [
        "legal_description_1",
        "legal_description_2",
        "legal_description_3",
    ] {
        assert!(!placeholders.iter().any(|token| token == reserved));
    }
}

#[test]
fn test_requests_for_fixture_template() {
    let placeholders = extract_placeholders(&fixture_document());

    let mut data = FieldValues::new();
    data.insert("buyer_name".to_string(), "Jane Roe".to_string());
    data.insert("seller_name".to_string(), "John Doe".to_string());
    data.insert("closing_date".to_string(), "September 1, 2026".to_string());
    data.insert("estimated_value".to_string(), "$350,000".to_string());
    data.insert("county".to_string(), "Maricopa".to_string());
    data.insert(
        "legal_description".to_string(),
        "Lot 4 Block 2 of the Sunnydale Subdivision according to the plat \
         thereof recorded in Book 52 of Maps Page 17 records of Maricopa County"
            .to_string(),
    );

    let requests = build_replace_requests(&placeholders, &data);

    // One request per distinct token, plus the three segment markers.
    assert_eq!(requests.len(), 5 + 4);

    // The description packs greedily into the 65/91/91 template fields.
    assert_eq!(
        requests[6],
        UpdateRequest::replace_token(
            "legal_description_1",
            "Lot 4 Block 2 of the Sunnydale Subdivision according to the plat"
        )
    );
    assert_eq!(
        requests[7],
        UpdateRequest::replace_token(
            "legal_description_2",
            "thereof recorded in Book 52 of Maps Page 17 records of Maricopa County"
        )
    );
    assert_eq!(requests[8], UpdateRequest::replace_token("legal_description_3", ""));
}

#[test]
fn test_batch_update_body_shape() {
    let placeholders = vec!["buyer_name".to_string()];
    let mut data = FieldValues::new();
    data.insert("buyer_name".to_string(), "Jane Roe".to_string());

    let requests = build_replace_requests(&placeholders, &data);
    let json = serde_json::to_value(&requests).expect("serializable");

    assert_eq!(
        json,
        serde_json::json!([
            {
                "replaceAllText": {
                    "containsText": {"text": "{buyer_name}", "matchCase": false},
                    "replaceText": "Jane Roe"
                }
            }
        ])
    );
}

#[test]
fn test_extracted_placeholders_roundtrip_through_cache() {
    let placeholders = extract_placeholders(&fixture_document());

    let dir = tempfile::tempdir().expect("tempdir");
    let cache = PlaceholderCache::new(dir.path().join("placeholders.json"));

    cache
        .put("1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI", &placeholders)
        .expect("writable");
    assert_eq!(
        cache
            .get("1x8anDO0z5ZkYZ9EBcMUw5C9GV69mPZgI")
            .expect("readable"),
        Some(placeholders)
    );
}

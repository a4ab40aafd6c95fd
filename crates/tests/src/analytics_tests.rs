use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{AnalyticsSummary, CaseFiledEvent, HotspotBucket};

#[test]
fn event_payload_carries_no_identity() {
    let event =
        CaseFiledEvent::from_parts("Consumer Fraud", "440001", "Maharashtra", "Nagpur").unwrap();
    let json = serde_json::to_value(&event).unwrap();

    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    for key in ["legal_category", "pin_code", "state", "city"] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("user_id"));
    assert!(!obj.contains_key("email"));
}

#[test]
fn partial_location_produces_no_event() {
    // One blank field drops the whole event; no partial rows.
    assert!(CaseFiledEvent::from_parts("Consumer Fraud", "440001", "", "Nagpur").is_none());
    assert!(CaseFiledEvent::from_parts("Consumer Fraud", " ", "MH", "Nagpur").is_none());
}

#[test]
fn hotspot_bucket_round_trips() {
    let bucket = HotspotBucket {
        legal_category: "Deficiency in Service".to_string(),
        state: "Maharashtra".to_string(),
        city: "Pune".to_string(),
        count: 17,
    };
    let json = serde_json::to_string(&bucket).unwrap();
    let back: HotspotBucket = serde_json::from_str(&json).unwrap();
    assert_eq!(back, bucket);
}

#[test]
fn empty_summary_serializes_with_nulls() {
    let summary = AnalyticsSummary {
        total_cases: 0,
        top_category: None,
        top_state: None,
    };
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["total_cases"], Value::from(0));
    assert!(json["top_category"].is_null());
    assert!(json["top_state"].is_null());
}

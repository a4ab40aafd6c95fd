use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use shared_types::{
    active_cases, split_lawyer_board, to_case_display, to_lawyer_card, CaseRecord, LawyerProfile,
    LAWYER_BOARD_REQUEST_COUNT, LAWYER_DISPLAY_RATING,
};
use uuid::Uuid;

fn case(description: &str, status: &str, city: Option<&str>, day: u32) -> CaseRecord {
    CaseRecord {
        id: Uuid::new_v4(),
        user_id: 42,
        description: description.to_string(),
        defendant_name: "Sunrise Electronics".to_string(),
        claim_amount: 12500.0,
        incident_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap(),
        city: city.map(str::to_string),
        state: Some("Maharashtra".to_string()),
        pin_code: Some("440001".to_string()),
        legal_category: Some("Deficiency in Service".to_string()),
        status: status.to_string(),
        confidence_score: Some(64),
        complexity: Some("Moderate".to_string()),
        legal_sections: vec!["Section 2(11), CPA 2019".to_string()],
        reasoning: Some("Clear service deficiency.".to_string()),
        courtroom_script: None,
        document_url: None,
        assigned_lawyer_id: None,
        created_at: Utc.with_ymd_and_hms(2026, 3, day, 10, 0, 0).unwrap(),
    }
}

#[test]
fn full_pipeline_from_rows_to_display() {
    let rows = vec![
        case("Washing machine leaked and flooded the kitchen floor", "Active", Some("Nagpur"), 3),
        case("", "Closed", None, 2),
        case("AC repair overcharged", "In Review", Some("Pune"), 1),
    ];
    let displays: Vec<_> = rows.iter().map(to_case_display).collect();

    assert_eq!(displays[0].title, "Washing machine leaked and flo...");
    assert_eq!(displays[0].subtitle, "Incident at Nagpur");
    assert!(displays[1].title.starts_with("Case #"));
    assert_eq!(displays[1].subtitle, "Legal Matter");
    assert_eq!(displays[2].title, "AC repair overcharged");
    assert_eq!(displays[0].filed_on, "2026-03-03");

    let active = active_cases(&displays);
    assert_eq!(active.len(), 2);
}

#[test]
fn multibyte_descriptions_truncate_on_char_boundaries() {
    // 35 Devanagari chars; byte-index truncation would panic.
    let text = "ग्राहक संरक्षण के अंतर्गत शिकायत दर्ज की गई";
    let display = to_case_display(&case(text, "Active", None, 1));
    assert!(display.title.ends_with("..."));
    assert_eq!(display.title.chars().count(), 33);
}

#[test]
fn board_split_keeps_order_and_caps_requests() {
    let displays: Vec<_> = (1..=5)
        .map(|d| to_case_display(&case(&format!("matter {d}"), "Active", None, d)))
        .collect();
    let (board, requests) = split_lawyer_board(displays.clone());

    assert_eq!(board, displays);
    assert_eq!(requests.len(), LAWYER_BOARD_REQUEST_COUNT);
    assert_eq!(requests[0].title, "matter 1");
}

#[test]
fn lawyer_card_carries_fixed_rating_and_derived_avatar() {
    let lawyer = LawyerProfile {
        id: 9,
        name: "Adv. Nisha Kulkarni".to_string(),
        email: "nisha@example.com".to_string(),
        domain: Some("Product Liability".to_string()),
        phone: Some("+91 98220 00000".to_string()),
    };
    let card = to_lawyer_card(&lawyer);
    assert_eq!(card.rating, LAWYER_DISPLAY_RATING);
    assert_eq!(card.domain, "Product Liability");
    assert!(card.avatar_url.contains("Nisha+Kulkarni"));
}

use serde::{Deserialize, Serialize};

use crate::case::CaseRecord;
use crate::lawyer::LawyerProfile;

/// How many characters of the description make it into a dashboard title.
const TITLE_MAX_CHARS: usize = 30;

/// How many case rows the lawyer board fetches.
pub const LAWYER_BOARD_CASE_LIMIT: i64 = 5;

/// How many of those rows show up as new requests.
pub const LAWYER_BOARD_REQUEST_COUNT: usize = 3;

/// How many recommended lawyers the user dashboard shows.
pub const RECOMMENDED_LAWYER_LIMIT: i64 = 3;

/// Fixed display rating for recommended lawyers.
pub const LAWYER_DISPLAY_RATING: f32 = 4.8;

/// A case row shaped for dashboard lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDisplay {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub filed_on: String,
    pub document_url: Option<String>,
}

/// A recommended-lawyer card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LawyerCard {
    pub name: String,
    pub domain: String,
    pub rating: f32,
    pub avatar_url: String,
}

/// Derive a short title from a case description.
///
/// Long descriptions are cut at the first 30 characters with an ellipsis;
/// empty ones fall back to `Case #` plus the leading id characters.
pub fn case_title(description: &str, id: &str) -> String {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        let prefix: String = id.chars().take(6).collect();
        return format!("Case #{prefix}");
    }
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() > TITLE_MAX_CHARS {
        let head: String = chars[..TITLE_MAX_CHARS].iter().collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}

/// Derive the secondary line from a case's incident location.
pub fn case_subtitle(city: Option<&str>) -> String {
    match city.map(str::trim).filter(|c| !c.is_empty()) {
        Some(city) => format!("Incident at {city}"),
        None => "Legal Matter".to_string(),
    }
}

/// Map a persisted case row to its dashboard display form.
pub fn to_case_display(case: &CaseRecord) -> CaseDisplay {
    let id = case.id.to_string();
    let status = if case.status.trim().is_empty() {
        "Active".to_string()
    } else {
        case.status.clone()
    };
    CaseDisplay {
        title: case_title(&case.description, &id),
        subtitle: case_subtitle(case.city.as_deref()),
        status,
        filed_on: case.created_at.format("%Y-%m-%d").to_string(),
        document_url: case.document_url.clone(),
        id,
    }
}

/// The subset of a user's cases still in motion.
pub fn active_cases(cases: &[CaseDisplay]) -> Vec<CaseDisplay> {
    cases
        .iter()
        .filter(|c| c.status != "Closed")
        .cloned()
        .collect()
}

/// Map a lawyer profile onto a recommendation card.
pub fn to_lawyer_card(lawyer: &LawyerProfile) -> LawyerCard {
    LawyerCard {
        name: lawyer.name.clone(),
        domain: lawyer.domain_or_general().to_string(),
        rating: LAWYER_DISPLAY_RATING,
        avatar_url: lawyer.avatar_url(),
    }
}

/// The two lists on the lawyer board: active cases and new requests.
/// New requests are the leading slice of the same fetch, capped at 3.
pub fn split_lawyer_board(cases: Vec<CaseDisplay>) -> (Vec<CaseDisplay>, Vec<CaseDisplay>) {
    let requests: Vec<CaseDisplay> = cases
        .iter()
        .take(LAWYER_BOARD_REQUEST_COUNT)
        .cloned()
        .collect();
    (cases, requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn record(description: &str, status: &str, city: Option<&str>) -> CaseRecord {
        CaseRecord {
            id: Uuid::parse_str("a1b2c3d4-0000-0000-0000-000000000000").unwrap(),
            user_id: 1,
            description: description.to_string(),
            defendant_name: "Acme".to_string(),
            claim_amount: 500.0,
            incident_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            city: city.map(str::to_string),
            state: Some("Maharashtra".to_string()),
            pin_code: Some("411001".to_string()),
            legal_category: Some("Consumer Fraud".to_string()),
            status: status.to_string(),
            confidence_score: Some(72),
            complexity: Some("Moderate".to_string()),
            legal_sections: vec![],
            reasoning: None,
            courtroom_script: None,
            document_url: None,
            assigned_lawyer_id: None,
            created_at: Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn long_description_truncated_to_30_chars() {
        let long = "My refrigerator stopped working two days after purchase";
        let title = case_title(long, "abc123");
        assert_eq!(title.chars().count(), 33);
        assert!(title.ends_with("..."));
        assert!(title.starts_with("My refrigerator stopped workin"));
    }

    #[test]
    fn short_description_kept_verbatim() {
        assert_eq!(case_title("Broken mixer", "abc123"), "Broken mixer");
    }

    #[test]
    fn empty_description_falls_back_to_id_prefix() {
        assert_eq!(case_title("   ", "a1b2c3d4-0000"), "Case #a1b2c3");
    }

    #[test]
    fn subtitle_uses_city_or_fallback() {
        assert_eq!(case_subtitle(Some("Pune")), "Incident at Pune");
        assert_eq!(case_subtitle(Some("  ")), "Legal Matter");
        assert_eq!(case_subtitle(None), "Legal Matter");
    }

    #[test]
    fn display_defaults_blank_status_to_active() {
        let display = to_case_display(&record("Broken mixer", "", Some("Pune")));
        assert_eq!(display.status, "Active");
        assert_eq!(display.filed_on, "2026-04-01");
    }

    #[test]
    fn active_filter_excludes_closed_only() {
        let rows = vec![
            to_case_display(&record("a", "Active", None)),
            to_case_display(&record("b", "Closed", None)),
            to_case_display(&record("c", "In Review", None)),
        ];
        let active = active_cases(&rows);
        assert_eq!(active.len(), 2);
        assert!(active.iter().all(|c| c.status != "Closed"));
    }

    #[test]
    fn lawyer_board_requests_are_first_three() {
        let rows: Vec<CaseDisplay> = (0..5)
            .map(|i| to_case_display(&record(&format!("case {i}"), "Active", None)))
            .collect();
        let (active, requests) = split_lawyer_board(rows);
        assert_eq!(active.len(), 5);
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].title, "case 0");
        assert_eq!(requests[2].title, "case 2");
    }

    #[test]
    fn fewer_cases_than_request_cap() {
        let rows = vec![to_case_display(&record("only", "Active", None))];
        let (active, requests) = split_lawyer_board(rows);
        assert_eq!(active.len(), 1);
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn lawyer_card_mapping() {
        let lawyer = LawyerProfile {
            id: 3,
            name: "Adv. Rohan Desai".to_string(),
            email: "rohan@example.com".to_string(),
            domain: None,
            phone: None,
        };
        let card = to_lawyer_card(&lawyer);
        assert_eq!(card.domain, "General");
        assert_eq!(card.rating, LAWYER_DISPLAY_RATING);
        assert!(card.avatar_url.contains("Rohan"));
    }
}

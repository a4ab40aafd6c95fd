use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured details collected on the case form, after validation and
/// numeric coercion of the claim amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDetails {
    pub defendant_name: String,
    pub claim_amount: f64,
    pub incident_date: NaiveDate,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pin_code: String,
}

/// Raw case form input, exactly as typed. `claim_amount` stays a string
/// until validation coerces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseFormInput {
    pub defendant_name: String,
    pub claim_amount: String,
    pub incident_date: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Validate a case form. Rules run in a fixed order and the first failure
/// wins; callers get at most one message to display.
pub fn validate_case_details(input: &CaseFormInput) -> Result<CaseDetails, String> {
    let defendant_name = input.defendant_name.trim();
    if defendant_name.is_empty() {
        return Err("Please enter the defendant's name.".to_string());
    }

    let claim_amount: f64 = input
        .claim_amount
        .trim()
        .parse()
        .map_err(|_| "Claim amount must be a number.".to_string())?;
    if claim_amount <= 0.0 {
        return Err("Claim amount must be greater than zero.".to_string());
    }

    let incident_date = NaiveDate::parse_from_str(input.incident_date.trim(), "%Y-%m-%d")
        .map_err(|_| "Please select the incident date.".to_string())?;

    Ok(CaseDetails {
        defendant_name: defendant_name.to_string(),
        claim_amount,
        incident_date,
        city: input.city.trim().to_string(),
        state: input.state.trim().to_string(),
        pin_code: input.pin_code.trim().to_string(),
    })
}

/// Case complexity as judged by the analysis backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum Complexity {
    Simple,
    Complex,
    // serde(other) requires the catch-all variant to come last.
    #[default]
    #[serde(other)]
    Moderate,
}

impl Complexity {
    /// Parse a backend string, defaulting to `Moderate` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "simple" => Complexity::Simple,
            "complex" => Complexity::Complex,
            _ => Complexity::Moderate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
        }
    }
}

/// A precedent returned by the analysis backend. The backend sends either a
/// `{title, url}` object or a bare string (including its "unable to fetch"
/// fallback message), so deserialization accepts both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "KanoonCaseRepr")]
pub struct KanoonCase {
    pub title: String,
    pub url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KanoonCaseRepr {
    Structured {
        title: String,
        #[serde(default)]
        url: Option<String>,
    },
    Plain(String),
}

impl From<KanoonCaseRepr> for KanoonCase {
    fn from(repr: KanoonCaseRepr) -> Self {
        match repr {
            KanoonCaseRepr::Structured { title, url } => KanoonCase { title, url },
            KanoonCaseRepr::Plain(title) => KanoonCase { title, url: None },
        }
    }
}

/// Full analysis of a filed grievance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// Winnability estimate, 0-100.
    pub confidence_score: i32,
    pub complexity: Complexity,
    #[serde(default)]
    pub legal_sections: Vec<String>,
    pub reasoning: String,
    pub courtroom_script: String,
    #[serde(default)]
    pub kanoon_cases: Vec<KanoonCase>,
}

impl AnalysisResult {
    /// Whether the UI should surface lawyer recommendations for this case.
    pub fn recommends_lawyer(&self) -> bool {
        self.complexity == Complexity::Complex || self.confidence_score < 50
    }
}

/// Payload merged from the grievance step and the details step, sent to the
/// analysis operation and persisted alongside the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseAnalysisRequest {
    pub grievance_text: String,
    pub legal_category: String,
    pub details: CaseDetails,
}

/// A persisted case row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CaseRecord {
    pub id: Uuid,
    pub user_id: i64,
    pub description: String,
    pub defendant_name: String,
    pub claim_amount: f64,
    pub incident_date: NaiveDate,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub legal_category: Option<String>,
    pub status: String,
    pub confidence_score: Option<i32>,
    pub complexity: Option<String>,
    #[cfg_attr(feature = "server", sqlx(json))]
    pub legal_sections: Vec<String>,
    pub reasoning: Option<String>,
    pub courtroom_script: Option<String>,
    pub document_url: Option<String>,
    pub assigned_lawyer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CaseFormInput {
        CaseFormInput {
            defendant_name: "Acme Appliances Pvt Ltd".to_string(),
            claim_amount: "500".to_string(),
            incident_date: "2026-03-14".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            pin_code: "411001".to_string(),
        }
    }

    #[test]
    fn valid_form_coerces_amount() {
        let details = validate_case_details(&valid_input()).unwrap();
        assert_eq!(details.claim_amount, 500.0);
        assert_eq!(details.defendant_name, "Acme Appliances Pvt Ltd");
        assert_eq!(
            details.incident_date,
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }

    #[test]
    fn blank_defendant_fails_first() {
        let mut input = valid_input();
        input.defendant_name = "   ".to_string();
        // Amount is also broken, but the name rule runs first.
        input.claim_amount = "abc".to_string();
        let err = validate_case_details(&input).unwrap_err();
        assert!(err.contains("defendant"));
    }

    #[test]
    fn non_numeric_amount_rejected() {
        let mut input = valid_input();
        input.claim_amount = "five hundred".to_string();
        let err = validate_case_details(&input).unwrap_err();
        assert!(err.contains("number"));
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        for bad in ["0", "-20", "-0.01"] {
            let mut input = valid_input();
            input.claim_amount = bad.to_string();
            assert!(validate_case_details(&input).is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn fractional_amount_accepted() {
        let mut input = valid_input();
        input.claim_amount = " 1249.99 ".to_string();
        let details = validate_case_details(&input).unwrap();
        assert_eq!(details.claim_amount, 1249.99);
    }

    #[test]
    fn missing_date_rejected() {
        let mut input = valid_input();
        input.incident_date = String::new();
        let err = validate_case_details(&input).unwrap_err();
        assert!(err.contains("date"));
    }

    #[test]
    fn complexity_parse_defaults_to_moderate() {
        assert_eq!(Complexity::from_str_or_default("Simple"), Complexity::Simple);
        assert_eq!(
            Complexity::from_str_or_default("COMPLEX"),
            Complexity::Complex
        );
        assert_eq!(
            Complexity::from_str_or_default("whatever"),
            Complexity::Moderate
        );
    }

    #[test]
    fn lawyer_recommendation_predicate() {
        let base = AnalysisResult {
            confidence_score: 80,
            complexity: Complexity::Simple,
            legal_sections: vec![],
            reasoning: String::new(),
            courtroom_script: String::new(),
            kanoon_cases: vec![],
        };

        assert!(!base.recommends_lawyer());

        let complex = AnalysisResult {
            complexity: Complexity::Complex,
            ..base.clone()
        };
        assert!(complex.recommends_lawyer());

        let weak = AnalysisResult {
            confidence_score: 49,
            ..base.clone()
        };
        assert!(weak.recommends_lawyer());

        let boundary = AnalysisResult {
            confidence_score: 50,
            ..base
        };
        assert!(!boundary.recommends_lawyer());
    }

    #[test]
    fn unknown_complexity_deserializes_to_moderate() {
        let parsed: Complexity = serde_json::from_str("\"Baffling\"").unwrap();
        assert_eq!(parsed, Complexity::Moderate);

        let simple: Complexity = serde_json::from_str("\"Simple\"").unwrap();
        assert_eq!(simple, Complexity::Simple);
        assert_eq!(serde_json::to_string(&simple).unwrap(), "\"Simple\"");
    }

    #[test]
    fn kanoon_case_accepts_strings_and_objects() {
        let plain: KanoonCase = serde_json::from_value(serde_json::json!(
            "Unable to fetch Indian Kanoon data at this time."
        ))
        .unwrap();
        assert_eq!(plain.title, "Unable to fetch Indian Kanoon data at this time.");
        assert_eq!(plain.url, None);

        let structured: KanoonCase = serde_json::from_value(serde_json::json!({
            "title": "Sharma v. Acme Appliances",
            "url": "https://indiankanoon.org/doc/12345/"
        }))
        .unwrap();
        assert_eq!(structured.title, "Sharma v. Acme Appliances");
        assert_eq!(
            structured.url.as_deref(),
            Some("https://indiankanoon.org/doc/12345/")
        );

        let bare: KanoonCase =
            serde_json::from_value(serde_json::json!({ "title": "Untitled" })).unwrap();
        assert_eq!(bare.url, None);
    }
}

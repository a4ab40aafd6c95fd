use serde::{Deserialize, Serialize};

/// Anonymized record of a filed case. Carries only category and location,
/// never any user identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFiledEvent {
    pub legal_category: String,
    pub pin_code: String,
    pub state: String,
    pub city: String,
}

impl CaseFiledEvent {
    /// Build an event if every location field is present. Incomplete
    /// locations produce no event at all rather than a partial row.
    pub fn from_parts(
        legal_category: &str,
        pin_code: &str,
        state: &str,
        city: &str,
    ) -> Option<Self> {
        if legal_category.trim().is_empty()
            || pin_code.trim().is_empty()
            || state.trim().is_empty()
            || city.trim().is_empty()
        {
            return None;
        }
        Some(Self {
            legal_category: legal_category.trim().to_string(),
            pin_code: pin_code.trim().to_string(),
            state: state.trim().to_string(),
            city: city.trim().to_string(),
        })
    }
}

/// One aggregated hotspot bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotspotBucket {
    pub legal_category: String,
    pub state: String,
    pub city: String,
    pub count: i64,
}

/// Summary over all logged filing events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsSummary {
    pub total_cases: i64,
    pub top_category: Option<String>,
    pub top_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_location_builds_event() {
        let event =
            CaseFiledEvent::from_parts("Consumer Fraud", "411001", "Maharashtra", "Pune").unwrap();
        assert_eq!(event.legal_category, "Consumer Fraud");
        assert_eq!(event.city, "Pune");
    }

    #[test]
    fn any_missing_field_yields_none() {
        assert!(CaseFiledEvent::from_parts("", "411001", "MH", "Pune").is_none());
        assert!(CaseFiledEvent::from_parts("Fraud", "", "MH", "Pune").is_none());
        assert!(CaseFiledEvent::from_parts("Fraud", "411001", "  ", "Pune").is_none());
        assert!(CaseFiledEvent::from_parts("Fraud", "411001", "MH", "").is_none());
    }

    #[test]
    fn fields_are_trimmed() {
        let event =
            CaseFiledEvent::from_parts(" Consumer Fraud ", " 411001", "Maharashtra ", " Pune ")
                .unwrap();
        assert_eq!(event.pin_code, "411001");
        assert_eq!(event.state, "Maharashtra");
    }
}

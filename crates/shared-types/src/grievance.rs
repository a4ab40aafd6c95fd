use serde::{Deserialize, Serialize};

/// Result of grievance classification by the AI backend.
///
/// `translated_text` is the English rendering of the grievance; for input
/// already in English the backend echoes it back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrievanceResult {
    pub legal_category: String,
    pub summary: String,
    pub translated_text: String,
}

/// Legal categories the classifier is expected to produce. Anything else
/// is displayed verbatim; this list only drives UI affordances.
pub const LEGAL_CATEGORIES: &[&str] = &[
    "Consumer Fraud",
    "Deficiency in Service",
    "Unfair Trade Practice",
    "Product Liability",
    "Medical Negligence",
];

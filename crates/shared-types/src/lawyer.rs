use serde::{Deserialize, Serialize};

/// A lawyer directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct LawyerProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub domain: Option<String>,
    pub phone: Option<String>,
}

impl LawyerProfile {
    /// Practice area shown in the UI; unset domains read as "General".
    pub fn domain_or_general(&self) -> &str {
        self.domain.as_deref().filter(|d| !d.is_empty()).unwrap_or("General")
    }

    /// Deterministic avatar URL derived from the lawyer's name.
    pub fn avatar_url(&self) -> String {
        format!(
            "https://ui-avatars.com/api/?name={}&background=1d4ed8&color=fff",
            self.name.replace(' ', "+")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_domain_reads_general() {
        let lawyer = LawyerProfile {
            id: 1,
            name: "Adv. Kavya Rao".to_string(),
            email: "kavya@example.com".to_string(),
            domain: None,
            phone: None,
        };
        assert_eq!(lawyer.domain_or_general(), "General");

        let empty = LawyerProfile {
            domain: Some(String::new()),
            ..lawyer.clone()
        };
        assert_eq!(empty.domain_or_general(), "General");

        let set = LawyerProfile {
            domain: Some("Medical Negligence".to_string()),
            ..lawyer
        };
        assert_eq!(set.domain_or_general(), "Medical Negligence");
    }

    #[test]
    fn avatar_url_encodes_name() {
        let lawyer = LawyerProfile {
            id: 1,
            name: "Kavya Rao".to_string(),
            email: "kavya@example.com".to_string(),
            domain: None,
            phone: None,
        };
        assert!(lawyer.avatar_url().contains("name=Kavya+Rao"));
    }
}

use serde::{Deserialize, Serialize};

use crate::lawyer::LawyerProfile;

/// Authenticated user as exposed to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    /// Role hint stored on the account ("user" or "lawyer"). The lawyers
    /// table is authoritative; see [`SessionRole::resolve`].
    pub role: String,
    pub avatar_url: Option<String>,
    /// The role resolved once at session establishment.
    pub session_role: SessionRole,
}

/// Resolved session role.
///
/// A `Lawyer` carries the matched directory profile so pages never have to
/// re-probe the lawyers table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum SessionRole {
    User,
    Lawyer(LawyerProfile),
}

impl SessionRole {
    /// Resolve the effective role for a session.
    ///
    /// A lawyers-table row matching the session email always wins, whatever
    /// the account's role hint says. Without a match the hint decides, and
    /// anything unrecognized falls back to `User`.
    pub fn resolve(role_hint: &str, lawyer_row: Option<LawyerProfile>) -> Self {
        match lawyer_row {
            Some(profile) => SessionRole::Lawyer(profile),
            None if role_hint.eq_ignore_ascii_case("lawyer") => {
                // Hint says lawyer but no directory row exists. Treat as a
                // regular user rather than invent an empty profile.
                SessionRole::User
            }
            None => SessionRole::User,
        }
    }

    pub fn is_lawyer(&self) -> bool {
        matches!(self, SessionRole::Lawyer(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionRole::User => "user",
            SessionRole::Lawyer(_) => "lawyer",
        }
    }
}

impl Default for SessionRole {
    fn default() -> Self {
        SessionRole::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lawyer_profile() -> LawyerProfile {
        LawyerProfile {
            id: 7,
            name: "Adv. Meera Nair".to_string(),
            email: "meera@example.com".to_string(),
            domain: Some("Consumer Protection".to_string()),
            phone: None,
        }
    }

    #[test]
    fn lawyers_row_forces_lawyer_role() {
        // Even with a "user" hint, a directory match wins.
        let role = SessionRole::resolve("user", Some(lawyer_profile()));
        assert!(role.is_lawyer());
    }

    #[test]
    fn hint_without_row_resolves_to_user() {
        let role = SessionRole::resolve("lawyer", None);
        assert_eq!(role, SessionRole::User);
    }

    #[test]
    fn unknown_hint_defaults_to_user() {
        assert_eq!(SessionRole::resolve("admin", None), SessionRole::User);
        assert_eq!(SessionRole::resolve("", None), SessionRole::User);
    }

    #[test]
    fn lawyer_role_carries_profile() {
        let role = SessionRole::resolve("lawyer", Some(lawyer_profile()));
        match role {
            SessionRole::Lawyer(p) => assert_eq!(p.email, "meera@example.com"),
            SessionRole::User => panic!("expected lawyer role"),
        }
    }
}

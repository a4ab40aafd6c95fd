use pretty_assertions::assert_eq;
use shared_types::{LawyerProfile, SessionRole};

fn directory_row() -> LawyerProfile {
    LawyerProfile {
        id: 11,
        name: "Adv. Farhan Qureshi".to_string(),
        email: "farhan@example.com".to_string(),
        domain: Some("Unfair Trade Practice".to_string()),
        phone: None,
    }
}

#[test]
fn directory_row_wins_over_any_hint() {
    for hint in ["user", "lawyer", "admin", ""] {
        let role = SessionRole::resolve(hint, Some(directory_row()));
        assert!(role.is_lawyer(), "hint {hint:?} should not matter");
    }
}

#[test]
fn no_row_falls_back_to_user_even_with_lawyer_hint() {
    assert_eq!(SessionRole::resolve("lawyer", None), SessionRole::User);
    assert_eq!(SessionRole::resolve("LAWYER", None), SessionRole::User);
    assert_eq!(SessionRole::resolve("user", None), SessionRole::User);
}

#[test]
fn resolved_lawyer_keeps_the_directory_profile() {
    match SessionRole::resolve("user", Some(directory_row())) {
        SessionRole::Lawyer(profile) => {
            assert_eq!(profile.id, 11);
            assert_eq!(profile.domain_or_general(), "Unfair Trade Practice");
        }
        SessionRole::User => panic!("expected lawyer"),
    }
}

#[test]
fn role_survives_the_wire() {
    // The role is resolved server-side and shipped to the client inside
    // AuthUser; a serde round trip must not flatten the profile away.
    let role = SessionRole::resolve("user", Some(directory_row()));
    let json = serde_json::to_string(&role).unwrap();
    let back: SessionRole = serde_json::from_str(&json).unwrap();
    assert_eq!(back, role);
    assert_eq!(back.as_str(), "lawyer");
}

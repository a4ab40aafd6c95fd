//! Fixed sample content for panels that would otherwise be empty. Nothing in
//! here touches the network or the database.

use shared_types::{to_lawyer_card, LawyerCard, LawyerProfile};

/// Sample lawyer profiles shown when the directory has no matches. Negative
/// ids mark them as display-only; no consult action is offered for them.
pub fn sample_lawyers() -> Vec<LawyerProfile> {
    vec![
        LawyerProfile {
            id: -1,
            name: "Adv. Priya Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            domain: Some("Consumer Protection".to_string()),
            phone: None,
        },
        LawyerProfile {
            id: -2,
            name: "Adv. Arjun Mehta".to_string(),
            email: "arjun.mehta@example.com".to_string(),
            domain: Some("Civil Litigation".to_string()),
            phone: None,
        },
        LawyerProfile {
            id: -3,
            name: "Adv. Kavya Iyer".to_string(),
            email: "kavya.iyer@example.com".to_string(),
            domain: None,
            phone: None,
        },
    ]
}

/// The same sample set shaped as recommendation cards.
pub fn sample_lawyer_cards() -> Vec<LawyerCard> {
    sample_lawyers().iter().map(to_lawyer_card).collect()
}

/// Recent-activity lines for the lawyer board.
pub fn sample_activity() -> Vec<&'static str> {
    vec![
        "Reviewed documents for a product liability claim",
        "Drafted a reply notice in a deficiency-of-service matter",
        "Client call scheduled for a pending consultation",
    ]
}

/// Upcoming hearings for the lawyer board, as (matter, date) pairs.
pub fn sample_hearings() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Sharma v. Metro Appliances", "2026-09-04"),
        ("Consumer Forum — misleading warranty", "2026-09-11"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_lawyers_use_sentinel_ids() {
        assert!(sample_lawyers().iter().all(|l| l.id < 0));
    }

    #[test]
    fn sample_cards_match_sample_profiles() {
        let cards = sample_lawyer_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].domain, "General");
    }
}

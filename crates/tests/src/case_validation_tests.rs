use pretty_assertions::assert_eq;
use shared_types::{validate_case_details, CaseFormInput};

fn filled_form() -> CaseFormInput {
    CaseFormInput {
        defendant_name: "  Sunrise Electronics  ".to_string(),
        claim_amount: "12500".to_string(),
        incident_date: "2026-02-10".to_string(),
        city: " Nagpur ".to_string(),
        state: "Maharashtra".to_string(),
        pin_code: "440001".to_string(),
    }
}

#[test]
fn rules_run_in_declared_order() {
    // All three rules broken at once: the defendant rule reports first.
    let input = CaseFormInput {
        defendant_name: String::new(),
        claim_amount: "nope".to_string(),
        incident_date: String::new(),
        ..filled_form()
    };
    let err = validate_case_details(&input).unwrap_err();
    assert!(err.contains("defendant"), "got: {err}");

    // Fix the name: the amount rule reports next.
    let input = CaseFormInput {
        claim_amount: "nope".to_string(),
        incident_date: String::new(),
        ..filled_form()
    };
    let err = validate_case_details(&input).unwrap_err();
    assert!(err.contains("number"), "got: {err}");

    // Fix the amount: the date rule reports last.
    let input = CaseFormInput {
        incident_date: String::new(),
        ..filled_form()
    };
    let err = validate_case_details(&input).unwrap_err();
    assert!(err.contains("date"), "got: {err}");
}

#[test]
fn whitespace_amount_is_not_a_number() {
    let input = CaseFormInput {
        claim_amount: "   ".to_string(),
        ..filled_form()
    };
    assert!(validate_case_details(&input).is_err());
}

#[test]
fn boundary_amounts() {
    let zero = CaseFormInput {
        claim_amount: "0.00".to_string(),
        ..filled_form()
    };
    assert!(validate_case_details(&zero).is_err());

    let tiny = CaseFormInput {
        claim_amount: "0.01".to_string(),
        ..filled_form()
    };
    assert_eq!(validate_case_details(&tiny).unwrap().claim_amount, 0.01);
}

#[test]
fn location_fields_are_optional_and_trimmed() {
    let input = CaseFormInput {
        city: String::new(),
        state: "  ".to_string(),
        pin_code: String::new(),
        ..filled_form()
    };
    let details = validate_case_details(&input).unwrap();
    assert_eq!(details.city, "");
    assert_eq!(details.state, "");

    let details = validate_case_details(&filled_form()).unwrap();
    assert_eq!(details.city, "Nagpur");
    assert_eq!(details.defendant_name, "Sunrise Electronics");
}

#[test]
fn non_iso_date_is_rejected() {
    for bad in ["10-02-2026", "2026/02/10", "Feb 10 2026"] {
        let input = CaseFormInput {
            incident_date: bad.to_string(),
            ..filled_form()
        };
        assert!(validate_case_details(&input).is_err(), "accepted {bad}");
    }
}

use server::typst::{build_complaint_source, compile_typst, escape_typst, ComplaintParams};

fn params() -> ComplaintParams {
    ComplaintParams {
        complainant_name: "Asha Patil".to_string(),
        defendant_name: "Sunrise Electronics".to_string(),
        legal_category: "Deficiency in Service".to_string(),
        claim_amount: "12500.00".to_string(),
        incident_date: "10 February 2026".to_string(),
        grievance_statement: "The washing machine failed within a week and the seller refused \
                              to honour the warranty."
            .to_string(),
        legal_sections: "Section 2(11), CPA 2019, Section 84, CPA 2019".to_string(),
        courtroom_statement: "Your Honour, I purchased a washing machine that failed within \
                              days of delivery."
            .to_string(),
        document_date: "25 August 2026".to_string(),
    }
}

#[tokio::test]
async fn complaint_compiles_to_pdf_bytes() {
    let source = build_complaint_source(&params());
    let pdf = compile_typst(&source).await.unwrap();

    assert!(pdf.starts_with(b"%PDF-"), "should start with PDF magic bytes");
    assert!(pdf.len() > 1000, "a one-page complaint is never this small");
}

#[tokio::test]
async fn hostile_input_is_escaped_not_executed() {
    // Typst syntax in user text must land on the page as text, not code.
    let mut p = params();
    p.grievance_statement = r#"The seller said "refund denied" #emph[loudly] C:\receipts"#.to_string();
    p.defendant_name = "#strike[Sunrise] Electronics".to_string();

    let source = build_complaint_source(&p);
    let pdf = compile_typst(&source).await.unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn bindings_precede_template_body() {
    let source = build_complaint_source(&params());
    let bindings_end = source.find("#let document_date").unwrap();
    let body_start = source.find("CONSUMER COMPLAINT").unwrap();
    assert!(bindings_end < body_start);
    assert!(source.contains(r#"#let complainant_name = "Asha Patil""#));
}

#[test]
fn escape_covers_backslash_quote_and_hash() {
    assert_eq!(escape_typst(r"C:\temp"), r"C:\\temp");
    assert_eq!(escape_typst(r#"say "hi""#), r#"say \"hi\""#);
    assert_eq!(escape_typst("#let x = 1"), r"\#let x = 1");
    assert_eq!(escape_typst("plain text"), "plain text");
}

#[tokio::test]
async fn invalid_source_reports_diagnostics() {
    let err = compile_typst("#let broken = ").await.unwrap_err();
    assert!(err.message.contains("Typst compilation failed"), "got: {}", err.message);
}

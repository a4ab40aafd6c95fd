use serde_json::Value;
use shared_types::{AnalysisResult, AppError, CaseAnalysisRequest, Complexity, GrievanceResult, KanoonCase};
use tracing;

// --- Environment helpers ---

fn ai_backend_url() -> Result<String, AppError> {
    std::env::var("AI_BACKEND_URL")
        .map(|u| u.trim_end_matches('/').to_string())
        .map_err(|_| AppError::internal("AI_BACKEND_URL is not configured"))
}

/// Reject bodies that carry an `{"error": ...}` field. The backend reports
/// classification and analysis failures this way with a 200 status.
fn check_error_field(body: &Value) -> Result<(), AppError> {
    if let Some(err) = body.get("error") {
        let msg = err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string());
        return Err(AppError::upstream(msg));
    }
    Ok(())
}

async fn read_error_body(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::upstream(format!("AI backend error ({status}): {body}"))
}

// --- Operations ---

/// Translate and classify a grievance. Sends text and an optional uploaded
/// document as multipart form data.
#[tracing::instrument(skip(text, file))]
pub async fn translate_grievance(
    text: String,
    file: Option<(String, Vec<u8>)>,
) -> Result<GrievanceResult, AppError> {
    let url = format!("{}/ai/process", ai_backend_url()?);

    let mut form = reqwest::multipart::Form::new().text("text", text);
    if let Some((filename, bytes)) = file {
        form = form.part(
            "file",
            reqwest::multipart::Part::bytes(bytes).file_name(filename),
        );
    }

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("AI backend request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(read_error_body(response).await);
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| AppError::upstream(format!("AI backend returned invalid JSON: {e}")))?;
    check_error_field(&body)?;

    let result: GrievanceResult = serde_json::from_value(body)
        .map_err(|e| AppError::upstream(format!("Unexpected classification payload: {e}")))?;

    tracing::info!(category = %result.legal_category, "Grievance classified");
    Ok(result)
}

/// Run the full case analysis for a validated filing.
#[tracing::instrument(skip(request))]
pub async fn analyze_case(request: &CaseAnalysisRequest) -> Result<AnalysisResult, AppError> {
    let url = format!("{}/ai/analyze", ai_backend_url()?);

    let payload = serde_json::json!({
        "grievance_text": request.grievance_text,
        "legal_category": request.legal_category,
        "defendant_name": request.details.defendant_name,
        "claim_amount": request.details.claim_amount,
        "incident_date": request.details.incident_date,
        "city": request.details.city,
        "state": request.details.state,
        "pin_code": request.details.pin_code,
    });

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("AI backend request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(read_error_body(response).await);
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| AppError::upstream(format!("AI backend returned invalid JSON: {e}")))?;
    check_error_field(&body)?;

    let result = parse_analysis(&body)?;
    tracing::info!(
        score = result.confidence_score,
        complexity = result.complexity.as_str(),
        "Case analyzed"
    );
    Ok(result)
}

/// Synthesize audio for a courtroom script. Returns raw audio bytes.
#[tracing::instrument(skip(script))]
pub async fn synthesize_speech(script: &str) -> Result<Vec<u8>, AppError> {
    let url = format!("{}/ai/speak", ai_backend_url()?);

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&serde_json::json!({ "script": script }))
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("AI backend request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(read_error_body(response).await);
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::upstream(format!("Failed to read audio body: {e}")))?;
    Ok(bytes.to_vec())
}

/// Map the analysis payload to an `AnalysisResult`, clamping the score to
/// 0-100 and tolerating a missing precedent list.
fn parse_analysis(body: &Value) -> Result<AnalysisResult, AppError> {
    let confidence_score = body
        .get("confidence_score")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::upstream("Analysis payload missing confidence_score"))?
        .clamp(0, 100) as i32;

    let complexity = body
        .get("complexity")
        .and_then(Value::as_str)
        .map(Complexity::from_str_or_default)
        .unwrap_or_default();

    let legal_sections = body
        .get("legal_sections")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let kanoon_cases = body
        .get("kanoon_cases")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| serde_json::from_value::<KanoonCase>(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(AnalysisResult {
        confidence_score,
        complexity,
        legal_sections,
        reasoning: body
            .get("reasoning")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        courtroom_script: body
            .get("courtroom_script")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        kanoon_cases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_rejected() {
        let body = serde_json::json!({ "error": "could not classify" });
        let err = check_error_field(&body).unwrap_err();
        assert!(err.message.contains("could not classify"));
    }

    #[test]
    fn clean_body_passes() {
        let body = serde_json::json!({ "legal_category": "Consumer Fraud" });
        assert!(check_error_field(&body).is_ok());
    }

    #[test]
    fn parse_analysis_full_payload() {
        let body = serde_json::json!({
            "confidence_score": 72,
            "complexity": "Complex",
            "legal_sections": ["Section 2(47) CPA 2019"],
            "reasoning": "Clear documentation of the defect.",
            "courtroom_script": "Your Honour, I am filing this complaint against...",
            "kanoon_cases": [{ "title": "X v. Y", "url": "https://indiankanoon.org/doc/1" }]
        });
        let result = parse_analysis(&body).unwrap();
        assert_eq!(result.confidence_score, 72);
        assert_eq!(result.complexity, Complexity::Complex);
        assert_eq!(result.legal_sections.len(), 1);
        assert_eq!(result.kanoon_cases[0].title, "X v. Y");
    }

    #[test]
    fn parse_analysis_clamps_score() {
        let body = serde_json::json!({ "confidence_score": 140, "reasoning": "", "courtroom_script": "" });
        assert_eq!(parse_analysis(&body).unwrap().confidence_score, 100);

        let body = serde_json::json!({ "confidence_score": -5, "reasoning": "", "courtroom_script": "" });
        assert_eq!(parse_analysis(&body).unwrap().confidence_score, 0);
    }

    #[test]
    fn parse_analysis_missing_score_fails() {
        let body = serde_json::json!({ "complexity": "Simple" });
        assert!(parse_analysis(&body).is_err());
    }

    #[test]
    fn parse_analysis_keeps_string_precedents() {
        // The backend mixes {title, url} objects with bare strings, including
        // its own fetch-failure message; none of them may be dropped.
        let body = serde_json::json!({
            "confidence_score": 70,
            "reasoning": "r",
            "courtroom_script": "s",
            "kanoon_cases": [
                { "title": "Sharma v. Acme Appliances", "url": "https://indiankanoon.org/doc/12345/" },
                "Mehta v. Horizon Builders",
                "Unable to fetch Indian Kanoon data at this time."
            ]
        });
        let result = parse_analysis(&body).unwrap();
        assert_eq!(result.kanoon_cases.len(), 3);
        assert_eq!(result.kanoon_cases[1].title, "Mehta v. Horizon Builders");
        assert_eq!(result.kanoon_cases[1].url, None);
        assert!(result.kanoon_cases[0].url.is_some());
    }

    #[test]
    fn parse_analysis_tolerates_missing_lists() {
        let body = serde_json::json!({
            "confidence_score": 55,
            "reasoning": "r",
            "courtroom_script": "s"
        });
        let result = parse_analysis(&body).unwrap();
        assert!(result.legal_sections.is_empty());
        assert!(result.kanoon_cases.is_empty());
        assert_eq!(result.complexity, Complexity::Moderate);
    }
}

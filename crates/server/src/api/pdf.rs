use dioxus::prelude::*;
use uuid::Uuid;

/// Render the consumer complaint PDF for one of the caller's cases and
/// record that a document exists for it.
#[server]
pub async fn generate_complaint_pdf(case_id: Uuid) -> Result<Vec<u8>, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use crate::typst::{build_complaint_source, compile_typst, ComplaintParams};
    use shared_types::AppError;

    let auth = require_auth()?;
    let pool = get_db().await;

    let case = repo::case::find_by_id(pool, case_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Case not found").into_server_fn_error())?;

    if case.user_id != auth.user_id {
        return Err(AppError::forbidden("Not your case").into_server_fn_error());
    }

    let complainant = repo::user::find_by_id(pool, auth.user_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("User not found").into_server_fn_error())?;

    let params = ComplaintParams {
        complainant_name: complainant.display_name,
        defendant_name: case.defendant_name.clone(),
        legal_category: case
            .legal_category
            .clone()
            .unwrap_or_else(|| "General".to_string()),
        claim_amount: format!("{:.2}", case.claim_amount),
        incident_date: case.incident_date.format("%d %B %Y").to_string(),
        grievance_statement: case.description.clone(),
        legal_sections: case.legal_sections.join(", "),
        courtroom_statement: case.courtroom_script.clone().unwrap_or_default(),
        document_date: chrono::Utc::now().format("%d %B %Y").to_string(),
    };

    let source = build_complaint_source(&params);
    let pdf = compile_typst(&source)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    let file_name = format!("complaint-{case_id}.pdf");
    repo::case::set_document_url(pool, case.id, auth.user_id, &file_name)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(%case_id, bytes = pdf.len(), "complaint pdf generated");

    Ok(pdf)
}

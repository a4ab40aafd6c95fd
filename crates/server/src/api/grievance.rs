use dioxus::prelude::*;
use shared_types::GrievanceResult;

/// Classify and translate a grievance. Accepts the typed text plus an
/// optional uploaded document forwarded to the analysis backend.
#[server]
pub async fn process_grievance(
    text: String,
    file_name: Option<String>,
    file_bytes: Option<Vec<u8>>,
) -> Result<GrievanceResult, ServerFnError> {
    use crate::ai;
    use crate::api::auth::require_auth;
    use crate::error_convert::AppErrorExt;
    use shared_types::AppError;

    require_auth()?;

    let text = text.trim().to_string();
    let attachment = match (file_name, file_bytes) {
        (Some(name), Some(bytes)) if !bytes.is_empty() => Some((name, bytes)),
        _ => None,
    };

    if text.is_empty() && attachment.is_none() {
        return Err(
            AppError::bad_request("Please describe your grievance or attach a document")
                .into_server_fn_error(),
        );
    }

    let result = ai::translate_grievance(text, attachment)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(legal_category = %result.legal_category, "grievance processed");

    Ok(result)
}

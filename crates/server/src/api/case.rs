use dioxus::prelude::*;
use shared_types::{AnalysisResult, CaseAnalysisRequest, CaseRecord};

/// Run the full analysis for a validated case and kick off persistence in the
/// background. The caller gets the analysis immediately; the save and the
/// anonymized analytics event each run as one-shot background tasks.
#[server]
pub async fn analyze_case(request: CaseAnalysisRequest) -> Result<AnalysisResult, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::config::feature_flags;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::{ai, repo, tasks};
    use shared_types::{AppError, CaseFiledEvent};

    let auth = require_auth()?;

    if request.grievance_text.trim().is_empty() {
        return Err(AppError::bad_request("Grievance text is required").into_server_fn_error());
    }

    let analysis = ai::analyze_case(&request)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(
        user_id = auth.user_id,
        confidence = analysis.confidence_score,
        complexity = analysis.complexity.as_str(),
        "case analyzed"
    );

    let user_id = auth.user_id;
    let save_request = request.clone();
    let save_analysis = analysis.clone();
    tasks::spawn_task("case_save", request.clone(), async move {
        let pool = get_db().await;
        repo::case::create_analyzed(pool, user_id, &save_request, &save_analysis)
            .await
            .map(|_| ())
    });

    if feature_flags().analytics {
        if let Some(event) = CaseFiledEvent::from_parts(
            &request.legal_category,
            &request.details.pin_code,
            &request.details.state,
            &request.details.city,
        ) {
            let insert_event = event.clone();
            tasks::spawn_task("analytics_event", event, async move {
                let pool = get_db().await;
                repo::analytics::insert_event(pool, &insert_event).await
            });
        }
    }

    Ok(analysis)
}

/// All cases filed by the current user, newest first.
#[server]
pub async fn list_my_cases() -> Result<Vec<CaseRecord>, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    let auth = require_auth()?;
    let pool = get_db().await;

    repo::case::list_for_user(pool, auth.user_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// The lawyer's case board: their assigned cases plus unassigned open cases,
/// capped at the board limit.
#[server]
pub async fn lawyer_case_board() -> Result<Vec<CaseRecord>, ServerFnError> {
    use crate::api::auth::require_lawyer;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use shared_types::LAWYER_BOARD_CASE_LIMIT;

    let (_, lawyer) = require_lawyer().await?;
    let pool = get_db().await;

    repo::case::list_for_lawyer(pool, lawyer.id, LAWYER_BOARD_CASE_LIMIT)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

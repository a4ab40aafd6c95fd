use dioxus::prelude::*;
use shared_types::LawyerProfile;
use uuid::Uuid;

/// The full lawyer directory, for the browse page.
#[server]
pub async fn list_lawyers() -> Result<Vec<LawyerProfile>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    let pool = get_db().await;
    repo::lawyer::list_all(pool)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Up to three lawyers matching a legal category. Falls back to any lawyers
/// when the category has no specialists; an empty result means the directory
/// itself is empty and the client shows sample cards instead.
#[server]
pub async fn recommended_lawyers(
    legal_category: String,
) -> Result<Vec<LawyerProfile>, ServerFnError> {
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use shared_types::RECOMMENDED_LAWYER_LIMIT;

    let pool = get_db().await;
    let limit = RECOMMENDED_LAWYER_LIMIT;

    let mut matches = repo::lawyer::list_by_domain(pool, legal_category.trim(), limit)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if needs_directory_fallback(&matches) {
        matches = repo::lawyer::list_any(pool, limit)
            .await
            .map_err(AppErrorExt::into_server_fn_error)?;
    }

    Ok(matches)
}

/// A category with no specialists falls back to the whole directory rather
/// than showing nothing.
fn needs_directory_fallback(matches: &[LawyerProfile]) -> bool {
    matches.is_empty()
}

/// Start a consultation with a lawyer from the directory. Opens a pending
/// case assigned to them so chat is available immediately.
#[server]
pub async fn request_consultation(
    lawyer_id: i64,
) -> Result<shared_types::CaseRecord, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use shared_types::AppError;

    let auth = require_auth()?;
    let pool = get_db().await;

    let lawyer = repo::lawyer::find_by_id(pool, lawyer_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Lawyer not found").into_server_fn_error())?;

    let case = repo::case::create_consultation(pool, auth.user_id, &lawyer)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    tracing::info!(case_id = %case.id, lawyer_id, "consultation opened");
    Ok(case)
}

/// Assign a lawyer to one of the caller's existing cases, typically from the
/// dashboard's recommendation panel. Returns false when the case already has
/// a lawyer.
#[server]
pub async fn engage_lawyer(case_id: Uuid, lawyer_id: i64) -> Result<bool, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
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

    repo::lawyer::find_by_id(pool, lawyer_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Lawyer not found").into_server_fn_error())?;

    let assigned = repo::case::assign_lawyer(pool, case_id, lawyer_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    if assigned {
        tracing::info!(%case_id, lawyer_id, "lawyer engaged");
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lawyer(id: i64, domain: Option<&str>) -> LawyerProfile {
        LawyerProfile {
            id,
            name: format!("Adv. Test {id}"),
            email: format!("lawyer{id}@example.com"),
            domain: domain.map(str::to_string),
            phone: None,
        }
    }

    #[test]
    fn empty_specialist_set_triggers_directory_fallback() {
        assert!(needs_directory_fallback(&[]));
    }

    #[test]
    fn specialist_matches_suppress_fallback() {
        let matches = vec![lawyer(1, Some("Medical Negligence"))];
        assert!(!needs_directory_fallback(&matches));

        // A single match without a domain still counts as a match.
        let general = vec![lawyer(2, None)];
        assert!(!needs_directory_fallback(&general));
    }
}

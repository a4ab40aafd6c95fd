use dioxus::prelude::*;
use shared_types::ChatMessage;
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::auth::middleware::AuthContext;
#[cfg(feature = "server")]
use shared_types::CaseRecord;

/// Messages on a case thread, oldest first. Visible to the case owner and
/// the assigned lawyer only.
#[server]
pub async fn list_messages(case_id: Uuid) -> Result<Vec<ChatMessage>, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    let auth = require_auth()?;
    let pool = get_db().await;

    let case = load_case_for_participant(pool, case_id, &auth).await?;

    repo::message::list_for_case(pool, case.id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Long-poll for messages newer than `after_id`. Holds the request for a few
/// seconds server-side so clients can loop without their own timer; an empty
/// result means the poll timed out with nothing new.
#[server]
pub async fn poll_messages(
    case_id: Uuid,
    after_id: Option<i64>,
) -> Result<Vec<ChatMessage>, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;

    const POLL_ROUNDS: u32 = 3;
    const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

    let auth = require_auth()?;
    let pool = get_db().await;
    let case = load_case_for_participant(pool, case_id, &auth).await?;

    let threshold = after_id.unwrap_or(0);
    for round in 0..POLL_ROUNDS {
        let messages = repo::message::list_for_case(pool, case.id)
            .await
            .map_err(AppErrorExt::into_server_fn_error)?;
        let fresh: Vec<ChatMessage> = messages.into_iter().filter(|m| m.id > threshold).collect();
        if !fresh.is_empty() {
            return Ok(fresh);
        }
        if round + 1 < POLL_ROUNDS {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    Ok(Vec::new())
}

/// Post a message to a case thread.
#[server]
pub async fn send_message(case_id: Uuid, body: String) -> Result<ChatMessage, ServerFnError> {
    use crate::api::auth::require_auth;
    use crate::db::get_db;
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use shared_types::AppError;

    let auth = require_auth()?;

    let body = body.trim().to_string();
    if body.is_empty() {
        return Err(AppError::bad_request("Message cannot be empty").into_server_fn_error());
    }

    let pool = get_db().await;
    let case = load_case_for_participant(pool, case_id, &auth).await?;

    repo::message::create(pool, case.id, auth.user_id, &body)
        .await
        .map_err(AppErrorExt::into_server_fn_error)
}

/// Load a case and verify the caller participates in it, either as the owner
/// or as the lawyer the case is assigned to.
#[cfg(feature = "server")]
async fn load_case_for_participant(
    pool: &sqlx::Pool<sqlx::Postgres>,
    case_id: Uuid,
    auth: &AuthContext,
) -> Result<CaseRecord, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::repo;
    use shared_types::AppError;

    let case = repo::case::find_by_id(pool, case_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::not_found("Case not found").into_server_fn_error())?;

    if case.user_id == auth.user_id {
        return Ok(case);
    }

    if let Some(lawyer_id) = case.assigned_lawyer_id {
        let lawyer = repo::lawyer::find_by_email(pool, &auth.email)
            .await
            .map_err(AppErrorExt::into_server_fn_error)?;
        if lawyer.map(|l| l.id) == Some(lawyer_id) {
            return Ok(case);
        }
    }

    Err(AppError::forbidden("Not a participant in this case").into_server_fn_error())
}

// Server-only auth helpers shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, SessionRole};

use crate::auth::middleware::AuthContext;
use crate::db::get_db;
use crate::error_convert::AppErrorExt;
use crate::repo;

/// Extract and validate the caller's identity from the current request.
/// Checks the middleware-injected context first, falls back to cookie parsing.
pub(crate) fn require_auth() -> Result<AuthContext, ServerFnError> {
    use crate::auth::middleware::current_auth_context;
    use crate::auth::{cookies, jwt};

    // Primary: identity already validated by auth middleware
    if let Some(auth) = current_auth_context() {
        return Ok(auth);
    }

    // Fallback: parse access token from cookies/Bearer header
    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;
    let headers = ctx.parts_mut().headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let claims = jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())?;

    Ok(AuthContext {
        user_id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}

/// Require the caller to be a lawyer. The lawyers directory is authoritative;
/// role hints in the token never grant lawyer access on their own.
pub(crate) async fn require_lawyer(
) -> Result<(AuthContext, shared_types::LawyerProfile), ServerFnError> {
    let auth = require_auth()?;
    let pool = get_db().await;

    let profile = repo::lawyer::find_by_email(pool, &auth.email)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| AppError::forbidden("Lawyer account required").into_server_fn_error())?;

    Ok((auth, profile))
}

/// Fetch a full AuthUser by user ID, resolving the session role against the
/// lawyers directory. Returns None and clears cookies if the user no longer
/// exists.
pub(crate) async fn fetch_auth_user(user_id: i64) -> Result<Option<AuthUser>, ServerFnError> {
    let pool = get_db().await;

    let user = repo::user::find_by_id(pool, user_id)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    match user {
        Some(u) => {
            let lawyer_row = repo::lawyer::find_by_email(pool, &u.email)
                .await
                .map_err(AppErrorExt::into_server_fn_error)?;

            let session_role = SessionRole::resolve(&u.role, lawyer_row);

            Ok(Some(AuthUser {
                id: u.id,
                email: u.email,
                display_name: u.display_name,
                role: u.role,
                avatar_url: u.avatar_url,
                session_role,
            }))
        }
        None => {
            // User no longer exists; clear stale auth cookies so the client
            // does not get stuck in a broken authenticated state.
            crate::auth::cookies::schedule_clear_cookies();
            tracing::warn!(user_id, "auth token references non-existent user, clearing cookies");
            Ok(None)
        }
    }
}

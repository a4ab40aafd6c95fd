use dioxus::prelude::*;
use shared_types::AuthUser;

#[cfg(feature = "server")]
use crate::api::auth::fetch_auth_user;
#[cfg(feature = "server")]
use crate::db::get_db;
#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Register a regular user account and establish a session.
#[server]
pub async fn register(
    email: String,
    password: String,
    display_name: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use crate::repo;
    use shared_types::AppError;

    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::bad_request("Please enter a valid email address")
            .into_server_fn_error());
    }
    if password.len() < 8 {
        return Err(
            AppError::bad_request("Password must be at least 8 characters")
                .into_server_fn_error(),
        );
    }
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err(AppError::bad_request("Please enter your name").into_server_fn_error());
    }

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let pool = get_db().await;
    let user = repo::user::create(pool, &email, &password_hash, display_name, "user")
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    // Best-effort; a missing profile row must never block sign-in.
    if let Err(e) = repo::user::upsert_profile(pool, user.id).await {
        tracing::warn!(user_id = user.id, error = %e.message, "profile upsert failed");
    }

    establish_session(pool, user.id, &user.email, &user.role).await?;

    tracing::info!(user_id = user.id, "user registered");

    fetch_auth_user(user.id)
        .await?
        .ok_or_else(|| AppError::internal("User vanished after registration").into_server_fn_error())
}

/// Register a lawyer: creates both the account and the directory entry that
/// makes the session resolve as a lawyer.
#[server]
pub async fn register_lawyer(
    name: String,
    email: String,
    password: String,
    domain: String,
    phone: String,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use crate::repo;
    use shared_types::AppError;

    let email = email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::bad_request("Please enter a valid email address")
            .into_server_fn_error());
    }
    if password.len() < 8 {
        return Err(
            AppError::bad_request("Password must be at least 8 characters")
                .into_server_fn_error(),
        );
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("Please enter your name").into_server_fn_error());
    }

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let pool = get_db().await;
    let user = repo::user::create(pool, &email, &password_hash, name, "lawyer")
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    // Best-effort; a missing profile row must never block sign-in.
    if let Err(e) = repo::user::upsert_profile(pool, user.id).await {
        tracing::warn!(user_id = user.id, error = %e.message, "profile upsert failed");
    }

    // The directory row, not the role column, is what grants lawyer access.
    repo::lawyer::create(
        pool,
        name,
        &email,
        Some(domain.trim()),
        Some(phone.trim()),
    )
    .await
    .map_err(AppErrorExt::into_server_fn_error)?;

    establish_session(pool, user.id, &user.email, &user.role).await?;

    tracing::info!(user_id = user.id, "lawyer registered");

    fetch_auth_user(user.id)
        .await?
        .ok_or_else(|| AppError::internal("User vanished after registration").into_server_fn_error())
}

/// Log in with email and password. The returned AuthUser carries the session
/// role resolved against the lawyers directory.
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::password as pw;
    use crate::repo;
    use shared_types::AppError;

    let email = email.trim().to_lowercase();

    let pool = get_db().await;
    let user = repo::user::find_by_email(pool, &email)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?
        .ok_or_else(|| {
            AppError::unauthorized("Invalid email or password").into_server_fn_error()
        })?;

    let valid = pw::verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    if !valid {
        return Err(AppError::unauthorized("Invalid email or password").into_server_fn_error());
    }

    // Best-effort; a missing profile row must never block sign-in.
    if let Err(e) = repo::user::upsert_profile(pool, user.id).await {
        tracing::warn!(user_id = user.id, error = %e.message, "profile upsert failed");
    }

    establish_session(pool, user.id, &user.email, &user.role).await?;

    tracing::info!(user_id = user.id, "user logged in");

    fetch_auth_user(user.id)
        .await?
        .ok_or_else(|| AppError::internal("User vanished after login").into_server_fn_error())
}

/// Current session, if any. Returns None rather than an error for anonymous
/// visitors so public pages can call it unconditionally.
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::auth::{cookies, jwt, middleware::AuthContext};

    let ctx = match dioxus::fullstack::FullstackContext::current() {
        Some(c) => c,
        None => return Ok(None),
    };

    let parts = ctx.parts_mut();

    if let Some(auth) = parts.extensions.get::<AuthContext>() {
        let user_id = auth.user_id;
        return fetch_auth_user(user_id).await;
    }

    // Fallback when the middleware did not run for this request.
    let headers = parts.headers.clone();
    if let Some(token) = cookies::extract_access_token(&headers) {
        if let Ok(claims) = jwt::validate_access_token(&token) {
            return fetch_auth_user(claims.sub).await;
        }
    }

    Ok(None)
}

/// Log out: revoke all refresh tokens and clear auth cookies.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use crate::repo;

    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let headers = ctx.parts_mut().headers.clone();
        if let Some(token) = cookies::extract_access_token(&headers) {
            if let Ok(claims) = jwt::validate_access_token(&token) {
                let pool = get_db().await;
                if let Err(e) = repo::user::revoke_refresh_tokens(pool, claims.sub).await {
                    tracing::warn!(user_id = claims.sub, error = %e.message, "failed to revoke refresh tokens");
                }
            }
        }
    }

    cookies::schedule_clear_cookies();

    Ok(())
}

/// Issue a token pair, persist the refresh hash, and schedule cookies.
#[cfg(feature = "server")]
async fn establish_session(
    pool: &sqlx::Pool<sqlx::Postgres>,
    user_id: i64,
    email: &str,
    role: &str,
) -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use crate::repo;
    use shared_types::AppError;

    let access_token = jwt::create_access_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    repo::user::store_refresh_token(pool, user_id, &jwt::hash_token(&refresh_token), expires_at)
        .await
        .map_err(AppErrorExt::into_server_fn_error)?;

    cookies::schedule_auth_cookies(&access_token, &refresh_token);

    Ok(())
}

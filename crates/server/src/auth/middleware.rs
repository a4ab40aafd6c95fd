use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::jwt;
use crate::db::get_db;

/// Claims inserted into request extensions when the caller is authenticated.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub user_id: i64,
    pub email: String,
    pub role: String,
}

/// Axum middleware that authenticates requests from the auth cookies.
///
/// On a valid access token it inserts [`AuthContext`] into request extensions.
/// On an expired access token it attempts a transparent refresh against the
/// refresh token store, rotating the refresh token so each one is single-use.
/// Afterwards it applies any cookie action a server function scheduled via
/// [`CookieSlot`].
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let slot = CookieSlot::default();
    request.extensions_mut().insert(slot.clone());

    let headers = request.headers().clone();
    let mut refreshed: Option<(String, String)> = None;

    if let Some(token) = cookies::extract_access_token(&headers) {
        match jwt::validate_access_token(&token) {
            Ok(claims) => {
                request.extensions_mut().insert(AuthContext {
                    user_id: claims.sub,
                    email: claims.email,
                    role: claims.role,
                });
            }
            Err(_) => {
                if let Some((ctx, tokens)) = try_transparent_refresh(&headers).await {
                    request.extensions_mut().insert(ctx);
                    refreshed = Some(tokens);
                }
            }
        }
    } else if let Some((ctx, tokens)) = try_transparent_refresh(&headers).await {
        request.extensions_mut().insert(ctx);
        refreshed = Some(tokens);
    }

    let mut response = next.run(request).await;

    let pending = slot.0.lock().ok().and_then(|mut guard| guard.take());
    match pending {
        Some(PendingCookieAction::Set {
            access_token,
            refresh_token,
        }) => {
            cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_auth_cookies(response.headers_mut());
        }
        None => {
            // A transparent refresh only wins if no server function scheduled
            // its own cookie action during this request.
            if let Some((access_token, refresh_token)) = refreshed {
                cookies::set_auth_cookies(response.headers_mut(), &access_token, &refresh_token);
            }
        }
    }

    response
}

/// Attempt to mint a fresh token pair from the refresh cookie.
///
/// The stored refresh token hash must exist, be unexpired, and not revoked.
/// On success the old token is revoked and a new pair is issued, so a stolen
/// refresh token can be replayed at most zero times after its legitimate use.
async fn try_transparent_refresh(headers: &HeaderMap) -> Option<(AuthContext, (String, String))> {
    let raw_refresh = cookies::extract_refresh_token(headers)?;
    let claims = jwt::validate_refresh_token(&raw_refresh).ok()?;

    let pool = get_db().await;
    let token_hash = jwt::hash_token(&raw_refresh);

    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM refresh_tokens
         WHERE token_hash = $1 AND user_id = $2 AND revoked = FALSE AND expires_at > NOW()",
    )
    .bind(&token_hash)
    .bind(claims.sub)
    .fetch_optional(pool)
    .await
    .ok()?;

    let token_row_id = row?.0;

    let access_token = jwt::create_access_token(claims.sub, &claims.email, &claims.role).ok()?;
    let (new_refresh, expires_at) =
        jwt::create_refresh_token(claims.sub, &claims.email, &claims.role).ok()?;

    // Revoke the old token and store the new one in one transaction so a
    // crash cannot leave the user with no valid refresh token plus a revoked one.
    let mut tx = pool.begin().await.ok()?;
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE id = $1")
        .bind(token_row_id)
        .execute(&mut *tx)
        .await
        .ok()?;
    sqlx::query(
        "INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)",
    )
    .bind(claims.sub)
    .bind(jwt::hash_token(&new_refresh))
    .bind(expires_at)
    .execute(&mut *tx)
    .await
    .ok()?;
    tx.commit().await.ok()?;

    tracing::debug!(user_id = claims.sub, "transparent token refresh");

    Some((
        AuthContext {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        },
        (access_token, new_refresh),
    ))
}

/// Read the bearer identity out of the current server-function request, if any.
pub fn current_auth_context() -> Option<AuthContext> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();
    parts.extensions.get::<AuthContext>().cloned()
}

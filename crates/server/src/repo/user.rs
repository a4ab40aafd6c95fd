use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use shared_types::AppError;

use crate::error_convert::SqlxErrorExt;

/// Full user row, including the password hash. Never leaves the server crate;
/// API handlers convert to `AuthUser` before returning anything to the client.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

pub async fn create(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    display_name: &str,
    role: &str,
) -> Result<UserRecord, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(
        "INSERT INTO users (email, password_hash, display_name, role)
         VALUES ($1, $2, $3, $4)
         RETURNING id, email, password_hash, display_name, role, avatar_url",
    )
    .bind(email)
    .bind(password_hash)
    .bind(display_name)
    .bind(role)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserRecord>, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, password_hash, display_name, role, avatar_url
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: i64) -> Result<Option<UserRecord>, AppError> {
    let row = sqlx::query_as::<_, UserRecord>(
        "SELECT id, email, password_hash, display_name, role, avatar_url
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Store a refresh token hash for a user.
pub async fn store_refresh_token(
    pool: &Pool<Postgres>,
    user_id: i64,
    token_hash: &str,
    expires_at: DateTime<Utc>,
) -> Result<(), AppError> {
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}

/// Revoke all refresh tokens for a user. Used on logout.
pub async fn revoke_refresh_tokens(pool: &Pool<Postgres>, user_id: i64) -> Result<(), AppError> {
    sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1 AND revoked = FALSE")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}

/// Profile rows copy their identity columns from the users table; every
/// NOT NULL column must be supplied or the insert fails outright.
const PROFILE_UPSERT_SQL: &str = "INSERT INTO profiles (id, email, display_name, role) \
     SELECT id, email, display_name, role FROM users WHERE id = $1 \
     ON CONFLICT (id) DO NOTHING";

/// Ensure a profile row exists for the user. Idempotent; safe to call on
/// every login.
pub async fn upsert_profile(pool: &Pool<Postgres>, user_id: i64) -> Result<(), AppError> {
    sqlx::query(PROFILE_UPSERT_SQL)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PROFILE_UPSERT_SQL;

    #[test]
    fn profile_upsert_supplies_every_required_column() {
        // profiles.email, display_name, and role have no defaults; the
        // insert must source them from users and stay idempotent.
        for column in ["id", "email", "display_name", "role"] {
            assert!(
                PROFILE_UPSERT_SQL.contains(column),
                "missing column {column}"
            );
        }
        assert!(PROFILE_UPSERT_SQL.contains("FROM users"));
        assert!(PROFILE_UPSERT_SQL.contains("ON CONFLICT (id) DO NOTHING"));
    }
}

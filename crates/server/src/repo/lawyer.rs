use sqlx::{Pool, Postgres};

use shared_types::{AppError, LawyerProfile};

use crate::error_convert::SqlxErrorExt;

pub async fn create(
    pool: &Pool<Postgres>,
    name: &str,
    email: &str,
    domain: Option<&str>,
    phone: Option<&str>,
) -> Result<LawyerProfile, AppError> {
    let row = sqlx::query_as::<_, LawyerProfile>(
        "INSERT INTO lawyers (name, email, domain, phone)
         VALUES ($1, $2, NULLIF($3, ''), NULLIF($4, ''))
         RETURNING id, name, email, domain, phone",
    )
    .bind(name)
    .bind(email)
    .bind(domain.unwrap_or(""))
    .bind(phone.unwrap_or(""))
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Probe the lawyer directory by account email. This is the source of truth
/// for whether a session gets the lawyer dashboard.
pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<LawyerProfile>, AppError> {
    let row = sqlx::query_as::<_, LawyerProfile>(
        "SELECT id, name, email, domain, phone FROM lawyers WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

pub async fn find_by_id(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<LawyerProfile>, AppError> {
    let row = sqlx::query_as::<_, LawyerProfile>(
        "SELECT id, name, email, domain, phone FROM lawyers WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<LawyerProfile>, AppError> {
    let rows = sqlx::query_as::<_, LawyerProfile>(
        "SELECT id, name, email, domain, phone FROM lawyers ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Lawyers practicing in a given domain, matched case-insensitively.
pub async fn list_by_domain(
    pool: &Pool<Postgres>,
    domain: &str,
    limit: i64,
) -> Result<Vec<LawyerProfile>, AppError> {
    let rows = sqlx::query_as::<_, LawyerProfile>(
        "SELECT id, name, email, domain, phone FROM lawyers
         WHERE LOWER(domain) = LOWER($1)
         ORDER BY name
         LIMIT $2",
    )
    .bind(domain)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// First `limit` lawyers regardless of domain. Fallback when a domain match
/// comes back empty.
pub async fn list_any(pool: &Pool<Postgres>, limit: i64) -> Result<Vec<LawyerProfile>, AppError> {
    let rows = sqlx::query_as::<_, LawyerProfile>(
        "SELECT id, name, email, domain, phone FROM lawyers ORDER BY name LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

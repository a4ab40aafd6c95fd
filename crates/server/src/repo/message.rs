use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AppError, ChatMessage};

use crate::error_convert::SqlxErrorExt;

/// Messages on a case thread, oldest first so the transcript reads top-down.
pub async fn list_for_case(
    pool: &Pool<Postgres>,
    case_id: Uuid,
) -> Result<Vec<ChatMessage>, AppError> {
    let rows = sqlx::query_as::<_, ChatMessage>(
        "SELECT id, case_id, sender_id, body, created_at
         FROM messages WHERE case_id = $1 ORDER BY created_at ASC",
    )
    .bind(case_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

pub async fn create(
    pool: &Pool<Postgres>,
    case_id: Uuid,
    sender_id: i64,
    body: &str,
) -> Result<ChatMessage, AppError> {
    let row = sqlx::query_as::<_, ChatMessage>(
        "INSERT INTO messages (case_id, sender_id, body)
         VALUES ($1, $2, $3)
         RETURNING id, case_id, sender_id, body, created_at",
    )
    .bind(case_id)
    .bind(sender_id)
    .bind(body)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

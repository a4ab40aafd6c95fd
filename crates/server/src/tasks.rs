//! Background task discipline for work that must not block a user response.
//!
//! Persistence side effects (saving an analyzed case, logging an analytics
//! event) run as detached tokio tasks. Each task is attempted exactly once;
//! a failure is recorded in the `dead_letter_tasks` table instead of being
//! retried, so a flaky database cannot multiply writes.

use serde::Serialize;
use shared_types::AppError;
use std::future::Future;

use crate::db::get_db;

/// Spawn a one-shot background task. On failure the payload and error are
/// written to the dead-letter table for operator review.
pub fn spawn_task<P, F>(task_kind: &'static str, payload: P, fut: F)
where
    P: Serialize + Send + Sync + 'static,
    F: Future<Output = Result<(), AppError>> + Send + 'static,
{
    tokio::spawn(async move {
        match fut.await {
            Ok(()) => {
                tracing::debug!(task_kind, "background task completed");
            }
            Err(err) => {
                tracing::warn!(task_kind, error = %err.message, "background task failed, dead-lettering");
                record_dead_letter(task_kind, &payload, &err).await;
            }
        }
    });
}

async fn record_dead_letter<P: Serialize>(task_kind: &str, payload: &P, err: &AppError) {
    let payload_json = match serde_json::to_value(payload) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!(task_kind, error = %e, "dead-letter payload not serializable");
            serde_json::Value::Null
        }
    };

    let pool = get_db().await;

    let result = sqlx::query(
        "INSERT INTO dead_letter_tasks (task_kind, payload, error) VALUES ($1, $2, $3)",
    )
    .bind(task_kind)
    .bind(&payload_json)
    .bind(&err.message)
    .execute(pool)
    .await;

    if let Err(e) = result {
        tracing::error!(task_kind, error = %e, "failed to write dead-letter record");
    }
}

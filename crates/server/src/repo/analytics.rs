use sqlx::{Pool, Postgres};

use shared_types::{AnalyticsSummary, AppError, CaseFiledEvent, HotspotBucket};

use crate::error_convert::SqlxErrorExt;

pub async fn insert_event(pool: &Pool<Postgres>, event: &CaseFiledEvent) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO analytics_events (legal_category, pin_code, state, city)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(&event.legal_category)
    .bind(&event.pin_code)
    .bind(&event.state)
    .bind(&event.city)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(())
}

/// Grievance hotspots grouped by category and location, largest buckets first.
pub async fn hotspots(pool: &Pool<Postgres>, limit: i64) -> Result<Vec<HotspotBucket>, AppError> {
    let rows = sqlx::query_as::<_, (String, String, String, i64)>(
        "SELECT legal_category, state, city, COUNT(*) AS count
         FROM analytics_events
         GROUP BY legal_category, state, city
         ORDER BY count DESC
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows
        .into_iter()
        .map(|(legal_category, state, city, count)| HotspotBucket {
            legal_category,
            state,
            city,
            count,
        })
        .collect())
}

pub async fn summary(pool: &Pool<Postgres>) -> Result<AnalyticsSummary, AppError> {
    let total_cases: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM analytics_events")
        .fetch_one(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let top_category: Option<String> = sqlx::query_scalar(
        "SELECT legal_category FROM analytics_events
         GROUP BY legal_category ORDER BY COUNT(*) DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let top_state: Option<String> = sqlx::query_scalar(
        "SELECT state FROM analytics_events
         GROUP BY state ORDER BY COUNT(*) DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(AnalyticsSummary {
        total_cases,
        top_category,
        top_state,
    })
}

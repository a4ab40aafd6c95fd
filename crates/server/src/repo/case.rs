use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{AnalysisResult, CaseAnalysisRequest, CaseRecord};

use crate::error_convert::SqlxErrorExt;
use shared_types::AppError;

const CASE_COLUMNS: &str = "id, user_id, description, defendant_name, claim_amount, \
     incident_date, city, state, pin_code, legal_category, status, confidence_score, \
     complexity, legal_sections, reasoning, courtroom_script, document_url, \
     assigned_lawyer_id, created_at";

/// Persist an analyzed case. Empty location fields are stored as NULL so the
/// dashboard can distinguish "not given" from "given as blank".
pub async fn create_analyzed(
    pool: &Pool<Postgres>,
    user_id: i64,
    request: &CaseAnalysisRequest,
    analysis: &AnalysisResult,
) -> Result<CaseRecord, AppError> {
    let sections = serde_json::to_value(&analysis.legal_sections)
        .map_err(|e| AppError::internal(format!("legal_sections not serializable: {e}")))?;

    let row = sqlx::query_as::<_, CaseRecord>(&format!(
        "INSERT INTO cases
            (user_id, description, defendant_name, claim_amount, incident_date,
             city, state, pin_code, legal_category, confidence_score, complexity,
             legal_sections, reasoning, courtroom_script)
         VALUES ($1, $2, $3, $4, $5,
                 NULLIF($6, ''), NULLIF($7, ''), NULLIF($8, ''), $9, $10, $11,
                 $12, $13, $14)
         RETURNING {CASE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(&request.grievance_text)
    .bind(&request.details.defendant_name)
    .bind(request.details.claim_amount)
    .bind(request.details.incident_date)
    .bind(&request.details.city)
    .bind(&request.details.state)
    .bind(&request.details.pin_code)
    .bind(&request.legal_category)
    .bind(analysis.confidence_score)
    .bind(analysis.complexity.as_str())
    .bind(sections)
    .bind(&analysis.reasoning)
    .bind(&analysis.courtroom_script)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// All cases filed by a user, newest first.
pub async fn list_for_user(pool: &Pool<Postgres>, user_id: i64) -> Result<Vec<CaseRecord>, AppError> {
    let rows = sqlx::query_as::<_, CaseRecord>(&format!(
        "SELECT {CASE_COLUMNS} FROM cases WHERE user_id = $1 ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Cases on a lawyer's board: cases assigned to them plus unassigned open
/// cases awaiting pickup, newest first, capped at `limit`.
pub async fn list_for_lawyer(
    pool: &Pool<Postgres>,
    lawyer_id: i64,
    limit: i64,
) -> Result<Vec<CaseRecord>, AppError> {
    let rows = sqlx::query_as::<_, CaseRecord>(&format!(
        "SELECT {CASE_COLUMNS} FROM cases
         WHERE (assigned_lawyer_id = $1 OR (assigned_lawyer_id IS NULL AND status != 'Closed'))
         ORDER BY created_at DESC
         LIMIT $2"
    ))
    .bind(lawyer_id)
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<CaseRecord>, AppError> {
    let row = sqlx::query_as::<_, CaseRecord>(&format!(
        "SELECT {CASE_COLUMNS} FROM cases WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Attach a generated complaint document to a case the user owns.
pub async fn set_document_url(
    pool: &Pool<Postgres>,
    case_id: Uuid,
    user_id: i64,
    document_url: &str,
) -> Result<(), AppError> {
    let result = sqlx::query(
        "UPDATE cases SET document_url = $1 WHERE id = $2 AND user_id = $3",
    )
    .bind(document_url)
    .bind(case_id)
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Case not found"));
    }
    Ok(())
}

/// Open a consultation case directly with a lawyer, with no grievance
/// attached yet. Shows up on both parties' dashboards as Pending.
pub async fn create_consultation(
    pool: &Pool<Postgres>,
    user_id: i64,
    lawyer: &shared_types::LawyerProfile,
) -> Result<CaseRecord, AppError> {
    let row = sqlx::query_as::<_, CaseRecord>(&format!(
        "INSERT INTO cases
            (user_id, description, defendant_name, claim_amount, incident_date,
             legal_category, status, assigned_lawyer_id)
         VALUES ($1, $2, '', 0, CURRENT_DATE, $3, 'Pending', $4)
         RETURNING {CASE_COLUMNS}"
    ))
    .bind(user_id)
    .bind(format!("Consultation with {}", lawyer.name))
    .bind(lawyer.domain_or_general())
    .bind(lawyer.id)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Assign a lawyer to an unassigned case. A case keeps its first assignee.
pub async fn assign_lawyer(
    pool: &Pool<Postgres>,
    case_id: Uuid,
    lawyer_id: i64,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        "UPDATE cases SET assigned_lawyer_id = $1
         WHERE id = $2 AND assigned_lawyer_id IS NULL",
    )
    .bind(lawyer_id)
    .bind(case_id)
    .execute(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat message attached to a case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct ChatMessage {
    pub id: i64,
    pub case_id: Uuid,
    pub sender_id: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded user action. Immutable once stored — there is no update
/// or delete path anywhere in the API.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Action {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub description: String,
}

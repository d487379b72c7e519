use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Action;

/// Inserts a new action. The id is generated here, never taken from the
/// caller; repeated identical submissions create distinct rows.
pub async fn create(
    pool: &PgPool,
    timestamp: DateTime<Utc>,
    sender: &str,
    description: &str,
) -> Result<Action, sqlx::Error> {
    sqlx::query_as::<_, Action>(
        "INSERT INTO actions (id, timestamp, sender, description)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(timestamp)
    .bind(sender)
    .bind(description)
    .fetch_one(pool)
    .await
}

/// Exact sender match, case-sensitive (PostgreSQL default text equality).
pub async fn find_by_sender(pool: &PgPool, sender: &str) -> Result<Vec<Action>, sqlx::Error> {
    sqlx::query_as::<_, Action>("SELECT * FROM actions WHERE sender = $1")
        .bind(sender)
        .fetch_all(pool)
        .await
}

/// Actions with timestamp in `[from, to]`, both bounds inclusive.
pub async fn find_by_date_range(
    pool: &PgPool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<Action>, sqlx::Error> {
    sqlx::query_as::<_, Action>(
        "SELECT * FROM actions WHERE timestamp >= $1 AND timestamp <= $2",
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &PgPool) -> Result<Vec<Action>, sqlx::Error> {
    sqlx::query_as::<_, Action>("SELECT * FROM actions")
        .fetch_all(pool)
        .await
}

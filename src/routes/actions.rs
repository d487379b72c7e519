use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::Action;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateAction {
    // Any RFC 3339 offset is accepted; chrono normalizes to UTC on the way in.
    pub timestamp: DateTime<Utc>,
    pub sender: String,
    pub description: String,
}

#[derive(Deserialize)]
pub struct SenderParams {
    #[serde(rename = "Sender")]
    pub sender: String,
}

#[derive(Deserialize)]
pub struct DateRangeParams {
    #[serde(rename = "ActionDateFrom")]
    pub from: String,
    #[serde(rename = "ActionDateTo")]
    pub to: String,
}

pub async fn welcome() -> &'static str {
    "Welcome to user action API!"
}

pub async fn create(
    State(state): State<SharedState>,
    Json(payload): Json<CreateAction>,
) -> Result<impl IntoResponse, AppError> {
    if payload.sender.trim().is_empty() {
        return Err(AppError::BadRequest("Sender is required.".to_string()));
    }
    if payload.description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Description is required.".to_string(),
        ));
    }

    let action = db::actions::create(
        &state.pool,
        payload.timestamp,
        &payload.sender,
        &payload.description,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/actions/{}", action.id))],
        Json(action),
    ))
}

pub async fn by_sender(
    State(state): State<SharedState>,
    Query(params): Query<SenderParams>,
) -> Result<Json<Vec<Action>>, AppError> {
    let actions = db::actions::find_by_sender(&state.pool, &params.sender).await?;
    if actions.is_empty() {
        return Err(AppError::NotFound(
            "No actions found for this sender.".to_string(),
        ));
    }
    Ok(Json(actions))
}

pub async fn by_date_range(
    State(state): State<SharedState>,
    Query(params): Query<DateRangeParams>,
) -> Result<Json<Vec<Action>>, AppError> {
    let (Some(from), Some(to)) = (parse_bound(&params.from), parse_bound(&params.to)) else {
        return Err(AppError::BadRequest("Invalid date format.".to_string()));
    };

    // Bounds are compared as UTC instants, same as the query below uses them.
    if from > to {
        return Err(AppError::BadRequest("Invalid date format.".to_string()));
    }

    let actions = db::actions::find_by_date_range(&state.pool, from, to).await?;
    if actions.is_empty() {
        return Err(AppError::NotFound(
            "No actions found in this date range.".to_string(),
        ));
    }
    Ok(Json(actions))
}

pub async fn list_all(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Action>>, AppError> {
    let actions = db::actions::list_all(&state.pool).await?;
    Ok(Json(actions))
}

/// Parses a free-text date bound: RFC 3339, a naive datetime with `T` or
/// space separator, or a bare date (midnight). Naive values are read as UTC.
fn parse_bound(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}

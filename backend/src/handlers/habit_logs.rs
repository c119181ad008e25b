use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::dto::{HabitLogResponse, HabitLogsResponse};
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::handlers::habits::require_habit_id;
use crate::models::habit_log::{LogHabitRequest, NewHabitLog};
use crate::{AppState, PLACEHOLDER_USER_ID};

/// Upsert the log for `date`: a second call for the same day replaces the first.
pub async fn log_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    ValidatedJson(body): ValidatedJson<LogHabitRequest>,
) -> AppResult<(StatusCode, Json<HabitLogResponse>)> {
    let habit_id = require_habit_id(habit_id)?;
    let log = state.store.log_habit(NewHabitLog {
        habit_id,
        user_id: PLACEHOLDER_USER_ID.to_string(),
        date: body.date,
        completed: body.completed,
        notes: body.notes.filter(|n| !n.is_empty()),
    })?;

    tracing::info!(
        habit_id = %log.habit_id,
        date = %log.date,
        completed = log.completed,
        "Habit logged"
    );
    Ok((StatusCode::CREATED, Json(HabitLogResponse { log })))
}

pub async fn list_habit_logs(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> AppResult<Json<HabitLogsResponse>> {
    let habit_id = require_habit_id(habit_id)?;
    let logs = state.store.habit_logs(&habit_id)?;
    Ok(Json(HabitLogsResponse { logs }))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dto::{HabitResponse, HabitsResponse, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::models::habit::{CreateHabitRequest, NewHabit, UpdateHabitRequest};
use crate::{AppState, PLACEHOLDER_USER_ID};

/// Reject blank path ids before touching the store.
pub(crate) fn require_habit_id(habit_id: String) -> AppResult<String> {
    if habit_id.trim().is_empty() {
        return Err(AppError::Validation("Habit ID is required".into()));
    }
    Ok(habit_id)
}

pub async fn list_habits(State(state): State<AppState>) -> AppResult<Json<HabitsResponse>> {
    let habits = state.store.habits_by_user(PLACEHOLDER_USER_ID)?;
    Ok(Json(HabitsResponse { habits }))
}

pub async fn get_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> AppResult<Json<HabitResponse>> {
    let habit_id = require_habit_id(habit_id)?;
    let habit = state.store.habit(&habit_id)?;
    Ok(Json(HabitResponse { habit }))
}

pub async fn create_habit(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateHabitRequest>,
) -> AppResult<(StatusCode, Json<HabitResponse>)> {
    let habit = state.store.create_habit(NewHabit {
        id: Uuid::new_v4().to_string(),
        user_id: PLACEHOLDER_USER_ID.to_string(),
        name: body.name,
        description: body.description.filter(|d| !d.is_empty()),
    })?;

    tracing::info!(habit_id = %habit.id, user_id = %habit.user_id, "Habit created");
    Ok((StatusCode::CREATED, Json(HabitResponse { habit })))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateHabitRequest>,
) -> AppResult<Json<HabitResponse>> {
    let habit_id = require_habit_id(habit_id)?;
    let habit = state.store.update_habit(&habit_id, &body)?;

    tracing::info!(habit_id = %habit.id, "Habit updated");
    Ok(Json(HabitResponse { habit }))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let habit_id = require_habit_id(habit_id)?;
    state.store.delete_habit(&habit_id)?;

    tracing::info!(habit_id = %habit_id, "Habit deleted");
    Ok(Json(MessageResponse {
        message: "Habit deleted successfully".into(),
    }))
}

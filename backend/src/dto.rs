//! # Habit Tracker: Response DTOs
//!
//! Every success body wraps its payload in a single named field
//! (`{"habit": ...}`, `{"logs": [...]}`) so clients can rely on a stable
//! envelope. Request bodies live next to their entities in `models`.

use serde::Serialize;

use crate::models::habit::Habit;
use crate::models::habit_log::HabitLog;

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/v1/habits
#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub habits: Vec<Habit>,
}

/// POST /api/v1/habits, GET|PUT /api/v1/habits/:id
#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub habit: Habit,
}

/// POST /api/v1/habits/:id/log
#[derive(Debug, Serialize)]
pub struct HabitLogResponse {
    pub log: HabitLog,
}

/// GET /api/v1/habits/:id/logs
#[derive(Debug, Serialize)]
pub struct HabitLogsResponse {
    pub logs: Vec<HabitLog>,
}

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "habit-tracker",
    }))
}

pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Habit Tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "endpoints": {
            "health": "/health",
            "habits": "/api/v1/habits",
        },
    }))
}

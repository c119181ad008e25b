//! Habit tracker HTTP API.
//!
//! Users create habits and log a daily completion status against them. All
//! state lives in a single in-memory [`db::HabitStore`] shared by every
//! request through [`AppState`].

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod router;

use config::Config;
use db::HabitStore;

/// Owner recorded on every habit and log until authentication exists.
pub const PLACEHOLDER_USER_ID: &str = "user123";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HabitStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(HabitStore::new()),
            config: Arc::new(config),
        }
    }
}

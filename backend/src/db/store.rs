use chrono::Utc;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::habit::{Habit, NewHabit, UpdateHabitRequest};
use crate::models::habit_log::{HabitLog, NewHabitLog};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Habit store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Default)]
struct Tables {
    habits: HashMap<String, Habit>,
    /// Keyed by habit id, in insertion order.
    logs: HashMap<String, Vec<HabitLog>>,
}

/// In-memory habit store.
///
/// A single reader/writer lock covers both tables, so every operation
/// (including the delete-and-cascade path) runs in one critical section.
/// Data lives for the lifetime of the process.
#[derive(Default)]
pub struct HabitStore {
    tables: RwLock<Tables>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Insert a habit, stamping `created_at` and `updated_at`.
    ///
    /// No duplicate check: the caller supplies a fresh id.
    pub fn create_habit(&self, new: NewHabit) -> StoreResult<Habit> {
        let now = Utc::now();
        let habit = Habit {
            id: new.id,
            user_id: new.user_id,
            name: new.name,
            description: new.description,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.write()?;
        tables.habits.insert(habit.id.clone(), habit.clone());
        Ok(habit)
    }

    /// All habits owned by `user_id`, oldest first.
    pub fn habits_by_user(&self, user_id: &str) -> StoreResult<Vec<Habit>> {
        let tables = self.read()?;
        let mut habits: Vec<Habit> = tables
            .habits
            .values()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect();
        drop(tables);

        habits.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(habits)
    }

    pub fn habit(&self, id: &str) -> StoreResult<Habit> {
        self.read()?
            .habits
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::HabitNotFound(id.to_string()))
    }

    /// Overwrite `name` / `description` where the update carries a non-empty
    /// value, then refresh `updated_at`.
    pub fn update_habit(&self, id: &str, updates: &UpdateHabitRequest) -> StoreResult<Habit> {
        let mut tables = self.write()?;
        let habit = tables
            .habits
            .get_mut(id)
            .ok_or_else(|| StoreError::HabitNotFound(id.to_string()))?;

        if let Some(name) = updates.name() {
            habit.name = name.to_string();
        }
        if let Some(description) = updates.description() {
            habit.description = Some(description.to_string());
        }
        // created_at <= updated_at even if the wall clock steps backwards
        habit.updated_at = Utc::now().max(habit.created_at);

        Ok(habit.clone())
    }

    /// Remove a habit together with all of its logs.
    pub fn delete_habit(&self, id: &str) -> StoreResult<()> {
        let mut tables = self.write()?;
        if tables.habits.remove(id).is_none() {
            return Err(StoreError::HabitNotFound(id.to_string()));
        }
        tables.logs.remove(id);
        Ok(())
    }

    /// Record completion for a habit on a date. An existing log for the same
    /// date is replaced in place; otherwise the log is appended.
    pub fn log_habit(&self, new: NewHabitLog) -> StoreResult<HabitLog> {
        let mut tables = self.write()?;
        if !tables.habits.contains_key(&new.habit_id) {
            return Err(StoreError::HabitNotFound(new.habit_id));
        }

        let log = HabitLog {
            habit_id: new.habit_id,
            user_id: new.user_id,
            date: new.date,
            completed: new.completed,
            notes: new.notes,
            created_at: Utc::now(),
        };

        let logs = tables.logs.entry(log.habit_id.clone()).or_default();
        match logs.iter_mut().find(|existing| existing.date == log.date) {
            Some(existing) => *existing = log.clone(),
            None => logs.push(log.clone()),
        }

        Ok(log)
    }

    /// Logs for a habit in insertion order. Unknown habits yield an empty list.
    pub fn habit_logs(&self, habit_id: &str) -> StoreResult<Vec<HabitLog>> {
        Ok(self
            .read()?
            .logs
            .get(habit_id)
            .cloned()
            .unwrap_or_default())
    }
}

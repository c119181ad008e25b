pub mod store;

pub use store::{HabitStore, StoreError, StoreResult};
